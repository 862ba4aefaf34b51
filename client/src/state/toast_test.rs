use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.success("Objeto atualizado!", "Suas alterações foram salvas com sucesso.");
    let b = state.error("Erro", "Falhou");
    assert!(b > a);
    assert_eq!(state.toasts[0].variant, ToastVariant::Default);
    assert_eq!(state.toasts[1].variant, ToastVariant::Destructive);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.error("A", "");
    let b = state.error("B", "");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn queue_keeps_newest_toasts() {
    let mut state = ToastState::default();
    for i in 0..5 {
        state.error(&format!("t{i}"), "");
    }
    let titles: Vec<_> = state.toasts.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["t2", "t3", "t4"]);
}

use super::*;

#[test]
fn begin_moves_to_loading_and_finish_applies_current_ticket() {
    let mut loadable = Loadable::<Vec<u32>>::default();
    assert_eq!(loadable.state, LoadState::Idle);
    assert!(loadable.state.is_pending());

    let ticket = loadable.begin();
    assert!(loadable.state.is_loading());
    assert!(loadable.finish::<String>(ticket, Ok(vec![1, 2, 3])));
    assert_eq!(loadable.items(), vec![1, 2, 3]);
}

#[test]
fn failed_fetch_leaves_no_items_and_keeps_message() {
    let mut loadable = Loadable::<Vec<u32>>::default();
    let ticket = loadable.begin();
    assert!(loadable.finish(ticket, Err("network down")));
    assert!(loadable.items().is_empty());
    assert_eq!(loadable.state.error(), Some("network down"));
}

#[test]
fn superseded_ticket_is_ignored() {
    let mut loadable = Loadable::<&str>::default();
    let first = loadable.begin();
    let second = loadable.begin();
    assert!(!loadable.finish::<String>(first, Ok("stale")));
    assert!(loadable.state.is_loading());
    assert!(loadable.finish::<String>(second, Ok("fresh")));
    assert_eq!(loadable.value(), Some(&"fresh"));
}

#[test]
fn cancelled_loadable_drops_late_response() {
    let mut loadable = Loadable::<u8>::default();
    let ticket = loadable.begin();
    loadable.cancel();
    assert!(loadable.is_cancelled());
    assert_eq!(loadable.state, LoadState::Idle);
    assert!(!loadable.finish::<String>(ticket, Ok(7)));
    assert_eq!(loadable.value(), None);
}

#[test]
fn begin_after_cancel_rearms() {
    let mut loadable = Loadable::<u8>::default();
    let _ = loadable.begin();
    loadable.cancel();
    let ticket = loadable.begin();
    assert!(!loadable.is_cancelled());
    assert!(loadable.finish::<String>(ticket, Ok(1)));
}

#[test]
fn cancel_keeps_loaded_value() {
    let mut loadable = Loadable::<u8>::default();
    let ticket = loadable.begin();
    loadable.finish::<String>(ticket, Ok(3));
    loadable.cancel();
    assert_eq!(loadable.value(), Some(&3));
}

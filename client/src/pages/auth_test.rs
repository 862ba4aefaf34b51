use super::*;

#[test]
fn sign_in_trims_email_and_ignores_name() {
    let creds = validate_credentials(AuthMode::SignIn, "  ana@ufrn.br ", "abc", "").unwrap();
    assert_eq!(creds.email, "ana@ufrn.br");
    assert_eq!(creds.password, "abc");
}

#[test]
fn empty_fields_are_rejected() {
    assert_eq!(validate_credentials(AuthMode::SignIn, " ", "secret", ""), Err("Preencha e-mail e senha."));
    assert_eq!(validate_credentials(AuthMode::SignIn, "a@b.c", "", ""), Err("Preencha e-mail e senha."));
}

#[test]
fn email_needs_at_sign() {
    assert_eq!(validate_credentials(AuthMode::SignIn, "ana", "secret", ""), Err("Informe um e-mail válido."));
}

#[test]
fn sign_up_requires_name_and_six_char_password() {
    assert_eq!(
        validate_credentials(AuthMode::SignUp, "a@b.c", "secret", "  "),
        Err("Informe seu nome completo.")
    );
    assert_eq!(
        validate_credentials(AuthMode::SignUp, "a@b.c", "12345", "Ana"),
        Err("A senha deve ter pelo menos 6 caracteres.")
    );
    let creds = validate_credentials(AuthMode::SignUp, "a@b.c", "123456", " Ana Souza ").unwrap();
    assert_eq!(creds.name, "Ana Souza");
}

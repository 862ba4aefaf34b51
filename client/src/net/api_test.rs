use super::*;

#[test]
fn available_objects_path_filters_status_and_orders_newest_first() {
    assert_eq!(
        available_objects_query().to_path(),
        "objects?select=*,owner:profiles(*)&status=eq.disponivel&order=created_at.desc"
    );
}

#[test]
fn owned_objects_path_filters_by_owner() {
    assert_eq!(
        owned_objects_query("u-1").to_path(),
        "objects?select=*,owner:profiles(*)&owner_id=eq.u-1&order=created_at.desc"
    );
}

#[test]
fn object_and_profile_paths_filter_by_id() {
    assert_eq!(object_by_id_query("o-9").to_path(), "objects?select=*,owner:profiles(*)&id=eq.o-9");
    assert_eq!(profile_query("u-1").to_path(), "profiles?select=*&id=eq.u-1");
}

#[test]
fn trades_path_matches_either_party_with_joins() {
    let path = trades_for_user_query("u-1").to_path();
    assert!(path.starts_with("trades?select=id,created_at,updated_at,status,mensagem,"));
    assert!(path.contains("proponente:profiles!proponente_id(id,nome_completo,avatar_url,email)"));
    assert!(path.contains("objeto_desejado:objects!objeto_desejado_id(id,titulo,categoria,imagens)"));
    assert!(path.contains("&or=(proponente_id.eq.u-1,receptor_id.eq.u-1)"));
    assert!(path.ends_with("&order=created_at.desc"));
}

#[test]
fn recent_trades_path_limits_and_orders_by_activity() {
    let path = recent_trades_query("u-1", 10).to_path();
    assert!(path.contains("&limit=10"));
    assert!(path.ends_with("&order=updated_at.desc.nullslast,created_at.desc"));
}

#[test]
fn image_object_path_keeps_lowercased_extension() {
    assert_eq!(image_object_path("u-1", "Foto.JPG", "abc"), "u-1/abc.jpg");
    assert_eq!(image_object_path("u-1", "scan", "abc"), "u-1/abc");
    assert_eq!(image_object_path("u-1", ".hidden", "abc"), "u-1/abc");
}

#[test]
fn file_extension_uses_last_segment() {
    assert_eq!(file_extension("a.tar.gz").as_deref(), Some("gz"));
    assert_eq!(file_extension("noext"), None);
    assert_eq!(file_extension("trailing."), None);
}

#[test]
fn sign_up_payload_carries_name_metadata() {
    assert_eq!(
        sign_up_payload("a@b.test", "secret1", "Ana"),
        serde_json::json!({
            "email": "a@b.test",
            "password": "secret1",
            "data": { "nome_completo": "Ana" }
        })
    );
}

#[test]
fn anonymous_client_uses_anon_key_and_rejects_writes() {
    let cfg = BackendConfig::from_values(Some("https://x.test"), Some("anon")).unwrap();
    let client = BackendClient::new(cfg, None);
    assert_eq!(client.bearer(), "anon");
    assert_eq!(client.require_session(), Err(ApiError::NotAuthenticated));
}

#[test]
fn session_client_uses_access_token() {
    let cfg = BackendConfig::from_values(Some("https://x.test"), Some("anon")).unwrap();
    let client = BackendClient::new(cfg, Some("token".to_owned()));
    assert_eq!(client.bearer(), "token");
    assert_eq!(client.require_session(), Ok(()));
}

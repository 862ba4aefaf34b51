use super::*;

#[test]
fn bare_table_has_no_query_string() {
    assert_eq!(TableQuery::new("objects").to_path(), "objects");
}

#[test]
fn available_objects_query_matches_listing_contract() {
    let path = TableQuery::new("objects")
        .select("*, owner:profiles(*)")
        .eq("status", "disponivel")
        .order("created_at", Order::Desc)
        .to_path();
    assert_eq!(path, "objects?select=*,owner:profiles(*)&status=eq.disponivel&order=created_at.desc");
}

#[test]
fn eq_values_are_url_encoded() {
    let path = TableQuery::new("objects").eq("titulo", "a b&c").to_path();
    assert_eq!(path, "objects?titulo=eq.a%20b%26c");
}

#[test]
fn or_conditions_are_parenthesized() {
    let path = TableQuery::new("trades")
        .or(&[cond_eq("proponente_id", "u-1"), cond_eq("receptor_id", "u-1")])
        .to_path();
    assert_eq!(path, "trades?or=(proponente_id.eq.u-1,receptor_id.eq.u-1)");
}

#[test]
fn multiple_orders_join_into_one_param_after_limit() {
    let path = TableQuery::new("trades")
        .order_nulls_last("updated_at", Order::Desc)
        .order("created_at", Order::Desc)
        .limit(10)
        .to_path();
    assert_eq!(path, "trades?limit=10&order=updated_at.desc.nullslast,created_at.desc");
}

#[test]
fn select_lists_are_compacted() {
    let path = TableQuery::new("trades")
        .select(
            "id, status,
             proponente:profiles!proponente_id(id, nome_completo)",
        )
        .to_path();
    assert_eq!(path, "trades?select=id,status,proponente:profiles!proponente_id(id,nome_completo)");
}

#[test]
fn rpc_path_prefixes_function() {
    assert_eq!(rpc_path("get_user_rating"), "rpc/get_user_rating");
}

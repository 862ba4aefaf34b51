use chrono::{TimeZone, Utc};

use super::*;

fn object(id: &str, title: &str, category: ObjectCategory, status: ObjectStatus, minute: u32) -> Object {
    Object {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("descrição de {title}"),
        category,
        condition: "Usado".to_owned(),
        status,
        images: Vec::new(),
        owner_id: "u-1".to_owned(),
        owner: None,
        created_at: Utc.with_ymd_and_hms(2024, 3, 10, 12, minute, 0).unwrap(),
        updated_at: None,
    }
}

fn owned_set() -> Vec<Object> {
    vec![
        object("o-1", "Cálculo I", ObjectCategory::Books, ObjectStatus::Available, 1),
        object("o-2", "Fone", ObjectCategory::Electronics, ObjectStatus::Traded, 2),
        object("o-3", "Jaqueta", ObjectCategory::Clothing, ObjectStatus::Unavailable, 3),
        object("o-4", "Mesa", ObjectCategory::Furniture, ObjectStatus::Traded, 4),
        object("o-5", "Relógio", ObjectCategory::Accessories, ObjectStatus::InNegotiation, 5),
    ]
}

fn ids(objects: &[Object]) -> Vec<&str> {
    objects.iter().map(|o| o.id.as_str()).collect()
}

#[test]
fn empty_filter_keeps_every_object_in_order() {
    let objects = owned_set();
    let filter = ObjectFilter::default();
    assert!(filter.is_empty());
    assert_eq!(filter_objects(&objects, &filter).len(), objects.len());
}

#[test]
fn category_filter_selects_matching_category() {
    let filter = ObjectFilter { category: Some(ObjectCategory::Electronics), query: String::new() };
    assert_eq!(ids(&filter_objects(&owned_set(), &filter)), vec!["o-2"]);
}

#[test]
fn text_query_is_case_insensitive_over_title_and_description() {
    let filter = ObjectFilter { category: None, query: "  CÁLCULO ".to_owned() };
    assert_eq!(ids(&filter_objects(&owned_set(), &filter)), vec!["o-1"]);

    let filter = ObjectFilter { category: None, query: "descrição de mesa".to_owned() };
    assert_eq!(ids(&filter_objects(&owned_set(), &filter)), vec!["o-4"]);
}

#[test]
fn category_and_query_must_both_match() {
    let filter = ObjectFilter { category: Some(ObjectCategory::Books), query: "fone".to_owned() };
    assert!(filter_objects(&owned_set(), &filter).is_empty());
}

#[test]
fn sort_newest_first_orders_by_created_at_desc() {
    let mut objects = owned_set();
    sort_newest_first(&mut objects);
    assert_eq!(ids(&objects), vec!["o-5", "o-4", "o-3", "o-2", "o-1"]);
}

#[test]
fn traded_filter_shows_exactly_the_traded_objects() {
    let filtered = filter_by_status(&owned_set(), StatusFilter::Traded);
    assert_eq!(ids(&filtered), vec!["o-2", "o-4"]);
}

#[test]
fn all_filter_shows_everything_and_unavailable_is_exact() {
    assert_eq!(filter_by_status(&owned_set(), StatusFilter::All).len(), 5);
    assert_eq!(ids(&filter_by_status(&owned_set(), StatusFilter::Unavailable)), vec!["o-3"]);
    assert_eq!(ids(&filter_by_status(&owned_set(), StatusFilter::Available)), vec!["o-1"]);
}

#[test]
fn status_filter_keys_round_trip_and_default_to_all() {
    for filter in StatusFilter::ALL {
        assert_eq!(StatusFilter::from_key(filter.key()), filter);
    }
    assert_eq!(StatusFilter::from_key("bogus"), StatusFilter::All);
}

#[test]
fn found_label_pluralizes() {
    assert_eq!(found_label(0), "0 objetos encontrados");
    assert_eq!(found_label(1), "1 objeto encontrado");
    assert_eq!(found_label(7), "7 objetos encontrados");
}

#[test]
fn empty_grid_message_depends_on_whether_anything_is_owned() {
    assert_eq!(empty_message(0).0, "Você ainda não tem objetos anunciados");
    assert_eq!(empty_message(3).0, "Nenhum objeto com este status");

    let objects = owned_set();
    let none_unavailable: Vec<Object> =
        objects.into_iter().filter(|o| o.status != ObjectStatus::Unavailable).collect();
    assert!(filter_by_status(&none_unavailable, StatusFilter::Unavailable).is_empty());
}

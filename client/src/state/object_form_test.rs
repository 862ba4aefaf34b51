use chrono::{TimeZone, Utc};

use super::*;

fn pending(n: usize) -> Vec<PendingImage> {
    (0..n)
        .map(|i| PendingImage { name: format!("f{i}.png"), preview_url: format!("blob:{i}") })
        .collect()
}

fn filled_form() -> ObjectForm {
    ObjectForm {
        title: "  Mesa de estudo ".to_owned(),
        description: "Madeira, pouco uso".to_owned(),
        category: Some(ObjectCategory::Furniture),
        condition: "Bom estado".to_owned(),
        ..ObjectForm::default()
    }
}

fn stored_object() -> Object {
    Object {
        id: "o-1".to_owned(),
        title: "Mesa".to_owned(),
        description: "Mesa de estudo".to_owned(),
        category: ObjectCategory::Furniture,
        condition: "Usado".to_owned(),
        status: ObjectStatus::InNegotiation,
        images: vec!["a.png".to_owned(), "b.png".to_owned()],
        owner_id: "u-1".to_owned(),
        owner: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: None,
    }
}

#[test]
fn from_object_prefills_every_field() {
    let form = ObjectForm::from_object(&stored_object());
    assert_eq!(form.category, Some(ObjectCategory::Furniture));
    assert_eq!(form.status, ObjectStatus::InNegotiation);
    assert_eq!(form.existing_images.len(), 2);
    assert_eq!(form.remaining_image_slots(), 3);
}

#[test]
fn batch_over_cap_is_rejected_whole() {
    let mut form = ObjectForm::from_object(&stored_object());
    form.add_images(pending(2)).unwrap();
    let err = form.add_images(pending(2)).unwrap_err();
    assert_eq!(err, FormError::ImageLimit { max: MAX_IMAGES });
    assert_eq!(err.title(), "Limite de imagens");
    assert_eq!(form.pending_images.len(), 2);
}

#[test]
fn six_images_fail_validation_before_submit() {
    let mut form = filled_form();
    form.existing_images = vec!["a".to_owned(); 3];
    form.pending_images = pending(3);
    assert_eq!(form.validate(), Err(FormError::ImageLimit { max: 5 }));
    assert!(form.to_draft(Vec::new()).is_err());
}

#[test]
fn required_fields_are_trimmed() {
    let mut form = filled_form();
    form.condition = "   ".to_owned();
    assert_eq!(form.validate(), Err(FormError::Required("Condição")));
    form.condition = "Novo".to_owned();
    form.category = None;
    assert_eq!(form.validate(), Err(FormError::Required("Categoria")));
}

#[test]
fn length_limits_count_characters() {
    let mut form = filled_form();
    form.title = "é".repeat(MAX_TITLE_CHARS);
    assert!(form.validate().is_ok());
    form.title.push('é');
    assert_eq!(form.validate(), Err(FormError::TooLong { field: "Título", max: 100 }));
}

#[test]
fn draft_merges_existing_then_uploaded() {
    let mut form = filled_form();
    form.existing_images = vec!["old.png".to_owned()];
    form.pending_images = pending(1);
    let draft = form.to_draft(vec!["new.png".to_owned()]).unwrap();
    assert_eq!(draft.title, "Mesa de estudo");
    assert_eq!(draft.images, vec!["old.png".to_owned(), "new.png".to_owned()]);
    assert_eq!(draft.status, ObjectStatus::Available);
}

#[test]
fn remove_images_by_index() {
    let mut form = ObjectForm::from_object(&stored_object());
    assert_eq!(form.remove_existing_image(0).as_deref(), Some("a.png"));
    assert_eq!(form.remove_existing_image(5), None);
    form.add_images(pending(1)).unwrap();
    assert_eq!(form.remove_pending_image(0).map(|p| p.name), Some("f0.png".to_owned()));
}

#[test]
fn only_owner_may_edit() {
    let object = stored_object();
    assert!(ensure_owner(&object, "u-1").is_ok());
    assert_eq!(ensure_owner(&object, "u-2"), Err(FormError::NotOwner));
    assert_eq!(FormError::NotOwner.title(), "Acesso negado");
}

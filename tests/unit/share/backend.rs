use super::*;

fn art() -> NewArtwork {
    NewArtwork {
        image_url: "data:image/png;base64,AAAA".to_owned(),
        settings: RenderParameters::default(),
        created_at: 1_700_000_000_000,
    }
}

#[test]
fn ids_start_at_one_and_increase() {
    let mut b = MemShareBackend::new();
    assert_eq!(b.create(art()).unwrap(), 1);
    assert_eq!(b.create(art()).unwrap(), 2);
    assert_eq!(b.len(), 2);
}

#[test]
fn get_list_delete() {
    let mut b = MemShareBackend::new();
    let id = b.create(art()).unwrap();
    let rec = b.get(id).unwrap().unwrap();
    assert_eq!(rec.id, id);
    assert_eq!(rec.created_at, 1_700_000_000_000);
    assert_eq!(b.list().unwrap().len(), 1);

    assert!(b.delete(id).unwrap());
    assert!(!b.delete(id).unwrap());
    assert!(b.get(id).unwrap().is_none());
    assert!(b.is_empty());
}

#[test]
fn deleted_ids_are_not_reused() {
    let mut b = MemShareBackend::new();
    let first = b.create(art()).unwrap();
    b.delete(first).unwrap();
    assert_eq!(b.create(art()).unwrap(), first + 1);
}

#[test]
fn empty_image_is_rejected() {
    let mut b = MemShareBackend::new();
    let err = b
        .create(NewArtwork {
            image_url: String::new(),
            ..art()
        })
        .unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
    assert!(b.is_empty());
}

#[test]
fn record_json_is_camel_case() {
    let mut b = MemShareBackend::new();
    let id = b.create(art()).unwrap();
    let s = serde_json::to_string(&b.get(id).unwrap().unwrap()).unwrap();
    assert!(s.contains("\"imageUrl\""));
    assert!(s.contains("\"createdAt\""));
}

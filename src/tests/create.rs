use crate::registry::Error;
use crate::tests::helper;

#[test]
fn test_create_prefixes_missing_scheme() {
    let (mut registry, _clock) = helper::registry();

    let link = registry.create("example.com", None).unwrap();

    assert_eq!("https://example.com", link.destination);
    assert_eq!("cat1", link.code);
    assert_eq!(0, link.clicks);
}

#[test]
fn test_create_keeps_existing_scheme() {
    let (mut registry, _clock) = helper::registry();

    let link = registry.create("http://example.com/a?b=c", None).unwrap();

    assert_eq!("http://example.com/a?b=c", link.destination);
}

#[test]
fn test_create_rejects_blank_input() {
    let (mut registry, _clock) = helper::registry();

    assert!(matches!(registry.create("", None), Err(Error::EmptyInput)));
    assert!(matches!(
        registry.create("   ", None),
        Err(Error::EmptyInput),
    ));

    // nothing was stored
    assert!(registry.list_active().is_empty());
}

#[test]
fn test_create_rejects_unparseable_input() {
    let (mut registry, _clock) = helper::registry();

    assert!(matches!(
        registry.create("not a url", None),
        Err(Error::InvalidUrl(_)),
    ));
    assert!(matches!(
        registry.create("http://", None),
        Err(Error::InvalidUrl(_)),
    ));

    assert!(registry.list_active().is_empty());
}

#[test]
fn test_create_assigns_ids_in_creation_order() {
    let (mut registry, _clock) = helper::registry();

    let first = registry.create("a.com", None).unwrap();
    let second = registry.create("b.com", None).unwrap();
    let third = registry.create("c.com", None).unwrap();

    assert!(first.id < second.id);
    assert!(second.id < third.id);
}

#[test]
fn test_create_lists_newest_first() {
    let (mut registry, _clock) = helper::registry();

    registry.create("a.com", Some("older")).unwrap();
    registry.create("b.com", Some("newer")).unwrap();

    let codes: Vec<String> = registry
        .list_active()
        .into_iter()
        .map(|link| link.code)
        .collect();

    assert_eq!(vec!["newer".to_string(), "older".to_string()], codes);
}

#[test]
fn test_create_sanitizes_custom_code() {
    let (mut registry, _clock) = helper::registry();

    let link = registry.create("example.com", Some(" My-Dog! ")).unwrap();

    assert_eq!("mydog", link.code);
}

#[test]
fn test_create_generates_when_custom_code_sanitizes_to_nothing() {
    let (mut registry, _clock) = helper::registry();

    let link = registry.create("example.com", Some("!?#")).unwrap();

    assert_eq!("cat1", link.code);
}

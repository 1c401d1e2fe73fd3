use super::*;

fn make_item(uid: &str, provider: Option<&str>) -> Item {
    Item {
        provider: provider.map(|p| p.to_string()),
        ..Item::new(uid, uid)
    }
}

#[test]
fn provider_is_normalized_with_synonyms() {
    let items = vec![make_item("a", Some("Widget Co, LLC"))];
    let filters = determine_available_filters(&FilterState::new(), &items, &[FilterField::Provider]);

    let entry = &filters["provider"]["Widget Co"];
    assert_eq!(entry.label, "Widget Co");
    assert_eq!(entry.value, "Widget Co");
    assert!(!entry.active);
    let synonyms = entry.synonyms.as_ref().unwrap();
    assert!(synonyms.contains(&"Widget Co, LLC".to_string()));
    assert!(synonyms.contains(&"Widget Co LLC".to_string()));
}

#[test]
fn base_state_is_not_mutated() {
    let mut base = FilterState::new();
    base.entry("provider".to_string()).or_default().insert(
        "Preset".to_string(),
        FilterDescriptor {
            label: "Preset".to_string(),
            synonyms: None,
            value: "Preset".to_string(),
            active: true,
        },
    );
    let snapshot = base.clone();

    let items = vec![make_item("a", Some("Acme, Inc."))];
    let filters = determine_available_filters(&base, &items, &[FilterField::Provider]);

    assert_eq!(base, snapshot);
    assert_eq!(filters["provider"].len(), 2);
    assert!(filters["provider"]["Preset"].active);
    assert!(filters["provider"].contains_key("Acme"));
}

#[test]
fn same_normalized_value_collapses() {
    let items = vec![
        make_item("a", Some("Acme, Inc.")),
        make_item("b", Some("Acme Inc")),
        make_item("c", Some("Acme")),
    ];
    let filters = determine_available_filters(&FilterState::new(), &items, &[FilterField::Provider]);
    assert_eq!(filters["provider"].len(), 1);
}

#[test]
fn missing_and_empty_providers_are_skipped() {
    let items = vec![make_item("a", None), make_item("b", Some(""))];
    let filters = determine_available_filters(&FilterState::new(), &items, &[FilterField::Provider]);
    assert!(!filters.contains_key("provider"));
}

#[test]
fn no_groups_returns_copy_of_base() {
    let items = vec![make_item("a", Some("Acme"))];
    let filters = determine_available_filters(&FilterState::new(), &items, &[]);
    assert!(filters.is_empty());
}

#[test]
fn descriptor_matches_value_and_synonyms() {
    let items = vec![make_item("a", Some("Acme, Inc."))];
    let filters = determine_available_filters(&FilterState::new(), &items, &[FilterField::Provider]);
    let entry = &filters["provider"]["Acme"];
    assert!(entry.matches("Acme"));
    assert!(entry.matches("Acme, Inc."));
    assert!(entry.matches("Acme LLC"));
    assert!(!entry.matches("Acme Labs"));
}

#[test]
fn filter_field_parse() {
    assert_eq!("provider".parse::<FilterField>().unwrap(), FilterField::Provider);
    assert!(matches!(
        "vendor".parse::<FilterField>(),
        Err(HubError::UnknownFilterField(name)) if name == "vendor"
    ));
    assert_eq!(FilterField::Provider.to_string(), "provider");
}

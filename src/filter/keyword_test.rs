use super::*;

fn make_item(name: &str, description: Option<&str>, tags: Option<&[&str]>) -> Item {
    Item {
        description: description.map(|d| d.to_string()),
        tags: tags.map(|t| t.iter().map(|s| s.to_string()).collect()),
        ..Item::new(name, name)
    }
}

#[test]
fn empty_filter_always_matches() {
    assert!(keyword_compare("", Some(&make_item("anything", None, None))));
    assert!(keyword_compare("", None));
}

#[test]
fn missing_item_never_matches() {
    assert!(!keyword_compare("x", None));
}

#[test]
fn name_substring_case_insensitive() {
    let item = make_item("MongoDB Enterprise", None, None);
    assert!(keyword_compare("mongo", Some(&item)));
    assert!(keyword_compare("db ent", Some(&item)));
    assert!(!keyword_compare("postgres", Some(&item)));
}

#[test]
fn description_substring_case_insensitive() {
    let item = make_item("widget", Some("The BetaWidget operator"), None);
    assert!(keyword_compare("beta", Some(&item)));
}

#[test]
fn tags_require_exact_element() {
    let item = make_item("widget", None, Some(&["beta"]));
    assert!(keyword_compare("beta", Some(&item)));
    assert!(!keyword_compare("bet", Some(&item)));
}

#[test]
fn tags_are_not_lowercased() {
    let item = make_item("widget", None, Some(&["Beta"]));
    assert!(!keyword_compare("beta", Some(&item)));
}

#[test]
fn no_optional_fields_falls_back_to_name() {
    let item = make_item("etcd", None, None);
    assert!(!keyword_compare("storage", Some(&item)));
}

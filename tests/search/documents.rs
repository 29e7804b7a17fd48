//! Title search over host documents that are not JSON.

use fuzzex::{search_titles, DocumentSearchOptions, FieldValue, TitledItem};

struct Note {
    title: &'static str,
    tags: Vec<&'static str>,
    body: &'static str,
}

impl TitledItem for Note {
    fn title(&self) -> &str {
        self.title
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "tags" => Some(FieldValue::List(
                self.tags.iter().map(|t| FieldValue::Text(t.to_string())).collect(),
            )),
            "text" => Some(FieldValue::Text(self.body.to_string())),
            _ => None,
        }
    }
}

fn notes() -> Vec<Note> {
    vec![
        Note {
            title: "Borrow Checker Tips",
            tags: vec!["programming"],
            body: "lifetimes",
        },
        Note {
            title: "Sourdough",
            tags: vec!["baking"],
            body: "flour water salt",
        },
        Note {
            title: "Checker Openings",
            tags: vec!["games"],
            body: "draughts",
        },
    ]
}

#[test]
fn test_keyword_pass_in_source_order() {
    let titles = search_titles("checker", &notes(), &DocumentSearchOptions::default()).unwrap();
    assert_eq!(titles, vec!["Borrow Checker Tips", "Checker Openings"]);
}

#[test]
fn test_fuzzy_fallback_reaches_tags() {
    let titles = search_titles("progrmming", &notes(), &DocumentSearchOptions::default()).unwrap();
    assert_eq!(titles, vec!["Borrow Checker Tips"]);
}

#[test]
fn test_configured_fields_limit_the_fallback() {
    let options = DocumentSearchOptions {
        fields: vec!["title".into()],
        ..DocumentSearchOptions::default()
    };
    assert!(search_titles("progrmming", &notes(), &options).unwrap().is_empty());
}

#[test]
fn test_exclusion_applies_to_fuzzy_results_only() {
    let options = DocumentSearchOptions {
        exclude: vec!["Borrow".into()],
        ..DocumentSearchOptions::default()
    };
    assert!(search_titles("progrmming", &notes(), &options).unwrap().is_empty());

    let keyword = search_titles("borrow", &notes(), &options).unwrap();
    assert_eq!(keyword, vec!["Borrow Checker Tips"]);
}

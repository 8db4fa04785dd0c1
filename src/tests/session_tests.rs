//! Tests for the session suggester fed from entry pages.

use super::test_utils::entry_page_json;
use crate::config::SuggestionConfig;
use crate::ledger::{DescriptionSuggester, DropdownKey, EntryPage, KeyOutcome, SuggestionDropdown};

fn page(descriptions: &[&str]) -> EntryPage {
    EntryPage::from_json(&entry_page_json(descriptions)).unwrap()
}

#[test]
fn test_ingest_records_every_description() {
    let mut suggester = DescriptionSuggester::new(&SuggestionConfig::default());

    let recorded = suggester.ingest(&page(&["Groceries", "Gas", "groceries", "Rent"]));

    assert_eq!(recorded, 4);
    assert_eq!(suggester.index().len(), 3);
    assert_eq!(
        suggester.suggestions("g"),
        vec!["groceries".to_string(), "Gas".to_string()]
    );
}

#[test]
fn test_pages_accumulate_across_fetches() {
    let mut suggester = DescriptionSuggester::new(&SuggestionConfig::default());

    suggester.ingest(&page(&["Rent"]));
    suggester.ingest(&page(&["Restaurant", "Rent"]));

    assert_eq!(
        suggester.suggestions("re"),
        vec!["Rent".to_string(), "Restaurant".to_string()]
    );
}

#[test]
fn test_configured_limit_applies() {
    let mut suggester = DescriptionSuggester::new(&SuggestionConfig { limit: 2 });
    suggester.ingest(&page(&["bus", "bakery", "books", "bank"]));

    assert_eq!(
        suggester.suggestions("b"),
        vec!["bus".to_string(), "bakery".to_string()]
    );
}

#[test]
fn test_newly_saved_entry_is_suggested() {
    let mut suggester = DescriptionSuggester::default();
    suggester.ingest(&page(&[]));
    assert!(suggester.suggestions("").is_empty());

    suggester.record("Dentist");
    assert_eq!(suggester.suggestions("den"), vec!["Dentist".to_string()]);
}

#[test]
fn test_typing_flow_through_dropdown() {
    let mut suggester = DescriptionSuggester::default();
    suggester.ingest(&page(&["Phone bill", "Pharmacy", "Parking"]));
    let mut dropdown = SuggestionDropdown::new();

    // (key pressed, field text once the key is released)
    let presses = [
        (DropdownKey::Other, "p"),
        (DropdownKey::Other, "ph"),
        (DropdownKey::Down, "ph"),
        (DropdownKey::Down, "ph"),
    ];
    for (key, text) in presses {
        dropdown.handle_key(key);
        if key.refreshes() {
            dropdown.refresh(&suggester, text);
        }
    }

    // Arrow key-ups left the list and highlight alone
    assert_eq!(
        dropdown.suggestions(),
        ["Phone bill".to_string(), "Pharmacy".to_string()]
    );
    assert_eq!(dropdown.highlighted(), Some(1));

    // Typing again recomputes the list and clears the highlight
    let key = DropdownKey::Other;
    dropdown.handle_key(key);
    if key.refreshes() {
        dropdown.refresh(&suggester, "pha");
    }
    assert_eq!(dropdown.suggestions(), ["Pharmacy".to_string()]);
    assert_eq!(dropdown.highlighted(), None);

    dropdown.handle_key(DropdownKey::Down);
    assert_eq!(
        dropdown.handle_key(DropdownKey::Enter),
        KeyOutcome::Accepted(Some("Pharmacy".to_string()))
    );
}

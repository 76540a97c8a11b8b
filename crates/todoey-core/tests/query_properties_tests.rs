//! Property tests for folding, filtering and toggling

use proptest::prelude::*;
use todoey_core::query::{contains_folded, fold_text};
use todoey_core::{CategoryId, Item, ItemDraft, ItemQuery};

fn item(parent: &str, title: &str) -> Item {
    ItemDraft::new(CategoryId::from(parent), title)
        .into_item()
        .unwrap()
}

proptest! {
    #[test]
    fn fold_is_idempotent(s in "[a-zA-Z\u{c0}-\u{ff} ]{0,24}") {
        let once = fold_text(&s);
        prop_assert_eq!(fold_text(&once), once);
    }

    #[test]
    fn every_title_contains_its_own_substrings(title in "[a-zA-Zéèü ]{1,20}", start in 0usize..20, len in 1usize..8) {
        let chars: Vec<char> = title.chars().collect();
        let start = start.min(chars.len() - 1);
        let end = (start + len).min(chars.len());
        let needle: String = chars[start..end].iter().collect();
        prop_assert!(contains_folded(&title, &needle));
        prop_assert!(contains_folded(&title.to_uppercase(), &needle));
    }

    #[test]
    fn filter_never_leaks_across_categories(
        titles in prop::collection::vec(("[ab]", "[a-z ]{0,10}"), 0..30),
        needle in "[a-z]{0,3}",
    ) {
        let items: Vec<Item> = titles.iter().map(|(p, t)| item(p, t)).collect();
        let query = ItemQuery::for_category(CategoryId::from("a")).with_title_filter(needle.clone());

        for hit in query.apply(&items) {
            prop_assert_eq!(hit.parent_category_id.as_str(), "a");
            prop_assert!(contains_folded(&hit.title, &needle));
        }
    }

    #[test]
    fn toggle_twice_restores_done(title in "[a-z]{0,10}", toggles in 0usize..6) {
        let original = item("a", &title);
        let mut current = original.clone();
        for _ in 0..toggles {
            current = current.toggled();
        }
        prop_assert_eq!(current.done, toggles % 2 == 1);
        prop_assert_eq!(current.toggled().toggled().done, current.done);
    }
}

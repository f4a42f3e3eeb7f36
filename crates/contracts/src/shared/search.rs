//! Client-side search over loaded lists.
//!
//! Case-insensitive substring match against one display field. Cheap enough
//! to rerun on every keystroke; nothing is persisted.

pub trait Searchable {
    /// Field the search box matches against.
    fn search_text(&self) -> &str;
}

pub fn matches_search(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_search(item.search_text(), query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Named(&'static str);

    impl Searchable for Named {
        fn search_text(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn empty_query_keeps_everything() {
        let items = vec![Named("Rice"), Named("Sugar")];
        assert_eq!(filter_items(&items, ""), items);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let items = vec![Named("Basmati Rice"), Named("Sugar"), Named("RICE flour")];
        assert_eq!(
            filter_items(&items, "rice"),
            vec![Named("Basmati Rice"), Named("RICE flour")]
        );
        assert!(filter_items(&items, "salt").is_empty());
    }
}

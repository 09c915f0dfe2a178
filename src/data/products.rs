use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry of the product lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub code: u32,
    pub title: String,
}

/// Maps product codes to human-readable titles.
///
/// A selector UI shows titles and hands the matching code back to the
/// session, so the catalog supports lookup in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    titles: BTreeMap<u32, String>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = ProductEntry>) -> Self {
        let mut titles = BTreeMap::new();
        for entry in entries {
            titles.insert(entry.code, entry.title);
        }
        Self { titles }
    }

    pub fn insert(&mut self, code: u32, title: impl Into<String>) {
        self.titles.insert(code, title.into());
    }

    /// Title for a product code, if the code is known.
    pub fn title_of(&self, code: u32) -> Option<&str> {
        self.titles.get(&code).map(String::as_str)
    }

    /// Code for an exact human-readable title, if any product carries it.
    pub fn code_for_title(&self, title: &str) -> Option<u32> {
        self.titles
            .iter()
            .find(|(_, t)| t.as_str() == title)
            .map(|(code, _)| *code)
    }

    /// All products in ascending code order, for selector controls.
    pub fn entries(&self) -> impl Iterator<Item = (u32, &str)> {
        self.titles.iter().map(|(code, title)| (*code, title.as_str()))
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ProductCatalog, ProductEntry};

    fn catalog() -> ProductCatalog {
        ProductCatalog::from_entries(vec![
            ProductEntry {
                code: 1842,
                title: "stairs or steps".to_string(),
            },
            ProductEntry {
                code: 649,
                title: "toilets".to_string(),
            },
        ])
    }

    #[test]
    fn lookup_both_directions() {
        let catalog = catalog();
        assert_eq!(catalog.title_of(649), Some("toilets"));
        assert_eq!(catalog.code_for_title("stairs or steps"), Some(1842));
        assert_eq!(catalog.title_of(9999), None);
        assert_eq!(catalog.code_for_title("ladders"), None);
    }

    #[test]
    fn entries_are_code_ordered() {
        let codes: Vec<u32> = catalog().entries().map(|(code, _)| code).collect();
        assert_eq!(codes, vec![649, 1842]);
    }
}

//! Category index derived from the catalog.
//!
//! Grouping is recomputed on demand and never stored: the same catalog always
//! yields the same index. Section labels appear in first-occurrence order and
//! entries keep catalog order within their section, so the navigation renders
//! deterministically.

use super::entry::Entry;
use super::Catalog;

/// One category section: a label plus the entries carrying it.
#[derive(Debug)]
pub struct CategorySection<'a> {
    pub label: &'a str,
    pub entries: Vec<&'a Entry>,
}

/// Ordered grouping of catalog entries by category label.
#[derive(Debug)]
pub struct CategoryIndex<'a> {
    sections: Vec<CategorySection<'a>>,
}

impl<'a> CategoryIndex<'a> {
    /// Group the catalog by category. Pure function of the catalog contents.
    pub fn build(catalog: &'a Catalog) -> Self {
        let mut sections: Vec<CategorySection<'a>> = Vec::new();
        for entry in catalog.all() {
            match sections.iter_mut().find(|s| s.label == entry.category) {
                Some(section) => section.entries.push(entry),
                None => sections.push(CategorySection {
                    label: &entry.category,
                    entries: vec![entry],
                }),
            }
        }
        Self { sections }
    }

    pub fn sections(&self) -> &[CategorySection<'a>] {
        &self.sections
    }

    /// Section labels in first-occurrence order.
    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.sections.iter().map(|s| s.label)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Entry ids in sidebar order: grouped by section, catalog order within.
    pub fn entry_ids(&self) -> Vec<&'a str> {
        self.sections
            .iter()
            .flat_map(|s| s.entries.iter().map(|e| e.id.as_str()))
            .collect()
    }
}

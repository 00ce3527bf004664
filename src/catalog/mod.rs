//! Langdev catalog - the static install-guide data and its derived views.
//!
//! The catalog is an immutable, ordered list of [`Entry`] records defined at
//! process start. Lookup is by id, the "popular" subset is simply the first N
//! entries in catalog order, and [`CategoryIndex`] provides the grouped view
//! the sidebar navigation renders from.

mod data;
mod entry;
mod index;

pub use data::bootstrap_snippet;
pub use entry::{Entry, InstallCommand, Os};
pub use index::{CategoryIndex, CategorySection};

/// Immutable, ordered collection of catalog entries.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Build a catalog from an entry list. Ids must be unique.
    pub fn new(entries: Vec<Entry>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "catalog entry ids must be unique"
        );
        Self { entries }
    }

    /// The built-in catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(data::builtin())
    }

    /// Every entry, in canonical insertion order.
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// Lookup by id.
    pub fn by_id(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The first `n` entries in catalog order (the "popular" subset).
    pub fn featured(&self, n: usize) -> &[Entry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests;

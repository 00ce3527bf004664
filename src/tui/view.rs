//! View composition.
//!
//! [`compose`] is a pure projection of catalog plus session state into the
//! model the screens render from. It keeps no memory of its own: it is called
//! after every accepted transition and recomputes everything it needs.

use crate::catalog::{Catalog, CategoryIndex, Entry, Os};

use super::state::{SessionState, View};

/// What the main pane should render.
#[derive(Debug)]
pub enum RenderModel<'a> {
    Overview {
        /// First six entries in catalog order.
        featured: &'a [Entry],
        index: CategoryIndex<'a>,
    },
    Detail {
        entry: &'a Entry,
        selected_os: Os,
        install_text: &'a str,
        verify_text: &'a str,
        copy_feedback_active: bool,
    },
}

/// Number of entries shown in the overview's popular section.
pub const FEATURED_COUNT: usize = 6;

/// Project the session onto a render model.
///
/// Never yields a model referencing a missing entry: a detail view whose id
/// has no catalog entry (which the state machine already prevents) falls over
/// to the overview instead of crashing.
pub fn compose<'a>(catalog: &'a Catalog, state: &SessionState) -> RenderModel<'a> {
    if let View::Detail { entry_id } = &state.view {
        if let Some(entry) = catalog.by_id(entry_id) {
            return RenderModel::Detail {
                entry,
                selected_os: state.selected_os,
                install_text: entry.install_command.for_os(state.selected_os),
                verify_text: &entry.verify_command,
                copy_feedback_active: state.copy_feedback_active(),
            };
        }
        tracing::warn!(
            entry_id = entry_id.as_str(),
            "detail view references a missing entry, falling back to overview"
        );
    }
    RenderModel::Overview {
        featured: catalog.featured(FEATURED_COUNT),
        index: CategoryIndex::build(catalog),
    }
}

use langdev::catalog::{Catalog, Os};
use langdev::tui::state::{SessionState, View};
use langdev::tui::view::{compose, RenderModel, FEATURED_COUNT};
use pretty_assertions::assert_eq;

#[test]
fn overview_model_has_featured_and_categories() {
    let catalog = Catalog::builtin();
    let state = SessionState::default();

    match compose(&catalog, &state) {
        RenderModel::Overview { featured, index } => {
            let ids: Vec<&str> = featured.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(
                ids,
                vec!["javascript", "python", "rust", "go", "java", "docker"]
            );
            assert_eq!(featured.len(), FEATURED_COUNT);

            let labels: Vec<&str> = index.labels().collect();
            assert_eq!(labels, vec!["Runtime", "Language", "Tool"]);
        }
        RenderModel::Detail { .. } => panic!("expected the overview model"),
    }
}

#[test]
fn detail_model_follows_the_selected_os() {
    let catalog = Catalog::builtin();
    let mut state = SessionState::default();

    // Overview/mac → select rust → install text is the mac command.
    assert!(state.select_entry("rust", &catalog));
    match compose(&catalog, &state) {
        RenderModel::Detail {
            entry,
            selected_os,
            install_text,
            verify_text,
            ..
        } => {
            assert_eq!(entry.id, "rust");
            assert_eq!(selected_os, Os::Mac);
            assert_eq!(install_text, entry.install_command.mac);
            assert_eq!(verify_text, entry.verify_command);
        }
        RenderModel::Overview { .. } => panic!("expected the detail model"),
    }

    // Switching OS updates the install text and keeps the view.
    state.select_os(Os::Windows);
    match compose(&catalog, &state) {
        RenderModel::Detail {
            entry,
            selected_os,
            install_text,
            ..
        } => {
            assert_eq!(entry.id, "rust");
            assert_eq!(selected_os, Os::Windows);
            assert_eq!(install_text, entry.install_command.windows);
        }
        RenderModel::Overview { .. } => panic!("expected the detail model"),
    }
    assert_eq!(
        state.view,
        View::Detail {
            entry_id: "rust".to_string()
        }
    );
}

#[test]
fn repeated_selection_yields_the_same_model() {
    let catalog = Catalog::builtin();
    let mut state = SessionState::default();

    state.select_entry("go", &catalog);
    let once = format!("{:?}", compose(&catalog, &state));
    state.select_entry("go", &catalog);
    let twice = format!("{:?}", compose(&catalog, &state));
    assert_eq!(once, twice);
}

#[test]
fn dangling_detail_id_falls_back_to_overview() {
    let catalog = Catalog::builtin();
    // Forged state: the state machine never produces this, but the composer
    // must still not reference a missing entry.
    let mut state = SessionState::default();
    state.view = View::Detail {
        entry_id: "vanished".to_string(),
    };

    match compose(&catalog, &state) {
        RenderModel::Overview { featured, .. } => {
            assert_eq!(featured.len(), FEATURED_COUNT);
        }
        RenderModel::Detail { .. } => panic!("composer must fail over to the overview"),
    }
}

#[test]
fn detail_model_carries_copy_feedback() {
    let catalog = Catalog::builtin();
    let mut state = SessionState::default();
    state.select_entry("docker", &catalog);

    let token = state.begin_copy_feedback();
    match compose(&catalog, &state) {
        RenderModel::Detail {
            copy_feedback_active,
            ..
        } => assert!(copy_feedback_active),
        RenderModel::Overview { .. } => panic!("expected the detail model"),
    }

    state.expire_copy_feedback(token);
    match compose(&catalog, &state) {
        RenderModel::Detail {
            copy_feedback_active,
            ..
        } => assert!(!copy_feedback_active),
        RenderModel::Overview { .. } => panic!("expected the detail model"),
    }
}

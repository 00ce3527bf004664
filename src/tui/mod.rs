//! Terminal User Interface module for the interactive catalog browser

pub mod app;
pub mod clipboard;
pub mod events;
pub mod screens;
pub mod state;
pub mod theme;
pub mod view;

use crate::catalog::Os;
use crate::Result;

/// Run the interactive browser, starting on `initial_os`.
pub async fn run(initial_os: Os) -> Result<()> {
    let app = app::App::new(initial_os);
    app.run().await
}

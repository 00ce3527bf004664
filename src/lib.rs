pub mod catalog;
pub mod cli;
pub mod error;
pub mod tui;

pub use error::{LangdevError, Result};

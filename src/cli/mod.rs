//! Interactive command-line front end.
//!
//! Collects the same inputs as the HTTP API from a console and prints the
//! result as labeled text.

mod prompt;
mod render;

pub use prompt::Prompt;
pub use render::{DISPLAY_DECIMALS, render_charge};

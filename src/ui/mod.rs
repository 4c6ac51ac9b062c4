//! Front ends: a ratatui game view and a line-based console, both thin
//! callers of [`crate::game::GameSession`].

mod app;
pub mod console;
mod game_view;
pub mod text;

pub use app::App;
pub use console::Console;

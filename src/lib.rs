//! # Connect N
//!
//! A two-player Connect Four variant where the winning run length is chosen at
//! start-up and the grid is sized to match (twice the run length per side).
//! The game core is a pure state-transition API; the terminal front ends only
//! feed it column choices and render what it reports.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, pieces and players, session state machine
//! - [`ui`]: Ratatui game view and a plain line-based console
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

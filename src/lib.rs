//! # Connect Four
//!
//! Two-player Connect Four on the classic 7-column, 6-row board, with a
//! terminal UI built on Ratatui and a plain line-based text mode.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, session state machine
//! - [`ui`] — Terminal UI and plain text prompt loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;

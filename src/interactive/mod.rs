//! Interactive TUI mode
//!
//! Full-screen card play with ratatui and crossterm.

pub mod app;
pub mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};

//! Command implementations

pub mod settings;
pub mod simple;
pub mod summary;

pub use settings::{SettingsReport, apply_settings, parse_switch};
pub use simple::{SimpleCommand, parse_command, run_simple, run_simple_with};
pub use summary::{CorpusSummary, summarize};

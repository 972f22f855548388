//! argdialog: generate a GTK settings dialog from a command-line argument description
//!
//! This library provides:
//! - GTK editors chosen from each argument's declared type
//! - A section list dialog that collects values into a nested JSON map
//! - A runner that shows the dialog as a standalone application
//! - Persistence of the last accepted values

pub mod app;
pub mod config;
pub mod ui;

// Re-export commonly used types
pub use app::{run_dialog, run_for_command};
pub use argdialog_types as types;
pub use argdialog_types::{ArgumentDescriptor, ArgumentSet, OrphanConfig, ValueKind, ValueMap};
pub use config::{AppContext, SettingsStore};

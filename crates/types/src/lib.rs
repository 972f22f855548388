//! argdialog-types: toolkit-neutral building blocks for argdialog.
//!
//! This crate holds argument descriptors, grouping, the descriptor to editor
//! dispatch and the panel/section models that turn editors into value maps.
//! None of it depends on GTK, so the same models back the GTK dialog and the
//! unit tests.

pub mod clap_import;
pub mod color;
pub mod descriptor;
pub mod editor;
pub mod error;
pub mod grouping;
pub mod panel;
pub mod section_list;
pub mod values;

#[cfg(test)]
mod test_support;

// Re-export commonly used types at the crate root for convenience
pub use clap_import::from_command;
pub use color::{parse_rgb, parse_rgba, Rgb, Rgba};
pub use descriptor::{ArgumentDescriptor, ArgumentSet, Section, SectionHeader, ValueKind};
pub use editor::{
    editor_kind, initial_value, notify_change, typed_text, value_to_text, EditorFactory, EditorKind,
    OnChangeCallback, ValueEditor,
};
pub use error::ArgError;
pub use grouping::{group_arguments, organize, OrphanConfig};
pub use panel::{GroupPanel, PanelEntry};
pub use section_list::SectionList;
pub use values::{section_values, to_command_line, ValueMap};

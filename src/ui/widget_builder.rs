//! Widget builder helpers for consistent UI construction
//!
//! Small helpers for the GTK4 patterns repeated across the dialog widgets.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Label, Orientation};

/// Default margin used for page containers
pub const DEFAULT_MARGIN: i32 = 12;

/// Default spacing used for vertical containers
pub const DEFAULT_SPACING: i32 = 12;

/// Horizontal gap between argument names and their editors
pub const FORM_COLUMN_SPACING: u32 = 32;

/// Width of the section list sidebar
pub const SIDEBAR_WIDTH: i32 = 140;

/// Creates a vertical box configured as a page container with standard margins.
pub fn create_page_container() -> GtkBox {
    create_padded_box(Orientation::Vertical, DEFAULT_SPACING)
}

/// Creates a box with standard margins.
pub fn create_padded_box(orientation: Orientation, spacing: i32) -> GtkBox {
    let container = GtkBox::new(orientation, spacing);
    container.set_margin_start(DEFAULT_MARGIN);
    container.set_margin_end(DEFAULT_MARGIN);
    container.set_margin_top(DEFAULT_MARGIN);
    container.set_margin_bottom(DEFAULT_MARGIN);
    container
}

/// Creates a section header label with bold styling.
pub fn create_section_header(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.set_halign(gtk4::Align::Start);
    label.add_css_class("heading");
    label
}

/// Creates the right-aligned Cancel/OK button row.
///
/// Returns (row_box, cancel_button, ok_button).
pub fn create_dialog_buttons() -> (GtkBox, Button, Button) {
    let button_box = GtkBox::new(Orientation::Horizontal, 6);
    button_box.set_halign(gtk4::Align::End);
    button_box.set_margin_top(DEFAULT_SPACING);

    let cancel_button = Button::with_label("Cancel");
    let ok_button = Button::with_label("OK");
    ok_button.add_css_class("suggested-action");

    button_box.append(&cancel_button);
    button_box.append(&ok_button);

    (button_box, cancel_button, ok_button)
}

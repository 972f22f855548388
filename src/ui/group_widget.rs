//! Form showing one section's arguments

use argdialog_types::GroupPanel;
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Grid, Label, Orientation, ScrolledWindow};

use super::arg_widgets::GtkEditor;
use super::widget_builder::{create_page_container, create_section_header, FORM_COLUMN_SPACING};

/// Lays out a [`GroupPanel`]: heading, optional description and a
/// two-column grid of argument names and editors.
pub struct ArgGroupWidget {
    container: ScrolledWindow,
}

impl ArgGroupWidget {
    pub fn new(panel: &GroupPanel<GtkEditor>) -> Self {
        let page = create_page_container();

        let heading = create_section_header(panel.name());
        heading.add_css_class("title-2");
        page.append(&heading);

        if let Some(description) = panel.description() {
            let description_label = Label::new(Some(description));
            description_label.set_halign(gtk4::Align::Start);
            description_label.set_wrap(true);
            description_label.add_css_class("dim-label");
            page.append(&description_label);
        }

        let form = Grid::new();
        form.set_column_spacing(FORM_COLUMN_SPACING);
        form.set_row_spacing(6);

        for (row, entry) in panel.entries().iter().enumerate() {
            let label = Label::new(Some(entry.descriptor.key()));
            label.set_halign(gtk4::Align::Start);

            let widget = entry.editor.widget();
            widget.set_hexpand(true);
            if let Some(help) = entry.descriptor.help.as_deref() {
                label.set_tooltip_text(Some(help));
                widget.set_tooltip_text(Some(help));
            }

            form.attach(&label, 0, row as i32, 1, 1);
            form.attach(&widget, 1, row as i32, 1, 1);
        }

        page.append(&form);

        let container = ScrolledWindow::new();
        container.set_policy(gtk4::PolicyType::Never, gtk4::PolicyType::Automatic);
        container.set_vexpand(true);
        container.set_child(Some(&page));

        Self { container }
    }

    /// Get the container widget (for adding to layouts).
    pub fn widget(&self) -> &ScrolledWindow {
        &self.container
    }
}

/// Placeholder shown when an argument set has no arguments at all
pub fn empty_placeholder() -> GtkBox {
    let page = GtkBox::new(Orientation::Vertical, 0);
    let label = Label::new(Some("No settings available"));
    label.add_css_class("dim-label");
    label.set_vexpand(true);
    page.append(&label);
    page
}

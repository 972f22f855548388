//! Section list on the left, the selected section's form on the right

use argdialog_types::{Section, SectionList, ValueMap};
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, ListBox, ListBoxRow, Orientation, ScrolledWindow, Stack};
use std::rc::Rc;

use super::arg_widgets::{GtkEditor, GtkEditorFactory};
use super::group_widget::{empty_placeholder, ArgGroupWidget};
use super::widget_builder::SIDEBAR_WIDTH;

/// Lists the sections in a sidebar and shows the selected one's form.
///
/// The sidebar is hidden when there is only one section. Can be embedded in
/// any container; [`super::ArgDialog`] wraps it with OK/Cancel buttons.
pub struct ArgListWidget {
    container: GtkBox,
    sections: Rc<SectionList<GtkEditor>>,
}

impl ArgListWidget {
    pub fn new(sections: &[Section], orphan_name: &str) -> Self {
        let container = GtkBox::new(Orientation::Horizontal, 0);
        let model = Rc::new(SectionList::build(sections, &GtkEditorFactory, orphan_name));

        let list_box = ListBox::new();
        list_box.set_selection_mode(gtk4::SelectionMode::Single);
        list_box.add_css_class("navigation-sidebar");

        let stack = Stack::new();
        stack.set_hexpand(true);
        stack.set_vexpand(true);
        stack.set_transition_type(gtk4::StackTransitionType::Crossfade);

        for (index, panel) in model.panels().iter().enumerate() {
            list_box.append(&create_section_row(panel.name()));
            let group_widget = ArgGroupWidget::new(panel);
            stack.add_named(group_widget.widget(), Some(page_name(index).as_str()));
        }

        if model.panels().is_empty() {
            stack.add_named(&empty_placeholder(), Some("empty"));
        }

        let sidebar_scroll = ScrolledWindow::new();
        sidebar_scroll.set_policy(gtk4::PolicyType::Never, gtk4::PolicyType::Automatic);
        sidebar_scroll.set_width_request(SIDEBAR_WIDTH);
        sidebar_scroll.set_child(Some(&list_box));
        sidebar_scroll.set_visible(model.shows_sidebar());

        container.append(&sidebar_scroll);
        container.append(&stack);

        if let Some(first_row) = list_box.row_at_index(0) {
            list_box.select_row(Some(&first_row));
        }

        let model_for_select = model.clone();
        let stack_for_select = stack.clone();
        list_box.connect_row_selected(move |_, row| {
            let Some(row) = row else {
                return;
            };
            let index = row.index();
            if index >= 0 && model_for_select.select(index as usize) {
                stack_for_select.set_visible_child_name(&page_name(index as usize));
                log::debug!("Showing section {}", index);
            }
        });

        Self {
            container,
            sections: model,
        }
    }

    /// Get the container widget (for adding to layouts).
    pub fn widget(&self) -> &GtkBox {
        &self.container
    }

    pub fn values(&self) -> ValueMap {
        self.sections.values()
    }

    pub fn set_values(&self, values: &ValueMap) {
        self.sections.set_values(values)
    }

    /// Set the callback invoked whenever any value is adjusted.
    pub fn set_on_change<F: Fn() + 'static>(&self, callback: F) {
        self.sections.set_on_change(callback);
    }
}

fn page_name(index: usize) -> String {
    format!("section-{}", index)
}

fn create_section_row(name: &str) -> ListBoxRow {
    let row = ListBoxRow::new();
    let label = Label::new(Some(name));
    label.set_halign(gtk4::Align::Start);
    label.set_margin_start(8);
    label.set_margin_end(8);
    label.set_margin_top(4);
    label.set_margin_bottom(4);
    row.set_child(Some(&label));
    row
}

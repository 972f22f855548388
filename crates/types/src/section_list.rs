//! Toolkit-neutral model of the dialog: every section panel plus selection.

use crate::descriptor::Section;
use crate::editor::{notify_change, EditorFactory, OnChangeCallback, ValueEditor};
use crate::panel::GroupPanel;
use crate::values::ValueMap;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// All section panels of a dialog and the currently shown one.
pub struct SectionList<E> {
    panels: Vec<GroupPanel<E>>,
    orphan_name: String,
    current: Cell<usize>,
    on_change: OnChangeCallback,
}

impl<E: ValueEditor> SectionList<E> {
    /// Build one panel per section; `orphan_name` is the section merged into the top level.
    pub fn build<F>(sections: &[Section], factory: &F, orphan_name: impl Into<String>) -> Self
    where
        F: EditorFactory<Editor = E>,
    {
        let on_change: OnChangeCallback = Rc::new(RefCell::new(None));
        let panels = sections
            .iter()
            .map(|section| {
                let mut panel = GroupPanel::new(&section.name, section.description.clone());
                panel.add_descriptors(factory, &section.arguments);
                let on_change = on_change.clone();
                panel.set_on_change(move || notify_change(&on_change));
                panel
            })
            .collect();

        Self {
            panels,
            orphan_name: orphan_name.into(),
            current: Cell::new(0),
            on_change,
        }
    }

    pub fn panels(&self) -> &[GroupPanel<E>] {
        &self.panels
    }

    pub fn orphan_name(&self) -> &str {
        &self.orphan_name
    }

    /// The section list is only worth showing with more than one section.
    pub fn shows_sidebar(&self) -> bool {
        self.panels.len() > 1
    }

    /// Index of the visible panel
    pub fn current(&self) -> usize {
        self.current.get()
    }

    /// Switch the visible panel. Returns false for an out-of-range index.
    pub fn select(&self, index: usize) -> bool {
        if index >= self.panels.len() {
            return false;
        }
        self.current.set(index);
        true
    }

    /// Aggregate all panels: orphan values at the top level, others nested by name.
    pub fn values(&self) -> ValueMap {
        let mut values = ValueMap::new();
        for panel in &self.panels {
            if panel.name() == self.orphan_name {
                values.extend(panel.values());
            } else {
                values.insert(panel.name().to_string(), Value::Object(panel.values()));
            }
        }
        values
    }

    /// Distribute values to the panels.
    ///
    /// A panel whose name is a key holding an object receives that object;
    /// every other panel receives the whole top-level map, so flat inputs work.
    pub fn set_values(&self, values: &ValueMap) {
        for panel in &self.panels {
            match values.get(panel.name()) {
                Some(Value::Object(section_values)) => panel.set_values(section_values),
                _ => panel.set_values(values),
            }
        }
    }

    /// Set the callback invoked when any editor in any section changes.
    pub fn set_on_change<F: Fn() + 'static>(&self, callback: F) {
        *self.on_change.borrow_mut() = Some(Box::new(callback));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{ArgumentDescriptor, ValueKind};
    use crate::test_support::{MockEditor, MockFactory};
    use serde_json::json;

    fn sections() -> Vec<Section> {
        let mut main = Section::new("Main", Some("Main settings".to_string()));
        let x = ValueKind::Integer {
            min: None,
            max: None,
        };
        main.arguments.push(ArgumentDescriptor::new("x", x).with_default(1));
        let mut strings = Section::new("Strings", None);
        strings
            .arguments
            .push(ArgumentDescriptor::new("freetext", ValueKind::Text).with_default("hi"));
        vec![main, strings]
    }

    fn list() -> SectionList<MockEditor> {
        SectionList::build(&sections(), &MockFactory, "Main")
    }

    #[test]
    fn test_aggregate_values() {
        assert_eq!(
            Value::Object(list().values()),
            json!({"x": 1, "Strings": {"freetext": "hi"}})
        );
    }

    #[test]
    fn test_flat_input_only_updates_matching_section() {
        let list = list();
        list.set_values(json!({"x": 5}).as_object().unwrap());
        assert_eq!(
            Value::Object(list.values()),
            json!({"x": 5, "Strings": {"freetext": "hi"}})
        );
    }

    #[test]
    fn test_nested_input() {
        let list = list();
        let input = json!({"x": 2, "Strings": {"freetext": "hello"}});
        list.set_values(input.as_object().unwrap());
        assert_eq!(Value::Object(list.values()), input);
    }

    #[test]
    fn test_non_object_section_key_falls_back_to_flat() {
        let list = list();
        list.set_values(json!({"Strings": "oops", "freetext": "flat"}).as_object().unwrap());
        assert_eq!(list.values()["Strings"], json!({"freetext": "flat"}));
    }

    #[test]
    fn test_selection() {
        let list = list();
        assert!(list.shows_sidebar());
        assert_eq!(list.current(), 0);
        assert!(list.select(1));
        assert_eq!(list.current(), 1);
        assert!(!list.select(2));
        assert_eq!(list.current(), 1);
    }

    #[test]
    fn test_single_section_hides_sidebar() {
        let list: SectionList<MockEditor> =
            SectionList::build(&sections()[..1], &MockFactory, "Main");
        assert!(!list.shows_sidebar());
    }

    #[test]
    fn test_change_notification_reaches_list() {
        let list = list();
        let changed = Rc::new(Cell::new(false));
        let changed_clone = changed.clone();
        list.set_on_change(move || changed_clone.set(true));

        list.panels()[1].entries()[0].editor.user_edit(json!("typed"));
        assert!(changed.get());
        assert_eq!(list.values()["Strings"]["freetext"], json!("typed"));
    }
}

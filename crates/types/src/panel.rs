//! Toolkit-neutral model of one section's editors.

use crate::descriptor::ArgumentDescriptor;
use crate::editor::{notify_change, EditorFactory, OnChangeCallback, ValueEditor};
use crate::values::ValueMap;
use std::cell::RefCell;
use std::rc::Rc;

/// A registered descriptor and the editor created for it
pub struct PanelEntry<E> {
    pub descriptor: ArgumentDescriptor,
    pub editor: E,
}

/// One section's editors, keyed by descriptor key.
pub struct GroupPanel<E> {
    name: String,
    description: Option<String>,
    entries: Vec<PanelEntry<E>>,
    on_change: OnChangeCallback,
}

impl<E: ValueEditor> GroupPanel<E> {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            entries: Vec::new(),
            on_change: Rc::new(RefCell::new(None)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn entries(&self) -> &[PanelEntry<E>] {
        &self.entries
    }

    /// Create and register one editor per descriptor.
    ///
    /// Each editor's change notification is forwarded to the panel's callback.
    pub fn add_descriptors<'a, F, I>(&mut self, factory: &F, descriptors: I)
    where
        F: EditorFactory<Editor = E>,
        I: IntoIterator<Item = &'a ArgumentDescriptor>,
    {
        for descriptor in descriptors {
            let editor = factory.make_editor(descriptor);
            let on_change = self.on_change.clone();
            editor.set_on_change(Box::new(move || notify_change(&on_change)));
            self.entries.push(PanelEntry {
                descriptor: descriptor.clone(),
                editor,
            });
        }
    }

    /// Current value of every registered editor.
    pub fn values(&self) -> ValueMap {
        self.entries
            .iter()
            .map(|entry| (entry.descriptor.key().to_string(), entry.editor.value()))
            .collect()
    }

    /// Push values into matching editors; unknown keys are ignored.
    pub fn set_values(&self, values: &ValueMap) {
        for (key, value) in values {
            match self.entries.iter().find(|e| e.descriptor.key() == key) {
                Some(entry) => entry.editor.set_value(value),
                None => log::trace!("Section '{}' has no argument '{}'", self.name, key),
            }
        }
    }

    /// Set the callback invoked when any editor in this panel changes.
    pub fn set_on_change<F: Fn() + 'static>(&self, callback: F) {
        *self.on_change.borrow_mut() = Some(Box::new(callback));
    }
}

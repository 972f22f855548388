//! In-memory editors for exercising the panel and list models.

use crate::descriptor::ArgumentDescriptor;
use crate::editor::{initial_value, EditorFactory, ValueEditor};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

pub struct MockEditor {
    value: RefCell<Value>,
    on_change: Rc<RefCell<Option<Box<dyn Fn()>>>>,
}

impl MockEditor {
    /// Simulate the user editing the value.
    pub fn user_edit(&self, value: Value) {
        *self.value.borrow_mut() = value;
        if let Some(cb) = self.on_change.borrow().as_ref() {
            cb();
        }
    }
}

impl ValueEditor for MockEditor {
    fn value(&self) -> Value {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &Value) {
        *self.value.borrow_mut() = value.clone();
    }

    fn set_on_change(&self, callback: Box<dyn Fn()>) {
        *self.on_change.borrow_mut() = Some(callback);
    }
}

pub struct MockFactory;

impl EditorFactory for MockFactory {
    type Editor = MockEditor;

    fn make_editor(&self, descriptor: &ArgumentDescriptor) -> MockEditor {
        MockEditor {
            value: RefCell::new(initial_value(descriptor)),
            on_change: Rc::new(RefCell::new(None)),
        }
    }
}

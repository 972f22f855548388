//! GTK editors for argument values.
//!
//! [`GtkEditorFactory`] turns the [`EditorKind`] chosen by
//! `argdialog_types::editor_kind` into one of the editors below. Every editor
//! reports its value as JSON and notifies its change callback on edits.

use argdialog_types::{
    editor_kind, initial_value, notify_change, typed_text, value_to_text, ArgumentDescriptor,
    EditorFactory, EditorKind, OnChangeCallback, Rgb, Rgba, ValueEditor, ValueKind,
};
use gtk4::prelude::*;
use gtk4::{
    Box as GtkBox, Button, CheckButton, DropDown, Entry, FileDialog, Orientation, SpinButton,
    StringList,
};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

use super::color_button_widget::ColorButtonWidget;

fn new_callback() -> OnChangeCallback {
    Rc::new(RefCell::new(None))
}

fn warn_unusable(editor: &str, value: &Value) {
    log::warn!("{} editor cannot show value {}, keeping current value", editor, value);
}

/// Check button for boolean flags
pub struct ToggleEditor {
    check: CheckButton,
    on_change: OnChangeCallback,
}

impl ToggleEditor {
    pub fn new(initial: &Value) -> Self {
        let check = CheckButton::new();
        check.set_active(initial.as_bool().unwrap_or(false));
        let on_change = new_callback();

        let on_change_clone = on_change.clone();
        check.connect_toggled(move |_| notify_change(&on_change_clone));

        Self { check, on_change }
    }
}

impl ValueEditor for ToggleEditor {
    fn value(&self) -> Value {
        Value::Bool(self.check.is_active())
    }

    fn set_value(&self, value: &Value) {
        match value.as_bool() {
            Some(active) => self.check.set_active(active),
            None => warn_unusable("Toggle", value),
        }
    }

    fn set_on_change(&self, callback: Box<dyn Fn()>) {
        *self.on_change.borrow_mut() = Some(callback);
    }
}

/// Dropdown for arguments with a fixed set of choices
pub struct ChoiceEditor {
    dropdown: DropDown,
    choices: Vec<String>,
    kind: ValueKind,
    on_change: OnChangeCallback,
}

impl ChoiceEditor {
    pub fn new(choices: Vec<String>, kind: ValueKind, initial: &Value) -> Self {
        let options: Vec<&str> = choices.iter().map(String::as_str).collect();
        let dropdown = DropDown::new(
            Some(StringList::new(&options)),
            Option::<gtk4::Expression>::None,
        );
        dropdown.set_selected(0);
        let on_change = new_callback();

        let editor = Self {
            dropdown,
            choices,
            kind,
            on_change,
        };
        if !initial.is_null() {
            editor.set_value(initial);
        }

        let on_change_clone = editor.on_change.clone();
        editor
            .dropdown
            .connect_selected_notify(move |_| notify_change(&on_change_clone));

        editor
    }
}

impl ValueEditor for ChoiceEditor {
    fn value(&self) -> Value {
        match self.choices.get(self.dropdown.selected() as usize) {
            Some(choice) => typed_text(&self.kind, choice),
            None => Value::Null,
        }
    }

    fn set_value(&self, value: &Value) {
        let text = value_to_text(value);
        match self.choices.iter().position(|c| *c == text) {
            Some(index) => self.dropdown.set_selected(index as u32),
            None => warn_unusable("Choice", value),
        }
    }

    fn set_on_change(&self, callback: Box<dyn Fn()>) {
        *self.on_change.borrow_mut() = Some(callback);
    }
}

/// Spin button for integers, counts and floats
pub struct SpinEditor {
    spin: SpinButton,
    integer: bool,
    on_change: OnChangeCallback,
}

impl SpinEditor {
    pub fn new(min: f64, max: f64, step: f64, digits: u32, initial: &Value) -> Self {
        let spin = SpinButton::with_range(min, max, step);
        spin.set_digits(digits);
        spin.set_value(0.0_f64.clamp(min, max));
        let on_change = new_callback();

        let editor = Self {
            spin,
            integer: digits == 0,
            on_change,
        };
        if !initial.is_null() {
            editor.set_value(initial);
        }

        let on_change_clone = editor.on_change.clone();
        editor
            .spin
            .connect_value_changed(move |_| notify_change(&on_change_clone));

        editor
    }
}

impl ValueEditor for SpinEditor {
    fn value(&self) -> Value {
        if self.integer {
            Value::from(self.spin.value().round() as i64)
        } else {
            Value::from(self.spin.value())
        }
    }

    fn set_value(&self, value: &Value) {
        let number = value
            .as_f64()
            .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()));
        match number {
            Some(number) => self.spin.set_value(number),
            None => warn_unusable("Numeric", value),
        }
    }

    fn set_on_change(&self, callback: Box<dyn Fn()>) {
        *self.on_change.borrow_mut() = Some(callback);
    }
}

/// Color swatch for RGB and RGBA tuples
pub struct ColorEditor {
    button: ColorButtonWidget,
    with_alpha: bool,
    on_change: OnChangeCallback,
}

impl ColorEditor {
    pub fn new(with_alpha: bool, initial: &Value) -> Self {
        let initial_color = color_from_value(initial, with_alpha).unwrap_or(Rgba(0, 0, 0, 255));
        let button = ColorButtonWidget::new(initial_color, with_alpha);
        let on_change = new_callback();

        let on_change_clone = on_change.clone();
        button.set_on_change(move |_| notify_change(&on_change_clone));

        Self {
            button,
            with_alpha,
            on_change,
        }
    }
}

fn color_from_value(value: &Value, with_alpha: bool) -> Option<Rgba> {
    if with_alpha {
        Rgba::from_value(value)
    } else {
        Rgb::from_value(value).map(|Rgb(r, g, b)| Rgba(r, g, b, 255))
    }
}

impl ValueEditor for ColorEditor {
    fn value(&self) -> Value {
        let Rgba(r, g, b, a) = self.button.color();
        if self.with_alpha {
            Rgba(r, g, b, a).to_value()
        } else {
            Rgb(r, g, b).to_value()
        }
    }

    fn set_value(&self, value: &Value) {
        match color_from_value(value, self.with_alpha) {
            Some(color) => self.button.set_color(color),
            None => warn_unusable("Color", value),
        }
    }

    fn set_on_change(&self, callback: Box<dyn Fn()>) {
        *self.on_change.borrow_mut() = Some(callback);
    }
}

/// Single-line text entry; also the fallback for unrecognized types
pub struct TextEditor {
    entry: Entry,
    on_change: OnChangeCallback,
}

impl TextEditor {
    pub fn new(initial: &Value) -> Self {
        let entry = Entry::new();
        entry.set_text(&value_to_text(initial));
        let on_change = new_callback();

        let on_change_clone = on_change.clone();
        entry.connect_changed(move |_| notify_change(&on_change_clone));

        Self { entry, on_change }
    }
}

impl ValueEditor for TextEditor {
    fn value(&self) -> Value {
        Value::String(self.entry.text().to_string())
    }

    fn set_value(&self, value: &Value) {
        self.entry.set_text(&value_to_text(value));
    }

    fn set_on_change(&self, callback: Box<dyn Fn()>) {
        *self.on_change.borrow_mut() = Some(callback);
    }
}

/// Text entry with a browse button opening a file chooser
pub struct PathEditor {
    container: GtkBox,
    entry: Entry,
    on_change: OnChangeCallback,
}

impl PathEditor {
    pub fn new(title: &str, initial: &Value) -> Self {
        let container = GtkBox::new(Orientation::Horizontal, 6);
        let entry = Entry::new();
        entry.set_hexpand(true);
        entry.set_text(&value_to_text(initial));

        let browse_button = Button::from_icon_name("document-open-symbolic");
        browse_button.set_tooltip_text(Some("Browse for file"));

        container.append(&entry);
        container.append(&browse_button);

        let on_change = new_callback();
        let on_change_clone = on_change.clone();
        entry.connect_changed(move |_| notify_change(&on_change_clone));

        let entry_clone = entry.clone();
        let title = format!("Select {}", title);
        browse_button.connect_clicked(move |btn| {
            let window = btn
                .root()
                .and_then(|root| root.downcast::<gtk4::Window>().ok());
            let entry = entry_clone.clone();
            let title = title.clone();

            gtk4::glib::MainContext::default().spawn_local(async move {
                let file_dialog = FileDialog::builder().title(title.as_str()).modal(true).build();

                if let Ok(file) = file_dialog.open_future(window.as_ref()).await {
                    if let Some(path) = file.path() {
                        // Entry's changed signal notifies listeners
                        entry.set_text(&path.to_string_lossy());
                    }
                }
            });
        });

        Self {
            container,
            entry,
            on_change,
        }
    }
}

impl ValueEditor for PathEditor {
    fn value(&self) -> Value {
        Value::String(self.entry.text().to_string())
    }

    fn set_value(&self, value: &Value) {
        match value.as_str() {
            Some(path) => self.entry.set_text(path),
            None => warn_unusable("Path", value),
        }
    }

    fn set_on_change(&self, callback: Box<dyn Fn()>) {
        *self.on_change.borrow_mut() = Some(callback);
    }
}

/// Any of the GTK editors
pub enum GtkEditor {
    Toggle(ToggleEditor),
    Choice(ChoiceEditor),
    Spin(SpinEditor),
    Color(ColorEditor),
    Text(TextEditor),
    Path(PathEditor),
}

impl GtkEditor {
    /// The widget to place in a form
    pub fn widget(&self) -> gtk4::Widget {
        match self {
            GtkEditor::Toggle(e) => e.check.clone().upcast(),
            GtkEditor::Choice(e) => e.dropdown.clone().upcast(),
            GtkEditor::Spin(e) => e.spin.clone().upcast(),
            GtkEditor::Color(e) => e.button.widget().clone().upcast(),
            GtkEditor::Text(e) => e.entry.clone().upcast(),
            GtkEditor::Path(e) => e.container.clone().upcast(),
        }
    }

    fn inner(&self) -> &dyn ValueEditor {
        match self {
            GtkEditor::Toggle(e) => e,
            GtkEditor::Choice(e) => e,
            GtkEditor::Spin(e) => e,
            GtkEditor::Color(e) => e,
            GtkEditor::Text(e) => e,
            GtkEditor::Path(e) => e,
        }
    }
}

impl ValueEditor for GtkEditor {
    fn value(&self) -> Value {
        self.inner().value()
    }

    fn set_value(&self, value: &Value) {
        self.inner().set_value(value)
    }

    fn set_on_change(&self, callback: Box<dyn Fn()>) {
        self.inner().set_on_change(callback)
    }
}

/// Creates GTK editors for descriptors
#[derive(Debug, Default, Clone, Copy)]
pub struct GtkEditorFactory;

impl EditorFactory for GtkEditorFactory {
    type Editor = GtkEditor;

    fn make_editor(&self, descriptor: &ArgumentDescriptor) -> GtkEditor {
        let initial = initial_value(descriptor);

        match editor_kind(descriptor) {
            EditorKind::Toggle => GtkEditor::Toggle(ToggleEditor::new(&initial)),
            EditorKind::SingleSelect(choices) => {
                GtkEditor::Choice(ChoiceEditor::new(choices, descriptor.kind.clone(), &initial))
            }
            EditorKind::Stepper {
                min,
                max,
                step,
                digits,
            } => GtkEditor::Spin(SpinEditor::new(min, max, step, digits, &initial)),
            EditorKind::ColorRgb => GtkEditor::Color(ColorEditor::new(false, &initial)),
            EditorKind::ColorRgba => GtkEditor::Color(ColorEditor::new(true, &initial)),
            EditorKind::TextField | EditorKind::FallbackText => {
                GtkEditor::Text(TextEditor::new(&initial))
            }
            EditorKind::FilePath => GtkEditor::Path(PathEditor::new(&descriptor.name, &initial)),
        }
    }
}

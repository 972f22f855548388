//! Mapping argument descriptors to editors.
//!
//! [`editor_kind`] is the one place that decides which editor an argument
//! gets. Toolkit crates implement [`EditorFactory`] to turn an
//! [`EditorKind`] into a concrete widget implementing [`ValueEditor`].

use crate::descriptor::{ArgumentDescriptor, ValueKind};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Bounds used for numeric arguments that declare none
pub const UNBOUNDED_MIN: f64 = -1.0e9;
pub const UNBOUNDED_MAX: f64 = 1.0e9;

/// Shared, replaceable change callback
pub type OnChangeCallback = Rc<RefCell<Option<Box<dyn Fn()>>>>;

/// Invoke a change callback if one is set.
pub fn notify_change(on_change: &OnChangeCallback) {
    if let Some(cb) = on_change.borrow().as_ref() {
        cb();
    }
}

/// Editor chosen for an argument
#[derive(Debug, Clone, PartialEq)]
pub enum EditorKind {
    Toggle,
    SingleSelect(Vec<String>),
    Stepper {
        min: f64,
        max: f64,
        step: f64,
        digits: u32,
    },
    ColorRgb,
    ColorRgba,
    TextField,
    FilePath,
    /// Text field for types without a dedicated editor
    FallbackText,
}

/// Choose the editor for a descriptor.
pub fn editor_kind(descriptor: &ArgumentDescriptor) -> EditorKind {
    if let Some(choices) = descriptor.choice_set() {
        return EditorKind::SingleSelect(choices.to_vec());
    }

    match &descriptor.kind {
        ValueKind::Bool => EditorKind::Toggle,
        ValueKind::Count => EditorKind::Stepper {
            min: 0.0,
            max: UNBOUNDED_MAX,
            step: 1.0,
            digits: 0,
        },
        ValueKind::Integer { min, max } => {
            let (min, max) = stepper_range(min.map(|v| v as f64), max.map(|v| v as f64));
            EditorKind::Stepper {
                min,
                max,
                step: 1.0,
                digits: 0,
            }
        }
        ValueKind::Float { min, max, step } => {
            let (min, max) = stepper_range(*min, *max);
            let step = match step {
                Some(step) if step.is_finite() && *step > 0.0 => *step,
                _ => DEFAULT_FLOAT_STEP,
            };
            EditorKind::Stepper {
                min,
                max,
                step,
                digits: digits_for_step(step),
            }
        }
        ValueKind::Rgb => EditorKind::ColorRgb,
        ValueKind::Rgba => EditorKind::ColorRgba,
        ValueKind::Text => EditorKind::TextField,
        ValueKind::Path => EditorKind::FilePath,
        ValueKind::Unrecognized(type_name) => {
            log::debug!(
                "No editor for type '{}' of '{}', using a text field",
                type_name,
                descriptor.name
            );
            EditorKind::FallbackText
        }
    }
}

const DEFAULT_FLOAT_STEP: f64 = 0.1;

/// Stepper bounds; missing or non-finite ends are unbounded, reversed ends are swapped.
fn stepper_range(min: Option<f64>, max: Option<f64>) -> (f64, f64) {
    let min = min.filter(|v| v.is_finite()).unwrap_or(UNBOUNDED_MIN);
    let max = max.filter(|v| v.is_finite()).unwrap_or(UNBOUNDED_MAX);
    if min > max {
        (max, min)
    } else {
        (min, max)
    }
}

/// Number of decimals needed to show a float step (at least 1, at most 6).
fn digits_for_step(step: f64) -> u32 {
    let mut digits = 1;
    let mut scaled = step.abs() * 10.0;
    while digits < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        digits += 1;
    }
    digits
}

/// Value an editor starts with.
///
/// The declared default, except that a choice argument without a default
/// starts at its first choice and a flag without a default starts off.
pub fn initial_value(descriptor: &ArgumentDescriptor) -> Value {
    if let Some(default) = &descriptor.default {
        return default.clone();
    }
    if let Some(first) = descriptor.choice_set().and_then(|c| c.first()) {
        return Value::String(first.clone());
    }
    match descriptor.kind {
        ValueKind::Bool => Value::Bool(descriptor.negated),
        ValueKind::Count => Value::from(0),
        _ => Value::Null,
    }
}

/// Best-effort string form of a value for text editors.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Interpret editor text according to the argument's kind.
///
/// Numeric kinds yield numbers when the text parses; everything else, and
/// unparsable text, stays a string.
pub fn typed_text(kind: &ValueKind, text: &str) -> Value {
    let parsed = match kind {
        ValueKind::Integer { .. } | ValueKind::Count => {
            text.trim().parse::<i64>().ok().map(Value::from)
        }
        ValueKind::Float { .. } => text.trim().parse::<f64>().ok().map(Value::from),
        ValueKind::Bool => text.trim().parse::<bool>().ok().map(Value::Bool),
        _ => None,
    };
    parsed.unwrap_or_else(|| Value::String(text.to_string()))
}

/// A widget that edits one argument value.
pub trait ValueEditor {
    /// Current value
    fn value(&self) -> Value;

    /// Replace the current value; values of the wrong shape are ignored
    fn set_value(&self, value: &Value);

    /// Set the callback invoked when the user changes the value
    fn set_on_change(&self, callback: Box<dyn Fn()>);
}

/// Creates editors for descriptors.
pub trait EditorFactory {
    type Editor: ValueEditor;

    fn make_editor(&self, descriptor: &ArgumentDescriptor) -> Self::Editor;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_table() {
        let cases = vec![
            (ValueKind::Bool, EditorKind::Toggle),
            (ValueKind::Rgb, EditorKind::ColorRgb),
            (ValueKind::Rgba, EditorKind::ColorRgba),
            (ValueKind::Text, EditorKind::TextField),
            (ValueKind::Path, EditorKind::FilePath),
            (
                ValueKind::Unrecognized("Serial".to_string()),
                EditorKind::FallbackText,
            ),
            (
                ValueKind::Integer {
                    min: Some(0),
                    max: Some(10),
                },
                EditorKind::Stepper {
                    min: 0.0,
                    max: 10.0,
                    step: 1.0,
                    digits: 0,
                },
            ),
        ];

        for (kind, expected) in cases {
            let d = ArgumentDescriptor::new("arg", kind);
            assert_eq!(editor_kind(&d), expected);
        }
    }

    #[test]
    fn test_choices_take_precedence() {
        let d = ArgumentDescriptor::new("level", ValueKind::Integer { min: None, max: None })
            .with_choices(["low", "high"]);
        assert_eq!(
            editor_kind(&d),
            EditorKind::SingleSelect(vec!["low".to_string(), "high".to_string()])
        );
    }

    #[test]
    fn test_unbounded_float() {
        let d = ArgumentDescriptor::new(
            "scale",
            ValueKind::Float {
                min: None,
                max: Some(2.0),
                step: Some(0.25),
            },
        );
        assert_eq!(
            editor_kind(&d),
            EditorKind::Stepper {
                min: UNBOUNDED_MIN,
                max: 2.0,
                step: 0.25,
                digits: 2,
            }
        );
    }

    #[test]
    fn test_reversed_bounds_and_bad_step() {
        let d = ArgumentDescriptor::new(
            "gain",
            ValueKind::Float {
                min: Some(5.0),
                max: Some(1.0),
                step: Some(0.0),
            },
        );
        assert_eq!(
            editor_kind(&d),
            EditorKind::Stepper {
                min: 1.0,
                max: 5.0,
                step: 0.1,
                digits: 1,
            }
        );

        let d = ArgumentDescriptor::new(
            "level",
            ValueKind::Integer {
                min: Some(10),
                max: Some(-10),
            },
        );
        assert_eq!(
            editor_kind(&d),
            EditorKind::Stepper {
                min: -10.0,
                max: 10.0,
                step: 1.0,
                digits: 0,
            }
        );

        let d = ArgumentDescriptor::new(
            "ratio",
            ValueKind::Float {
                min: Some(f64::NAN),
                max: None,
                step: Some(-0.5),
            },
        );
        let EditorKind::Stepper { min, step, .. } = editor_kind(&d) else {
            panic!("expected a stepper");
        };
        assert_eq!(min, UNBOUNDED_MIN);
        assert_eq!(step, 0.1);
    }

    #[test]
    fn test_digits_for_step() {
        assert_eq!(digits_for_step(1.0), 1);
        assert_eq!(digits_for_step(0.1), 1);
        assert_eq!(digits_for_step(0.05), 2);
        assert_eq!(digits_for_step(0.001), 3);
    }

    #[test]
    fn test_choice_without_default_selects_first() {
        let d = ArgumentDescriptor::new("pickText", ValueKind::Text)
            .with_choices(["Bee mine", "I choo-choo-choose you"]);
        assert_eq!(initial_value(&d), json!("Bee mine"));

        let d = d.with_default("I choo-choo-choose you");
        assert_eq!(initial_value(&d), json!("I choo-choo-choose you"));
    }

    #[test]
    fn test_initial_value_fallbacks() {
        assert_eq!(
            initial_value(&ArgumentDescriptor::new("flag", ValueKind::Bool)),
            json!(false)
        );
        assert_eq!(
            initial_value(&ArgumentDescriptor::new("no-color", ValueKind::Bool).negated()),
            json!(true)
        );
        assert_eq!(
            initial_value(&ArgumentDescriptor::new("verbose", ValueKind::Count)),
            json!(0)
        );
        assert_eq!(
            initial_value(&ArgumentDescriptor::new("name", ValueKind::Text)),
            Value::Null
        );
    }

    #[test]
    fn test_typed_text() {
        let int = ValueKind::Integer { min: None, max: None };
        assert_eq!(typed_text(&int, "3"), json!(3));
        assert_eq!(typed_text(&int, "three"), json!("three"));
        assert_eq!(
            typed_text(&ValueKind::Float { min: None, max: None, step: None }, "0.5"),
            json!(0.5)
        );
        assert_eq!(typed_text(&ValueKind::Text, "3"), json!("3"));
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&json!("abc")), "abc");
        assert_eq!(value_to_text(&json!(3)), "3");
        assert_eq!(value_to_text(&Value::Null), "");
        assert_eq!(value_to_text(&json!([1, 2])), "[1,2]");
    }
}

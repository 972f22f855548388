//! Value maps and rendering them back to a command line.

use crate::color::{Rgb, Rgba};
use crate::descriptor::{ArgumentDescriptor, Section, ValueKind};
use crate::editor::value_to_text;
use serde_json::Value;

/// Nested result mapping: orphan values at the top level, other sections by name
pub type ValueMap = serde_json::Map<String, Value>;

/// Look up the values belonging to one section of a [`ValueMap`].
pub fn section_values<'a>(
    values: &'a ValueMap,
    section: &str,
    orphan_name: &str,
) -> &'a ValueMap {
    if section != orphan_name {
        if let Some(Value::Object(nested)) = values.get(section) {
            return nested;
        }
    }
    values
}

/// Render values as command-line arguments.
///
/// Positional values come first in declaration order, followed by options.
/// Flags are written when their value differs from the unset state, counted
/// flags are repeated and colours are written as hex. Null values are omitted,
/// as are empty strings for options without a default of their own.
pub fn to_command_line(
    sections: &[Section],
    values: &ValueMap,
    orphan_name: &str,
) -> Vec<String> {
    let mut positionals = Vec::new();
    let mut options = Vec::new();

    for section in sections {
        let section_map = section_values(values, &section.name, orphan_name);
        for descriptor in &section.arguments {
            let Some(value) = section_map.get(descriptor.key()) else {
                continue;
            };
            if descriptor.positional {
                if let Some(text) = render_value(descriptor, value) {
                    positionals.push(text);
                }
            } else {
                push_option(&mut options, descriptor, value);
            }
        }
    }

    positionals.extend(options);
    positionals
}

fn push_option(args: &mut Vec<String>, descriptor: &ArgumentDescriptor, value: &Value) {
    let Some(flag) = descriptor.flag() else {
        log::warn!("Argument '{}' has no flag to render", descriptor.name);
        return;
    };

    if descriptor.choice_set().is_none() {
        match descriptor.kind {
            ValueKind::Bool => {
                if value.as_bool() == Some(!descriptor.negated) {
                    args.push(flag);
                }
                return;
            }
            ValueKind::Count => {
                let count = value.as_u64().unwrap_or(0) as usize;
                args.extend(std::iter::repeat(flag).take(count));
                return;
            }
            _ => {}
        }
    }

    if let Some(text) = render_value(descriptor, value) {
        args.push(flag);
        args.push(text);
    }
}

fn render_value(descriptor: &ArgumentDescriptor, value: &Value) -> Option<String> {
    if value.is_null() || is_unset_text(descriptor, value) {
        return None;
    }
    let text = match descriptor.kind {
        ValueKind::Rgb => Rgb::from_value(value).map(|c| c.to_string()),
        ValueKind::Rgba => Rgba::from_value(value).map(|c| c.to_string()),
        _ => None,
    };
    Some(text.unwrap_or_else(|| value_to_text(value)))
}

/// An empty string on an option with no non-empty default means "not given".
fn is_unset_text(descriptor: &ArgumentDescriptor, value: &Value) -> bool {
    if descriptor.positional || value.as_str() != Some("") {
        return false;
    }
    match &descriptor.default {
        None | Some(Value::Null) => true,
        Some(Value::String(default)) => default.is_empty(),
        Some(_) => false,
    }
}

//! Argument descriptors and the argument sets they are collected in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Section title given to ungrouped positional arguments
pub const POSITIONAL_TITLE: &str = "Arguments";

/// Section title given to ungrouped optional arguments
pub const OPTIONAL_TITLE: &str = "Options";

/// Declared type of the value an argument holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// On/off flag
    Bool,
    /// Repeatable flag counting its occurrences (`-vvv`)
    Count,
    /// Whole number with optional bounds
    Integer { min: Option<i64>, max: Option<i64> },
    /// Floating point number with optional bounds and step
    Float {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    /// Three-channel colour
    Rgb,
    /// Four-channel colour
    Rgba,
    /// Free-form string
    Text,
    /// Filesystem path
    Path,
    /// A type this crate has no dedicated editor for
    Unrecognized(String),
}

/// A single configurable value: name, type, default and constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    pub name: String,
    pub kind: ValueKind,
    pub default: Option<Value>,
    pub choices: Option<Vec<String>>,
    pub help: Option<String>,
    /// Key the value is stored under in a [`crate::ValueMap`]
    pub dest: String,
    /// Long flag used when rendering a command line (`--long`)
    pub long: Option<String>,
    /// Short flag, used when there is no long one (`-s`)
    pub short: Option<char>,
    pub positional: bool,
    /// Passing the flag turns the value off instead of on
    pub negated: bool,
}

impl ArgumentDescriptor {
    /// Create an optional argument; `dest` and `long` default to `name`.
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        let name = name.into();
        Self {
            dest: name.clone(),
            long: Some(name.clone()),
            short: None,
            name,
            kind,
            default: None,
            choices: None,
            help: None,
            positional: false,
            negated: false,
        }
    }

    /// Create a positional argument.
    pub fn positional(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            long: None,
            positional: true,
            ..Self::new(name, kind)
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_dest(mut self, dest: impl Into<String>) -> Self {
        self.dest = dest.into();
        self
    }

    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Drop the long flag, leaving only the short one.
    pub fn without_long(mut self) -> Self {
        self.long = None;
        self
    }

    /// Flag as written on a command line, preferring the long form.
    pub fn flag(&self) -> Option<String> {
        match (&self.long, self.short) {
            (Some(long), _) => Some(format!("--{}", long.trim_start_matches('-'))),
            (None, Some(short)) => Some(format!("-{}", short)),
            (None, None) => None,
        }
    }

    /// Mark a flag whose presence sets the value to false.
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    /// Key this argument's value is reported under.
    pub fn key(&self) -> &str {
        &self.dest
    }

    /// Choice set, if a non-empty one was declared.
    pub fn choice_set(&self) -> Option<&[String]> {
        self.choices.as_deref().filter(|c| !c.is_empty())
    }
}

/// Title and description of a declared argument group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionHeader {
    pub title: String,
    pub description: Option<String>,
}

impl SectionHeader {
    pub fn new(title: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            title: title.into(),
            description: description.map(str::to_string),
        }
    }
}

/// A named grouping of descriptors shown together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<ArgumentDescriptor>,
}

impl Section {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            arguments: Vec::new(),
        }
    }
}

/// Declarative description of a program's arguments.
///
/// Arguments added directly land in the ungrouped `Arguments`/`Options`
/// sections; [`ArgumentSet::group`] opens a declared section that following
/// [`ArgumentSet::argument`] calls add to.
///
/// ```ignore
/// let set = ArgumentSet::new(Some("Main settings"))
///     .argument(ArgumentDescriptor::new("verbose", ValueKind::Bool))
///     .group("Strings", Some("Text input"))
///     .argument(ArgumentDescriptor::new("freetext", ValueKind::Text));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgumentSet {
    pub description: Option<String>,
    entries: Vec<(SectionHeader, ArgumentDescriptor)>,
    #[serde(skip)]
    open_group: Option<SectionHeader>,
}

impl ArgumentSet {
    pub fn new(description: Option<&str>) -> Self {
        Self {
            description: description.map(str::to_string),
            ..Self::default()
        }
    }

    /// Start a declared group; later arguments are added to it.
    pub fn group(mut self, title: impl Into<String>, description: Option<&str>) -> Self {
        self.open_group = Some(SectionHeader::new(title, description));
        self
    }

    /// Return to adding ungrouped arguments.
    pub fn ungrouped(mut self) -> Self {
        self.open_group = None;
        self
    }

    pub fn argument(mut self, descriptor: ArgumentDescriptor) -> Self {
        self.push(descriptor);
        self
    }

    /// Add an argument to the currently open group (or the ungrouped sections).
    pub fn push(&mut self, descriptor: ArgumentDescriptor) {
        let header = match &self.open_group {
            Some(header) => header.clone(),
            None if descriptor.positional => SectionHeader::new(POSITIONAL_TITLE, None),
            None => SectionHeader::new(OPTIONAL_TITLE, None),
        };
        self.entries.push((header, descriptor));
    }

    /// Add an argument under an explicit section header.
    pub fn push_in(&mut self, header: SectionHeader, descriptor: ArgumentDescriptor) {
        self.entries.push((header, descriptor));
    }

    pub fn entries(&self) -> &[(SectionHeader, ArgumentDescriptor)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all descriptors in declaration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ArgumentDescriptor> {
        self.entries.iter().map(|(_, d)| d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_defaults() {
        let d = ArgumentDescriptor::new("level", ValueKind::Text);
        assert_eq!(d.key(), "level");
        assert_eq!(d.long.as_deref(), Some("level"));
        assert!(!d.positional);

        let p = ArgumentDescriptor::positional("input", ValueKind::Path).with_dest("source");
        assert_eq!(p.key(), "source");
        assert_eq!(p.long, None);
        assert!(p.positional);
    }

    #[test]
    fn test_descriptor_serialization() {
        let d = ArgumentDescriptor::new("port", ValueKind::Unrecognized("Serial".to_string()))
            .with_default("/dev/ttyUSB0");
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"unrecognized\":\"Serial\""));

        let deserialized: ArgumentDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, d);
    }

    #[test]
    fn test_flag_prefers_long() {
        let d = ArgumentDescriptor::new("verbose", ValueKind::Count).with_short('v');
        assert_eq!(d.flag().as_deref(), Some("--verbose"));
        assert_eq!(d.without_long().flag().as_deref(), Some("-v"));
        assert_eq!(ArgumentDescriptor::positional("input", ValueKind::Path).flag(), None);
    }

    #[test]
    fn test_empty_choices_are_ignored() {
        let d = ArgumentDescriptor::new("mode", ValueKind::Text).with_choices(Vec::<String>::new());
        assert!(d.choice_set().is_none());
    }

    #[test]
    fn test_argument_set_sections() {
        let set = ArgumentSet::new(Some("Main settings"))
            .argument(ArgumentDescriptor::new("x", ValueKind::Bool).with_default(true))
            .argument(ArgumentDescriptor::positional("input", ValueKind::Path))
            .group("Strings", Some("Text input"))
            .argument(ArgumentDescriptor::new("freetext", ValueKind::Text))
            .ungrouped()
            .argument(ArgumentDescriptor::new("y", ValueKind::Text));

        let titles: Vec<&str> = set.entries().iter().map(|(h, _)| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Options", "Arguments", "Strings", "Options"]);
        assert_eq!(set.entries()[2].0.description.as_deref(), Some("Text input"));
        assert_eq!(set.entries()[0].1.default, Some(json!(true)));
    }
}

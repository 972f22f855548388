//! Building an [`ArgumentSet`] from a `clap::Command`.
//!
//! clap does not expose the Rust type behind a value parser, so the value
//! kind is read from what clap does expose: the action, possible values,
//! value hint and value name.

use crate::color::{Rgb, Rgba};
use crate::descriptor::{
    ArgumentDescriptor, ArgumentSet, SectionHeader, ValueKind, OPTIONAL_TITLE, POSITIONAL_TITLE,
};
use clap::{Arg, ArgAction, Command, ValueHint};
use serde_json::Value;

/// Convert every user-facing argument of `command` into a descriptor.
///
/// Help and version flags are skipped. Arguments with a help heading are
/// placed in a section of that name; the rest go to the ungrouped sections.
pub fn from_command(command: &Command) -> ArgumentSet {
    let about = command.get_about().map(|about| about.to_string());
    let mut set = ArgumentSet::new(about.as_deref());

    for arg in command.get_arguments() {
        if is_builtin(arg) || arg.is_hide_set() {
            continue;
        }
        let title = arg.get_help_heading().unwrap_or(if arg.is_positional() {
            POSITIONAL_TITLE
        } else {
            OPTIONAL_TITLE
        });
        set.push_in(SectionHeader::new(title, None), descriptor_for(arg));
    }

    log::debug!(
        "Imported {} arguments from command '{}'",
        set.entries().len(),
        command.get_name()
    );
    set
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(
        arg.get_action(),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
    )
}

fn descriptor_for(arg: &Arg) -> ArgumentDescriptor {
    let id = arg.get_id().as_str();
    let kind = kind_for(arg);

    let mut descriptor = if arg.is_positional() {
        ArgumentDescriptor::positional(id, kind.clone())
    } else {
        ArgumentDescriptor::new(id, kind.clone())
    };
    descriptor.long = arg.get_long().map(str::to_string);
    descriptor.short = arg.get_short();
    if matches!(arg.get_action(), ArgAction::SetFalse) {
        descriptor = descriptor.negated();
    }

    let choices: Vec<String> = arg
        .get_possible_values()
        .iter()
        .filter(|pv| !pv.is_hide_set())
        .map(|pv| pv.get_name().to_string())
        .collect();
    if !choices.is_empty() && !matches!(kind, ValueKind::Bool) {
        descriptor = descriptor.with_choices(choices);
    }

    if let Some(default) = arg
        .get_default_values()
        .first()
        .and_then(|d| d.to_str())
        .and_then(|d| default_value(&kind, d))
    {
        descriptor = descriptor.with_default(default);
    }

    if let Some(help) = arg.get_help().or_else(|| arg.get_long_help()) {
        descriptor = descriptor.with_help(help.to_string());
    }

    descriptor
}

fn kind_for(arg: &Arg) -> ValueKind {
    match arg.get_action() {
        ArgAction::SetTrue | ArgAction::SetFalse => return ValueKind::Bool,
        ArgAction::Count => return ValueKind::Count,
        _ => {}
    }

    if matches!(
        arg.get_value_hint(),
        ValueHint::FilePath | ValueHint::DirPath | ValueHint::AnyPath | ValueHint::ExecutablePath
    ) {
        return ValueKind::Path;
    }

    let value_name = arg
        .get_value_names()
        .and_then(|names| names.first())
        .map(|name| name.to_string().to_ascii_uppercase());

    match value_name.as_deref() {
        Some("RGB") => ValueKind::Rgb,
        Some("RGBA") => ValueKind::Rgba,
        Some("N" | "NUM" | "INT" | "COUNT") => ValueKind::Integer {
            min: None,
            max: None,
        },
        Some("FLOAT") => ValueKind::Float {
            min: None,
            max: None,
            step: None,
        },
        Some("PATH" | "FILE" | "DIR") => ValueKind::Path,
        _ => ValueKind::Text,
    }
}

/// Convert a clap default string into a typed value; unparsable defaults are dropped.
fn default_value(kind: &ValueKind, raw: &str) -> Option<Value> {
    let value = match kind {
        ValueKind::Bool => raw.parse::<bool>().ok().map(Value::Bool),
        ValueKind::Count => raw.parse::<u64>().ok().map(Value::from),
        ValueKind::Integer { .. } => raw.parse::<i64>().ok().map(Value::from),
        ValueKind::Float { .. } => raw.parse::<f64>().ok().map(Value::from),
        ValueKind::Rgb => raw.parse::<Rgb>().ok().map(Rgb::to_value),
        ValueKind::Rgba => raw.parse::<Rgba>().ok().map(Rgba::to_value),
        ValueKind::Text | ValueKind::Path | ValueKind::Unrecognized(_) => {
            Some(Value::String(raw.to_string()))
        }
    };
    if value.is_none() {
        log::warn!("Ignoring default '{}' that does not fit {:?}", raw, kind);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::{organize, OrphanConfig};
    use crate::values::to_command_line;
    use serde_json::json;
    use std::path::PathBuf;

    fn command() -> Command {
        Command::new("demo")
            .about("Main settings")
            .arg(Arg::new("input").value_hint(ValueHint::FilePath))
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count)
                    .help("More output"),
            )
            .arg(Arg::new("dry-run").long("dry-run").action(ArgAction::SetTrue))
            .arg(
                Arg::new("jobs")
                    .long("jobs")
                    .value_name("N")
                    .default_value("4"),
            )
            .next_help_heading("Strings")
            .arg(
                Arg::new("pick")
                    .long("pick")
                    .value_parser(["Bee mine", "I choo-choo-choose you"]),
            )
            .arg(
                Arg::new("background")
                    .long("background")
                    .value_name("RGB")
                    .default_value("ff0000"),
            )
    }

    #[test]
    fn test_import_sections() {
        let set = from_command(&command());
        assert_eq!(set.description.as_deref(), Some("Main settings"));

        let titles: Vec<&str> = set.entries().iter().map(|(h, _)| h.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Arguments", "Options", "Options", "Options", "Strings", "Strings"]
        );
    }

    #[test]
    fn test_import_kinds() {
        let set = from_command(&command());
        let d: Vec<&ArgumentDescriptor> = set.descriptors().collect();

        assert!(d[0].positional);
        assert_eq!(d[0].kind, ValueKind::Path);
        assert_eq!(d[1].kind, ValueKind::Count);
        assert_eq!(d[1].help.as_deref(), Some("More output"));
        assert_eq!(d[2].kind, ValueKind::Bool);
        assert_eq!(d[2].long.as_deref(), Some("dry-run"));
        assert_eq!(
            d[3].kind,
            ValueKind::Integer {
                min: None,
                max: None
            }
        );
        assert_eq!(d[3].default, Some(json!(4)));
        assert_eq!(
            d[4].choice_set(),
            Some(&["Bee mine".to_string(), "I choo-choo-choose you".to_string()][..])
        );
        assert_eq!(d[5].kind, ValueKind::Rgb);
        assert_eq!(d[5].default, Some(json!([255, 0, 0])));
    }

    #[test]
    fn test_short_flag_is_kept() {
        let set = from_command(&command());
        let d: Vec<&ArgumentDescriptor> = set.descriptors().collect();
        assert_eq!(d[1].short, Some('v'));
        assert_eq!(d[2].short, None);
    }

    #[test]
    fn test_command_line_parses_back() {
        let command = Command::new("demo")
            .arg(Arg::new("input").value_hint(ValueHint::FilePath))
            .arg(
                Arg::new("config")
                    .long("config")
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(Arg::new("verbose").short('v').action(ArgAction::Count))
            .arg(Arg::new("quiet").short('q').action(ArgAction::SetTrue))
            .arg(
                Arg::new("jobs")
                    .long("jobs")
                    .value_name("N")
                    .value_parser(clap::value_parser!(u32)),
            )
            .next_help_heading("Strings")
            .arg(
                Arg::new("background")
                    .long("background")
                    .value_name("RGB")
                    .value_parser(clap::value_parser!(Rgb)),
            );

        let orphan = OrphanConfig::default();
        let sections = organize(&from_command(&command), &orphan);
        let values = json!({
            "input": "data.csv",
            "config": "",
            "verbose": 2,
            "quiet": true,
            "jobs": 8,
            "Strings": {"background": [0, 128, 255]}
        });
        let args = to_command_line(&sections, values.as_object().unwrap(), &orphan.display_name);

        let matches = command
            .try_get_matches_from(std::iter::once("demo".to_string()).chain(args))
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("input").map(String::as_str),
            Some("data.csv")
        );
        assert_eq!(matches.get_one::<PathBuf>("config"), None);
        assert_eq!(matches.get_count("verbose"), 2);
        assert!(matches.get_flag("quiet"));
        assert_eq!(matches.get_one::<u32>("jobs"), Some(&8));
        assert_eq!(matches.get_one::<Rgb>("background"), Some(&Rgb(0, 128, 255)));
    }

    #[test]
    fn test_help_flag_is_skipped() {
        let set = from_command(&Command::new("x").arg(Arg::new("a").long("a")));
        assert!(set.descriptors().all(|d| d.name != "help"));
    }

    #[test]
    fn test_default_value_conversion() {
        assert_eq!(default_value(&ValueKind::Bool, "true"), Some(json!(true)));
        assert_eq!(
            default_value(&ValueKind::Float { min: None, max: None, step: None }, "0.5"),
            Some(json!(0.5))
        );
        assert_eq!(default_value(&ValueKind::Rgb, "ff00"), None);
    }
}

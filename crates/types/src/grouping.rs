//! Partitioning argument descriptors into sections.

use crate::descriptor::{ArgumentDescriptor, ArgumentSet, Section, SectionHeader};
use serde::{Deserialize, Serialize};

/// Which section titles count as "ungrouped" and what the merged section is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanConfig {
    /// Name shown for the merged ungrouped section
    pub display_name: String,
    /// Section titles merged into the orphan section
    pub reserved_titles: Vec<String>,
}

impl Default for OrphanConfig {
    fn default() -> Self {
        Self {
            display_name: "Main".to_string(),
            reserved_titles: vec![
                "positional arguments".to_string(),
                "optional arguments".to_string(),
                crate::descriptor::POSITIONAL_TITLE.to_string(),
                crate::descriptor::OPTIONAL_TITLE.to_string(),
            ],
        }
    }
}

impl OrphanConfig {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    pub fn with_reserved_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_titles = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a section with this title belongs to the orphan section.
    pub fn is_orphan(&self, title: &str) -> bool {
        title == self.display_name || self.reserved_titles.iter().any(|t| t == title)
    }
}

/// Group (section, descriptor) pairs into sections.
///
/// Sections keep the order in which they were first seen; descriptors keep
/// their relative order within a section.
pub fn group_arguments<'a, I>(pairs: I) -> Vec<Section>
where
    I: IntoIterator<Item = (&'a SectionHeader, &'a ArgumentDescriptor)>,
{
    let mut sections: Vec<Section> = Vec::new();

    for (header, descriptor) in pairs {
        let index = match sections.iter().position(|s| s.name == header.title) {
            Some(index) => index,
            None => {
                sections.push(Section::new(&header.title, header.description.clone()));
                sections.len() - 1
            }
        };
        let section = &mut sections[index];
        if section.description.is_none() {
            section.description = header.description.clone();
        }
        section.arguments.push(descriptor.clone());
    }

    sections
}

/// Group an argument set and collapse its ungrouped sections into one orphan section.
///
/// The orphan section takes the place of the first reserved section, is named
/// after `orphan.display_name` and described by the set's description.
pub fn organize(set: &ArgumentSet, orphan: &OrphanConfig) -> Vec<Section> {
    let grouped = group_arguments(set.entries().iter().map(|(h, d)| (h, d)));

    let mut sections: Vec<Section> = Vec::with_capacity(grouped.len());
    let mut orphan_index: Option<usize> = None;

    for section in grouped {
        if !orphan.is_orphan(&section.name) {
            sections.push(section);
            continue;
        }

        match orphan_index {
            Some(index) => sections[index].arguments.extend(section.arguments),
            None => {
                orphan_index = Some(sections.len());
                sections.push(Section {
                    name: orphan.display_name.clone(),
                    description: set.description.clone(),
                    arguments: section.arguments,
                });
            }
        }
    }

    log::debug!(
        "Organized {} arguments into {} sections",
        set.entries().len(),
        sections.len()
    );

    sections
}

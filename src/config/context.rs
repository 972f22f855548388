//! Application context passed to the dialog runner

use argdialog_types::OrphanConfig;

/// Default company name used for the settings directory
pub const DEFAULT_COMPANY: &str = "argdialog";

/// Everything the runner needs to know about the embedding application.
///
/// Built once by the caller and handed to [`crate::run_dialog`].
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application name, used for the settings directory and GTK app id
    pub app_name: String,
    /// Organisation name, used for the settings directory
    pub company: String,
    /// Window title
    pub title: String,
    /// How ungrouped arguments are collected and named
    pub orphan: OrphanConfig,
    /// Restore the last accepted values and save new ones on accept
    pub persist_values: bool,
}

impl AppContext {
    pub fn new(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        Self {
            title: app_name.clone(),
            app_name,
            company: DEFAULT_COMPANY.to_string(),
            orphan: OrphanConfig::default(),
            persist_values: true,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        let company = company.into();
        if !company.is_empty() {
            self.company = company;
        }
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.is_empty() {
            self.title = title;
        }
        self
    }

    pub fn with_orphan(mut self, orphan: OrphanConfig) -> Self {
        self.orphan = orphan;
        self
    }

    pub fn with_persist_values(mut self, persist: bool) -> Self {
        self.persist_values = persist;
        self
    }

    /// GTK application id derived from company and app name
    pub fn application_id(&self) -> String {
        let sanitize = |s: &str| -> String {
            let cleaned: String = s
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect();
            match cleaned.chars().next() {
                Some(c) if c.is_ascii_digit() => format!("_{}", cleaned),
                Some(_) => cleaned,
                None => "app".to_string(),
            }
        };
        format!("org.{}.{}", sanitize(&self.company), sanitize(&self.app_name))
    }
}

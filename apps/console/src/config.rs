use std::{fs, io, path::Path};

use anyhow::Context;
use client_core::{CourseControl, FormCapabilities};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub semester_select: bool,
    pub course_multi_select: bool,
    pub log_level: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".into(),
            semester_select: true,
            course_multi_select: true,
            log_level: "info".into(),
            request_timeout_secs: 10,
        }
    }
}

impl Settings {
    pub fn capabilities(&self) -> FormCapabilities {
        FormCapabilities {
            semester_select: self.semester_select,
            course_control: if self.course_multi_select {
                CourseControl::MultiSelect
            } else {
                CourseControl::Text
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    semester_select: Option<bool>,
    course_multi_select: Option<bool>,
    log_level: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `path` if it exists, then `STUDENTS__*` environment variables.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
            apply_file(&mut settings, file_cfg);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()))
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.server_url {
        settings.server_url = v;
    }
    if let Some(v) = file_cfg.semester_select {
        settings.semester_select = v;
    }
    if let Some(v) = file_cfg.course_multi_select {
        settings.course_multi_select = v;
    }
    if let Some(v) = file_cfg.log_level {
        settings.log_level = v;
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = v;
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("STUDENTS__SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = lookup("STUDENTS__SEMESTER_SELECT").and_then(|v| parse_bool(&v)) {
        settings.semester_select = v;
    }
    if let Some(v) = lookup("STUDENTS__COURSE_MULTI_SELECT").and_then(|v| parse_bool(&v)) {
        settings.course_multi_select = v;
    }
    if let Some(v) = lookup("STUDENTS__LOG_LEVEL") {
        settings.log_level = v;
    }
    if let Some(v) = lookup("STUDENTS__REQUEST_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
        settings.request_timeout_secs = v;
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

//! Duty code resolution.
//!
//! Four codes carry fixed sentences of their own; everything else goes
//! through the injected code table.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Duty code lookup table, loaded once per run.
#[derive(Debug)]
pub struct DutyCodeTable {
    codes: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct DutyCodeFile {
    duties: HashMap<String, String>,
}

impl DutyCodeTable {
    /// Keys are matched against uppercased, trimmed cell text, so they are
    /// normalized the same way here.
    pub fn new(codes: impl IntoIterator<Item = (String, String)>) -> Self {
        let codes = codes
            .into_iter()
            .map(|(code, description)| (code.trim().to_uppercase(), description))
            .collect();
        Self { codes }
    }

    /// Load a `[duties]` table of `"CODE" = "description"` pairs.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read duty code table: {}", path.display()))?;
        let file: DutyCodeFile = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse duty code table: {}", path.display()))?;
        Ok(Self::new(file.duties))
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.codes.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Sentence tail for a duty line, or `None` for a code that neither the
/// fixed set nor the table recognizes. Unknown codes are skipped by the
/// caller without a warning.
pub fn describe(code: &str, table: &DutyCodeTable) -> Option<String> {
    match code {
        "ΤΙΜ" => Some("είσαι αδειούχος!🎉".to_string()),
        "ΟΡΓ" => Some("είσαι Όργανο.".to_string()),
        "ΒΑΥΔΜ" => Some("είσαι ΒΑΥΔΜ.".to_string()),
        "ΚΑ" => Some("έχεις ζητήσει κάτι.".to_string()),
        _ => table
            .get(code)
            .map(|service| format!("έχεις υπηρεσία: {service}.")),
    }
}

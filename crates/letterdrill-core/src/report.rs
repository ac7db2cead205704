//! Session reports with JSON persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Configuration;
use crate::session::{Outcome, SessionResult};

/// A finished (or abandoned) session, ready to be archived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// The configuration the session was started with.
    pub configuration: Configuration,
    pub result: SessionResult,
}

impl SessionReport {
    pub fn new(configuration: Configuration, result: SessionResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            configuration,
            result,
        }
    }

    /// `letterdrill-<timestamp>-<id prefix>.json`.
    pub fn default_file_name(&self) -> String {
        let id = self.id.simple().to_string();
        format!(
            "letterdrill-{}-{}.json",
            self.created_at.format("%Y%m%dT%H%M%SZ"),
            &id[..8]
        )
    }

    /// Save into `dir` under [`default_file_name`](Self::default_file_name).
    pub fn save_in_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.default_file_name());
        self.save_json(&path)?;
        Ok(path)
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: SessionReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Render the review as a markdown list.
    pub fn to_markdown(&self) -> String {
        let r = &self.result;
        let mut md = String::new();
        md.push_str("## letterdrill session\n\n");
        md.push_str(&format!(
            "Mode **{}**, range {}–{}: **{}/{}** correct ({:.0}%)\n\n",
            r.mode.to_string().to_uppercase(),
            self.configuration.range_start,
            self.configuration.range_end,
            r.num_correct,
            r.total_questions,
            r.accuracy() * 100.0
        ));
        for (i, entry) in r.review.iter().enumerate() {
            let mark = match entry.outcome {
                Outcome::Correct => "x",
                _ => " ",
            };
            md.push_str(&format!(
                "{}. [{mark}] {} → {}\n",
                i + 1,
                entry.prompt,
                entry.answer
            ));
        }
        md
    }
}

//! Capture result types.
//!
//! These are the structures behind the `--json` output, so the field
//! names here are a small public contract for scripting consumers.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of one capture-tool invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaptureOutcome {
    /// The tool exited cleanly and the target file exists on disk
    Saved {
        /// Full path of the written screenshot
        path: PathBuf,
    },

    /// The operator dismissed the selection or interrupted the tool
    Cancelled,

    /// The tool reported an error or could not be launched
    Failed {
        /// Diagnostic text (tool stderr or launch error)
        reason: String,
    },
}

impl CaptureOutcome {
    /// Path of the saved screenshot, if the capture produced one
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Saved { path } => Some(path),
            Self::Cancelled | Self::Failed { .. } => None,
        }
    }

    /// True when a file was written
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// One guided-sequence step together with its outcome
#[derive(Debug, Clone, Serialize)]
pub struct CaptureRecord {
    /// Filename prefix of this step (e.g. "overview")
    pub prefix: String,

    /// Description shown to the operator when the step was prompted
    pub description: String,

    /// What the capture attempt produced
    pub outcome: CaptureOutcome,
}

/// Full result of a guided sequence run
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    /// Directory the captures were written into
    pub directory: PathBuf,

    /// One record per sequence step, in capture order
    pub records: Vec<CaptureRecord>,

    /// Timestamp when the run finished (RFC 3339, local offset)
    pub finished_at: String,
}

impl SequenceReport {
    /// Records whose capture produced a file, in capture order
    pub fn saved(&self) -> impl Iterator<Item = &CaptureRecord> {
        self.records.iter().filter(|r| r.outcome.is_saved())
    }

    /// Number of steps that produced a file
    pub fn saved_count(&self) -> usize {
        self.saved().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_accessor() {
        let saved = CaptureOutcome::Saved {
            path: PathBuf::from("screenshots/overview_20240101_120000_000.png"),
        };
        assert!(saved.is_saved());
        assert_eq!(
            saved.path(),
            Some(Path::new("screenshots/overview_20240101_120000_000.png"))
        );

        assert!(CaptureOutcome::Cancelled.path().is_none());
        let failed = CaptureOutcome::Failed {
            reason: "boom".to_string(),
        };
        assert!(failed.path().is_none());
    }

    #[test]
    fn test_outcome_json_shape() {
        let value = serde_json::to_value(CaptureOutcome::Cancelled).unwrap();
        assert_eq!(value["status"], "cancelled");

        let value = serde_json::to_value(CaptureOutcome::Saved {
            path: PathBuf::from("a.png"),
        })
        .unwrap();
        assert_eq!(value["status"], "saved");
        assert_eq!(value["path"], "a.png");
    }

    #[test]
    fn test_report_saved_filtering() {
        let report = SequenceReport {
            directory: PathBuf::from("screenshots"),
            records: vec![
                CaptureRecord {
                    prefix: "overview".to_string(),
                    description: "Overview".to_string(),
                    outcome: CaptureOutcome::Saved {
                        path: PathBuf::from("screenshots/overview.png"),
                    },
                },
                CaptureRecord {
                    prefix: "dialog".to_string(),
                    description: "Dialog".to_string(),
                    outcome: CaptureOutcome::Cancelled,
                },
            ],
            finished_at: "2024-01-01T12:00:00+00:00".to_string(),
        };

        assert_eq!(report.saved_count(), 1);
        assert_eq!(report.saved().next().unwrap().prefix, "overview");
    }

    #[test]
    fn test_report_json_shape() {
        let report = SequenceReport {
            directory: PathBuf::from("screenshots"),
            records: vec![CaptureRecord {
                prefix: "overview".to_string(),
                description: "Overview".to_string(),
                outcome: CaptureOutcome::Saved {
                    path: PathBuf::from("screenshots/overview.png"),
                },
            }],
            finished_at: "2024-01-01T12:00:00+00:00".to_string(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["directory"], "screenshots");
        assert_eq!(value["finished_at"], "2024-01-01T12:00:00+00:00");
        assert_eq!(value["records"][0]["prefix"], "overview");
        assert_eq!(value["records"][0]["outcome"]["status"], "saved");
        assert_eq!(
            value["records"][0]["outcome"]["path"],
            "screenshots/overview.png"
        );
    }
}

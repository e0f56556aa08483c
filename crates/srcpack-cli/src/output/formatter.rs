//! Output formatter trait for CLI results.

use anyhow::Result;
use serde::Serialize;
use srcpack_core::ArchiveManifest;
use srcpack_core::BuildReport;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format the result of building an archive and reading it back
    fn format_pack_result(
        &self,
        output_path: &Path,
        report: &BuildReport,
        manifest: &ArchiveManifest,
    ) -> Result<()>;

    /// Format the entries of an existing archive
    fn format_manifest(&self, manifest: &ArchiveManifest) -> Result<()>;

    /// Format a failed `operation`; shown even in quiet mode
    fn format_error(&self, operation: &str, error: &anyhow::Error);

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(operation: impl Into<String>, error: impl Into<String>) -> JsonOutput<()> {
        JsonOutput {
            operation: operation.into(),
            status: Status::Error,
            data: None,
            error: Some(error.into()),
        }
    }
}

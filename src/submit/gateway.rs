use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::GatewayError;
use crate::submit::payload::SubmissionPayload;

/// Created advertisement entity returned by the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Collaborator seam for `POST /properties/add`. Implementations own the
/// transport, including enforcement of the bounded timeout they are given.
pub trait PropertyGateway {
    fn create(
        &self,
        payload: &SubmissionPayload,
        timeout: Duration,
    ) -> Result<Property, GatewayError>;
}

/// File-backed gateway used by the CLI and tests: persists the payload as
/// a JSON manifest instead of crossing the network, then answers with the
/// entity the real endpoint would return.
pub struct DryRunGateway {
    out_dir: PathBuf,
    next_id: AtomicU64,
}

impl DryRunGateway {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}

impl PropertyGateway for DryRunGateway {
    fn create(
        &self,
        payload: &SubmissionPayload,
        _timeout: Duration,
    ) -> Result<Property, GatewayError> {
        fs::create_dir_all(&self.out_dir)?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let path = self.out_dir.join(format!("submission_{id}.json"));
        let json = serde_json::to_string_pretty(payload)?;
        write_atomic(&path, &json)?;
        tracing::info!(path = %path.display(), "dry-run submission recorded");

        let title = payload
            .values_for("title")
            .first()
            .map(|t| t.to_string())
            .unwrap_or_default();
        Ok(Property {
            id,
            title,
            slug: None,
            status: Some("pending".into()),
            created_at: Some(Utc::now()),
        })
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), std::io::Error> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

use std::path::PathBuf;

use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};

use super::Lead;

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("failed to encode lead: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to store lead: {0}")]
    Io(#[from] std::io::Error),
}

/// Where submitted leads go.
#[derive(Debug)]
pub enum LeadTransport {
    /// Emit a `tracing` event on target `lead`.
    Log,
    /// Append one JSON object per line.
    Jsonl(JsonlStore),
}

impl LeadTransport {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => LeadTransport::Jsonl(JsonlStore::new(path)),
            None => LeadTransport::Log,
        }
    }

    pub async fn deliver(&self, lead: &Lead) -> Result<(), LeadError> {
        match self {
            LeadTransport::Log => {
                let payload = serde_json::to_string(lead)?;
                tracing::info!(target: "lead", kind = lead.kind_name(), "{payload}");
                Ok(())
            }
            LeadTransport::Jsonl(store) => store.append(lead).await,
        }
    }
}

#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
    // serializes appends so lines never interleave
    lock: Mutex<()>,
}

impl JsonlStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn append(&self, lead: &Lead) -> Result<(), LeadError> {
        let mut line = serde_json::to_vec(lead)?;
        line.push(b'\n');

        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::{form::tests::valid_referral, ContactForm, LeadKind};
    use tempfile::TempDir;

    #[tokio::test]
    async fn jsonl_appends_one_line_per_lead() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("leads/leads.jsonl");
        let transport = LeadTransport::from_path(Some(path.clone()));

        transport
            .deliver(&Lead::new(LeadKind::Referral(valid_referral())))
            .await
            .unwrap();
        transport
            .deliver(&Lead::new(LeadKind::Contact(ContactForm {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: String::new(),
                message: "Hello".to_string(),
            })))
            .await
            .unwrap();

        let written = fs::read_to_string(&path).await.unwrap();
        let lines: Vec<serde_json::Value> = written
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["kind"], "referral");
        assert_eq!(lines[0]["clientEmail"], "jane@acme.io");
        assert_eq!(lines[1]["kind"], "contact");
        assert!(lines[1]["received_at"].is_string());
    }

    #[tokio::test]
    async fn log_transport_always_succeeds() {
        let transport = LeadTransport::from_path(None);
        assert!(matches!(transport, LeadTransport::Log));
        transport
            .deliver(&Lead::new(LeadKind::Referral(valid_referral())))
            .await
            .unwrap();
    }
}

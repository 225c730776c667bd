use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::answers::AnswerSet;
use crate::models::submission::Submission;

/// Append-only log of validated quiz submissions.
///
/// Rows live in memory and are mirrored to a flat JSON file on every
/// append, the same layout the rest of the marketplace uses for its
/// collections. Submissions are immutable; there is no update or delete.
/// The file write happens under the write lock, which serializes
/// concurrent appends.
pub struct SubmissionStore {
    path: Option<PathBuf>,
    rows: RwLock<Vec<Submission>>,
}

impl SubmissionStore {
    /// Opens the log at `path`, loading any existing rows. A missing file
    /// starts an empty log; malformed JSON aborts startup.
    pub async fn open(path: PathBuf) -> anyhow::Result<Self> {
        let rows = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("reading submission log from {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("reading submission log from {}", path.display())
                })
            }
        };
        Ok(Self {
            path: Some(path),
            rows: RwLock::new(rows),
        })
    }

    /// A log that is never written to disk. Used by tests.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Appends a submission for `user_id` and returns its redemption token,
    /// a UUIDv4 drawn from the OS RNG.
    pub async fn create(&self, user_id: &str, answers: AnswerSet) -> AppResult<String> {
        let token = Uuid::new_v4().simple().to_string();
        let submission = Submission {
            user_id: user_id.to_string(),
            token: token.clone(),
            answers,
            created_at: Utc::now(),
        };

        let mut rows = self.rows.write().await;
        rows.push(submission);
        if let Some(path) = &self.path {
            let bytes = serde_json::to_vec_pretty(&*rows)?;
            tokio::fs::write(path, bytes).await?;
        }
        Ok(token)
    }

    /// Looks up a submission by owner and token. Tokens are capabilities
    /// scoped to the submitting user; another user's token does not
    /// resolve. Redemption does not consume the submission.
    pub async fn find(&self, user_id: &str, token: &str) -> Option<Submission> {
        let rows = self.rows.read().await;
        rows.iter()
            .find(|s| s.user_id == user_id && s.token == token)
            .cloned()
    }
}

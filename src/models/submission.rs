use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;

/// A validated quiz submission, immutable once appended to the log.
///
/// The token is an unguessable capability: redeeming it requires both the
/// token and the owning user's identity, and redemption does not consume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub user_id: String,
    pub token: String,
    pub answers: AnswerSet,
    pub created_at: DateTime<Utc>,
}

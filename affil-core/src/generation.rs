use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Processing,
    Ready,
}

/// Outcome of one script-generation call.
///
/// Generation is synchronous within the request: `Ready` means the script is
/// in hand, `Processing` is only produced by the simulated generator, which
/// returns no script at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub script: Option<String>,
    pub video_id: String,
    pub status: GenerationStatus,
}

/// Mints a fresh video token, unique per call.
pub fn new_video_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

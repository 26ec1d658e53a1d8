use thiserror::Error;

/// Failures at the edges of the core (decoding externally supplied tables).
///
/// The selection operations themselves never fail; see
/// [`SingleSelectGroup`](crate::models::group::SingleSelectGroup).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

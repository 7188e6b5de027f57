//! Progress reporting seam
//!
//! The library never prints; it reports through this trait and the binary
//! decides how to render.

use async_trait::async_trait;

/// Callback for session progress updates
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Informational step message
    async fn on_message(&self, message: &str);

    /// A repository left out of the selection
    async fn on_skip(&self, message: &str);

    /// Something the operator should notice, but the session continues
    async fn on_warning(&self, message: &str);

    /// A failure that was reported and absorbed
    async fn on_error(&self, message: &str);
}

use async_trait::async_trait;

use crate::message::{Message, MessageId, NewMessage};

use super::Result;

/// Repository for message operations.
///
/// Each method issues a single statement; implementations hold no
/// per-request state.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Creates the backing relation if it does not exist yet.
    ///
    /// Safe to call repeatedly. An existing relation is not checked for a
    /// compatible shape.
    async fn ensure_schema(&self) -> Result<()>;

    /// Lists every message, newest first (ties broken by descending id).
    async fn list_messages(&self) -> Result<Vec<Message>>;

    /// Inserts a message and returns it with its assigned id and timestamp.
    async fn create_message(&self, message: NewMessage) -> Result<Message>;

    /// Deletes a message by id.
    ///
    /// Returns [`super::RepositoryError::NotFound`] when no row matched.
    async fn delete_message(&self, id: MessageId) -> Result<()>;

    /// Round-trips to storage to confirm it is reachable.
    async fn ping(&self) -> Result<()>;
}

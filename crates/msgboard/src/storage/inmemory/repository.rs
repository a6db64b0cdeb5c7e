//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use msgboard_core::message::{sort_newest_first, Message, MessageId, NewMessage};
use msgboard_core::storage::{MessageRepository, RepositoryError, Result};

#[derive(Debug)]
struct Inner {
    messages: BTreeMap<MessageId, Message>,
    /// Next id to hand out. Ids are never reused, matching `SERIAL`.
    next_id: MessageId,
}

/// In-memory storage backend.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    inner: Arc<RwLock<Inner>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                messages: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

#[async_trait]
impl MessageRepository for InMemoryRepository {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn list_messages(&self) -> Result<Vec<Message>> {
        let inner = self.inner.read().await;
        let mut messages: Vec<Message> = inner.messages.values().cloned().collect();
        sort_newest_first(&mut messages);
        Ok(messages)
    }

    async fn create_message(&self, message: NewMessage) -> Result<Message> {
        let mut inner = self.inner.write().await;

        let id = inner.next_id;
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::QueryFailed("message id space exhausted".into()))?;

        let message = Message::new(id, message.into_content(), Utc::now().naive_utc());
        inner.messages.insert(id, message.clone());
        Ok(message)
    }

    async fn delete_message(&self, id: MessageId) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.messages.remove(&id).is_none() {
            return Err(RepositoryError::message_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

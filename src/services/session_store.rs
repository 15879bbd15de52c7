//! In-memory per-session state: the in-flight task marker used for duplicate
//! dispatch suppression, and the last generated artifact of each kind kept
//! around for PDF download.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::domain::{ContentKind, StoredContent};

#[derive(Default)]
struct SessionData {
    active_tasks: HashMap<ContentKind, Uuid>,
    artifacts: HashMap<ContentKind, StoredContent>,
}

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionData>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Task of this kind already running for the session, if any.
    pub async fn active_task(&self, session_id: &str, kind: ContentKind) -> Option<Uuid> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .and_then(|data| data.active_tasks.get(&kind))
            .copied()
    }

    pub async fn set_active_task(&self, session_id: &str, kind: ContentKind, task_id: Uuid) {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_default()
            .active_tasks
            .insert(kind, task_id);
    }

    /// Clear the in-flight marker, but only if it still points at the given
    /// task. A newer dispatch must not lose its own marker.
    pub async fn clear_active_task(&self, session_id: &str, kind: ContentKind, task_id: Uuid) {
        let mut sessions = self.sessions.write().await;
        if let Some(data) = sessions.get_mut(session_id) {
            if data.active_tasks.get(&kind) == Some(&task_id) {
                data.active_tasks.remove(&kind);
            }
        }
    }

    pub async fn store_content(&self, session_id: &str, kind: ContentKind, content: StoredContent) {
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(session_id.to_string())
            .or_default()
            .artifacts
            .insert(kind, content);
    }

    pub async fn content(&self, session_id: &str, kind: ContentKind) -> Option<StoredContent> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .and_then(|data| data.artifacts.get(&kind))
            .cloned()
    }
}

//! Background generation tasks: an in-memory registry plus dispatch onto the
//! tokio runtime. Tasks run to completion or failure; there is no
//! cancellation and no retry.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::domain::{ContentKind, GenerationTask, StoredContent, TaskStatus};
use crate::services::session_store::SessionStore;

/// What a finished generation hands back: the JSON payload for the poll
/// endpoint, and optionally the content to keep in the session for download.
pub struct TaskOutcome {
    pub result: serde_json::Value,
    pub content: Option<StoredContent>,
}

pub struct TaskService {
    tasks: Arc<RwLock<HashMap<Uuid, GenerationTask>>>,
    sessions: Arc<SessionStore>,
}

impl TaskService {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
            sessions,
        }
    }

    pub async fn get_task(&self, id: &Uuid) -> Option<GenerationTask> {
        let tasks = self.tasks.read().await;
        tasks.get(id).cloned()
    }

    /// Register a new task and run `work` on the runtime. On completion the
    /// outcome (or error) is written back to the registry, generated content
    /// is stored in the session, and the session's in-flight marker for this
    /// kind is cleared.
    pub async fn dispatch<F>(&self, kind: ContentKind, session_id: &str, work: F) -> Uuid
    where
        F: Future<Output = AppResult<TaskOutcome>> + Send + 'static,
    {
        let task = GenerationTask::new(kind, session_id);
        let task_id = task.id;

        {
            let mut tasks = self.tasks.write().await;
            tasks.insert(task_id, task);
        }
        self.sessions.set_active_task(session_id, kind, task_id).await;

        let tasks = Arc::clone(&self.tasks);
        let sessions = Arc::clone(&self.sessions);
        let session_id = session_id.to_string();

        tokio::spawn(async move {
            {
                let mut guard = tasks.write().await;
                if let Some(task) = guard.get_mut(&task_id) {
                    task.status = TaskStatus::Running;
                    task.started_at = Some(Utc::now());
                }
            }

            let outcome = work.await;

            match outcome {
                Ok(outcome) => {
                    if let Some(content) = outcome.content {
                        sessions.store_content(&session_id, kind, content).await;
                    }
                    let mut guard = tasks.write().await;
                    if let Some(task) = guard.get_mut(&task_id) {
                        task.status = TaskStatus::Completed;
                        task.result = Some(outcome.result);
                        task.completed_at = Some(Utc::now());
                    }
                }
                Err(err) => {
                    log::error!("{} generation task {} failed: {}", kind, task_id, err);
                    let mut guard = tasks.write().await;
                    if let Some(task) = guard.get_mut(&task_id) {
                        task.status = TaskStatus::Failed;
                        task.error_message = Some(err.to_string());
                        task.completed_at = Some(Utc::now());
                    }
                }
            }

            sessions.clear_active_task(&session_id, kind, task_id).await;
        });

        task_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use serde_json::json;
    use std::time::Duration;

    async fn wait_until_ready(service: &TaskService, id: Uuid) -> GenerationTask {
        for _ in 0..100 {
            if let Some(task) = service.get_task(&id).await {
                if task.is_ready() {
                    return task;
                }
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("task {} never completed", id);
    }

    #[actix_rt::test]
    async fn successful_task_records_result_and_stores_content() {
        let sessions = Arc::new(SessionStore::new());
        let service = TaskService::new(Arc::clone(&sessions));

        let id = service
            .dispatch(ContentKind::Tutorial, "s1", async {
                Ok(TaskOutcome {
                    result: json!({"tutorial": "body"}),
                    content: Some(StoredContent::Text {
                        body: "body".to_string(),
                        topic: "Graphs".to_string(),
                    }),
                })
            })
            .await;

        let task = wait_until_ready(&service, id).await;
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.result, Some(json!({"tutorial": "body"})));
        assert!(task.error_message.is_none());

        // content stored, in-flight marker cleared
        assert!(sessions.content("s1", ContentKind::Tutorial).await.is_some());
        assert!(sessions.active_task("s1", ContentKind::Tutorial).await.is_none());
    }

    #[actix_rt::test]
    async fn failed_task_records_error_and_clears_marker() {
        let sessions = Arc::new(SessionStore::new());
        let service = TaskService::new(Arc::clone(&sessions));

        let id = service
            .dispatch(ContentKind::Quiz, "s1", async {
                Err(AppError::EmptyGeneration("nothing parsed".to_string()))
            })
            .await;

        let task = wait_until_ready(&service, id).await;
        assert_eq!(task.status, TaskStatus::Failed);
        assert!(task
            .error_message
            .as_deref()
            .is_some_and(|msg| msg.contains("nothing parsed")));
        assert!(sessions.active_task("s1", ContentKind::Quiz).await.is_none());
    }

    #[actix_rt::test]
    async fn dispatch_sets_the_active_marker_immediately() {
        let sessions = Arc::new(SessionStore::new());
        let service = TaskService::new(Arc::clone(&sessions));

        let id = service
            .dispatch(ContentKind::Mcq, "s1", async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(TaskOutcome {
                    result: json!({}),
                    content: None,
                })
            })
            .await;

        assert_eq!(sessions.active_task("s1", ContentKind::Mcq).await, Some(id));
        wait_until_ready(&service, id).await;
    }

    #[actix_rt::test]
    async fn unknown_task_is_none() {
        let sessions = Arc::new(SessionStore::new());
        let service = TaskService::new(sessions);
        assert!(service.get_task(&Uuid::new_v4()).await.is_none());
    }
}

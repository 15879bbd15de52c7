use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{GenerationTask, TaskStatus};

#[derive(Debug, Clone, Serialize)]
pub struct TaskAccepted {
    pub task_id: Uuid,
    pub message: String,
}

/// Poll response shape expected by the frontend: `ready`/`successful` flags
/// plus either the task result or the failure message.
#[derive(Debug, Clone, Serialize)]
pub struct TaskStatusResponse {
    pub ready: bool,
    pub successful: bool,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&GenerationTask> for TaskStatusResponse {
    fn from(task: &GenerationTask) -> Self {
        TaskStatusResponse {
            ready: task.is_ready(),
            successful: task.status == TaskStatus::Completed,
            status: task.status,
            result: task.result.clone(),
            error: task.error_message.clone(),
        }
    }
}

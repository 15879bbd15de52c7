use actix_web::{get, web, HttpResponse};
use uuid::Uuid;

use crate::{app_state::AppState, errors::AppError, models::dto::TaskStatusResponse};

#[get("/api/tasks/{id}")]
async fn get_task_status(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let task = state
        .task_service
        .get_task(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Task with id '{}' not found", id)))?;

    Ok(HttpResponse::Ok().json(TaskStatusResponse::from(&task)))
}

//! Generation endpoints. Each one validates its request, resolves the
//! caller's session, suppresses duplicate dispatches of the same content
//! kind, and queues a background task whose id the client polls.

use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::session::{attach_session, ensure_session, SessionHandle},
    models::domain::{ContentKind, StoredContent},
    models::dto::{
        GenerateMcqRequest, GenerateQuizRequest, GenerateSummaryRequest, GenerateTutorialRequest,
        TaskAccepted,
    },
    services::TaskOutcome,
};

fn accepted(session: &SessionHandle, task_id: Uuid, message: impl Into<String>) -> HttpResponse {
    let mut builder = HttpResponse::Accepted();
    attach_session(&mut builder, session);
    builder.json(TaskAccepted {
        task_id,
        message: message.into(),
    })
}

#[post("/api/quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session = ensure_session(&req);
    if let Some(existing) = state
        .session_store
        .active_task(&session.id, ContentKind::Quiz)
        .await
    {
        return Ok(accepted(&session, existing, "Quiz generation already in progress"));
    }

    let service = Arc::clone(&state.quiz_service);
    let task_id = state
        .task_service
        .dispatch(ContentKind::Quiz, &session.id, async move {
            let quiz = service
                .generate_quiz(&request.topic, request.count, request.difficulty)
                .await?;
            let result = json!({"quiz": serde_json::to_value(&quiz)?, "topic": request.topic});
            // quiz results go back inline only; nothing is kept for download
            Ok(TaskOutcome { result, content: None })
        })
        .await;

    Ok(accepted(&session, task_id, "Quiz generation started"))
}

#[post("/api/mcq")]
async fn generate_mcqs(
    state: web::Data<AppState>,
    request: web::Json<GenerateMcqRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session = ensure_session(&req);
    if let Some(existing) = state
        .session_store
        .active_task(&session.id, ContentKind::Mcq)
        .await
    {
        return Ok(accepted(&session, existing, "MCQ generation already in progress"));
    }

    let service = Arc::clone(&state.mcq_service);
    let topic = request.topic.clone();
    let task_id = state
        .task_service
        .dispatch(ContentKind::Mcq, &session.id, async move {
            let mcqs = service
                .generate_mcqs(&topic, request.count, request.difficulty)
                .await?;
            let result = json!({"mcqs": serde_json::to_value(&mcqs)?, "title": topic});
            Ok(TaskOutcome {
                result,
                content: Some(StoredContent::Mcqs { items: mcqs, title: request.topic }),
            })
        })
        .await;

    Ok(accepted(&session, task_id, "MCQ generation started"))
}

#[post("/api/summary")]
async fn generate_summary(
    state: web::Data<AppState>,
    request: web::Json<GenerateSummaryRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session = ensure_session(&req);
    if let Some(existing) = state
        .session_store
        .active_task(&session.id, ContentKind::Summary)
        .await
    {
        return Ok(accepted(&session, existing, "Summary generation already in progress"));
    }

    let service = Arc::clone(&state.summary_service);
    let task_id = state
        .task_service
        .dispatch(ContentKind::Summary, &session.id, async move {
            let output = service
                .generate_summary(&request.text, request.summary_type, request.tone)
                .await?;
            let result = json!({"summary": output.summary_text, "topic": output.topic});
            Ok(TaskOutcome {
                result,
                content: Some(StoredContent::Text {
                    body: output.summary_text,
                    topic: output.topic,
                }),
            })
        })
        .await;

    Ok(accepted(&session, task_id, "Summary generation started"))
}

#[post("/api/tutorial")]
async fn generate_tutorial(
    state: web::Data<AppState>,
    request: web::Json<GenerateTutorialRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session = ensure_session(&req);
    if let Some(existing) = state
        .session_store
        .active_task(&session.id, ContentKind::Tutorial)
        .await
    {
        return Ok(accepted(&session, existing, "Tutorial generation already in progress"));
    }

    let service = Arc::clone(&state.tutorial_service);
    let topic = request.topic.clone();
    let task_id = state
        .task_service
        .dispatch(ContentKind::Tutorial, &session.id, async move {
            let tutorial = service.generate_tutorial(&topic, request.depth).await?;
            let result = json!({"tutorial": tutorial, "topic": topic});
            Ok(TaskOutcome {
                result,
                content: Some(StoredContent::Text { body: tutorial, topic }),
            })
        })
        .await;

    Ok(accepted(&session, task_id, "Tutorial generation started"))
}

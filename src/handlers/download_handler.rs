use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::session::ensure_session,
    models::domain::{ContentKind, StoredContent},
    pdf::{render_mcq_pdf, render_summary_pdf, render_tutorial_pdf},
};

/// Render the session's last generated content of the given kind to PDF.
/// Rendering happens on demand; only the source content is kept in memory.
#[get("/api/{kind}/download")]
async fn download_pdf(
    state: web::Data<AppState>,
    kind: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let kind: ContentKind = kind
        .parse()
        .map_err(|_| AppError::NotFound(format!("Unknown content kind '{}'", kind)))?;

    if kind == ContentKind::Quiz {
        return Err(AppError::ValidationError(
            "Quiz results are returned inline and have no PDF download".to_string(),
        ));
    }

    let session = ensure_session(&req);
    let content = state
        .session_store
        .content(&session.id, kind)
        .await
        .ok_or_else(|| {
            AppError::ValidationError(format!(
                "No {} generated yet. Please generate one first.",
                kind
            ))
        })?;

    let (bytes, filename) = render_stored(&content, kind)?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(bytes))
}

fn render_stored(content: &StoredContent, kind: ContentKind) -> Result<(Vec<u8>, String), AppError> {
    match (content, kind) {
        (StoredContent::Mcqs { items, title }, ContentKind::Mcq) => {
            let bytes = render_mcq_pdf(items, title)?;
            Ok((bytes, format!("{}_MCQs.pdf", filename_stem(title))))
        }
        (StoredContent::Text { body, topic }, ContentKind::Summary) => {
            let bytes = render_summary_pdf(body, topic)?;
            Ok((bytes, format!("{}_Summary.pdf", filename_stem(topic))))
        }
        (StoredContent::Text { body, topic }, ContentKind::Tutorial) => {
            let bytes = render_tutorial_pdf(body, topic)?;
            Ok((bytes, format!("{}_Tutorial.pdf", filename_stem(topic))))
        }
        _ => Err(AppError::InternalError(format!(
            "stored content does not match kind '{}'",
            kind
        ))),
    }
}

/// Topic strings go into a Content-Disposition filename; keep them tame.
fn filename_stem(topic: &str) -> String {
    let stem: String = topic
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        "document".to_string()
    } else {
        stem
    }
}

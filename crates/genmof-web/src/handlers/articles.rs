//! Article uploads for the current session.

use axum::{
    extract::{Multipart, State},
    response::Redirect,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, info, warn};

use genmof_common::error::{ApiError, GenmofError};
use genmof_core::articles::guess_mime_type;
use genmof_core::ArticleInfo;

use crate::session::session_id;
use crate::state::SharedState;

/// POST /articles — record every uploaded file part, then go back to the playground.
pub async fn upload_articles(
    State(state): State<SharedState>,
    jar: CookieJar,
    mut multipart: Multipart,
) -> Result<(CookieJar, Redirect), ApiError> {
    let (jar, session) = session_id(jar);
    let mut added = 0usize;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| GenmofError::Upload(e.to_string()))?
    {
        // Browsers send an empty part when no file was picked.
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };
        if !state.config.uploads.accepts(&file_name) {
            warn!("Skipping upload with unsupported type: {}", file_name);
            continue;
        }
        let mime_type = field
            .content_type()
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| guess_mime_type(&file_name).to_string());

        // Only the length is recorded; chunks are dropped as they arrive.
        let mut size = 0u64;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| GenmofError::Upload(e.to_string()))?
        {
            size += chunk.len() as u64;
        }

        if state.add_article(session, &file_name, size, &mime_type).await {
            added += 1;
            debug!("Attached {} ({} bytes) to session {}", file_name, size, session);
        } else {
            debug!("Already attached: {} ({} bytes)", file_name, size);
        }
    }

    info!("Session {}: {} new article(s) attached", session, added);
    Ok((jar, Redirect::to("/")))
}

/// GET /api/articles — the current session's article list.
pub async fn api_articles(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> (CookieJar, Json<Vec<ArticleInfo>>) {
    let (jar, session) = session_id(jar);
    let articles = state.articles(session).await;
    (jar, Json(articles))
}

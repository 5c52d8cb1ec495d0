// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::CreateCommentCommand, dto::CommentSubmission, error::ApplicationError,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, body::Bytes};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentCreatedResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/createComment",
    request_body = CommentSubmission,
    responses(
        (status = 200, description = "Comment stored for moderation.", body = CommentCreatedResponse),
        (status = 400, description = "A field failed validation.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many submissions from this client."),
        (status = 500, description = "The content store rejected the write.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    body: Bytes,
) -> HttpResult<Json<CommentCreatedResponse>> {
    // Browsers posting with `fetch` often omit the JSON content type, so the
    // body is decoded regardless of the declared media type.
    let payload: CommentSubmission = serde_json::from_slice(&body).map_err(|err| {
        HttpError::from_error(ApplicationError::validation(format!(
            "invalid comment payload: {err}"
        )))
    })?;

    state
        .services
        .comment_commands
        .create_comment(CreateCommentCommand::from(payload))
        .await
        .into_http()?;

    Ok(Json(CommentCreatedResponse {
        message: "Comment submitted".into(),
    }))
}

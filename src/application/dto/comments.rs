use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of a comment submission: `{_id, name, email, comment}` where
/// `_id` is the article the comment belongs to. Missing fields deserialize
/// as empty strings and are rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CommentSubmission {
    #[serde(rename = "_id")]
    pub article_id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
}

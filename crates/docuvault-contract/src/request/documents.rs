//! Document request types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::ValidationErrors;

use super::validations::{optional_string_seq, require_text, require_uuid};

/// Untrusted payload for creating a new document.
///
/// Fields are captured leniently so that a single validation pass can report
/// missing and wrong-typed fields together; only a structurally un-decodable
/// body is rejected by the deserializer. Unknown fields are dropped.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    /// Identifier of the team that will own the document.
    #[serde(default)]
    pub team_id: Option<Value>,
    /// Display title of the document.
    #[serde(default)]
    pub title: Option<Value>,
    /// Initial document content.
    #[serde(default)]
    pub content: Option<Value>,
    /// Tags for document classification.
    #[serde(default)]
    pub tags: Option<Value>,
}

impl CreateDocumentRequest {
    /// Validates this payload into a [`CreateDocument`] command.
    ///
    /// All four fields are checked independently in one pass; on failure the
    /// returned [`ValidationErrors`] enumerates every violated field under
    /// its wire name, each entry carrying a [`ConstraintKind`] code and a
    /// human-readable message.
    ///
    /// [`ConstraintKind`]: super::ConstraintKind
    pub fn into_command(self) -> Result<CreateDocument, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let team_id = match require_uuid(self.team_id.as_ref()) {
            Ok(team_id) => Some(team_id),
            Err(error) => {
                errors.add("teamId".into(), error);
                None
            }
        };

        let title = match require_text(self.title.as_ref()) {
            Ok(title) => Some(title),
            Err(error) => {
                errors.add("title".into(), error);
                None
            }
        };

        let content = match require_text(self.content.as_ref()) {
            Ok(content) => Some(content),
            Err(error) => {
                errors.add("content".into(), error);
                None
            }
        };

        let tags = match optional_string_seq(self.tags.as_ref()) {
            Ok(tags) => Some(tags),
            Err(element_errors) => {
                for error in element_errors {
                    errors.add("tags".into(), error);
                }
                None
            }
        };

        match (team_id, title, content, tags) {
            (Some(team_id), Some(title), Some(content), Some(tags)) => Ok(CreateDocument {
                team_id,
                title,
                content,
                tags,
            }),
            _ => Err(errors),
        }
    }
}

/// Validated command for creating a new document.
///
/// Every field is guaranteed to satisfy the create-document contract; the
/// command is handed to the document creation service as-is.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocument {
    /// Identifier of the team that will own the document.
    pub team_id: Uuid,
    /// Display title of the document.
    pub title: String,
    /// Initial document content.
    pub content: String,
    /// Tags for document classification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

const DEFAULT_MAX_NAME_CHARS: usize = 255;
const DEFAULT_MAX_NUMBER_CHARS: usize = 20;

/// Length limits applied to program names and numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    max_name_chars: usize,
    max_number_chars: usize,
}

impl ValidationPolicy {
    pub fn new(max_name_chars: usize, max_number_chars: usize) -> Self {
        Self {
            max_name_chars: if max_name_chars == 0 {
                DEFAULT_MAX_NAME_CHARS
            } else {
                max_name_chars
            },
            max_number_chars: if max_number_chars == 0 {
                DEFAULT_MAX_NUMBER_CHARS
            } else {
                max_number_chars
            },
        }
    }

    pub fn max_name_chars(&self) -> usize {
        self.max_name_chars
    }

    pub fn max_number_chars(&self) -> usize {
        self.max_number_chars
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NAME_CHARS, DEFAULT_MAX_NUMBER_CHARS)
    }
}

/// Validation failures raised for program names and numbers. Messages are
/// written for direct display next to the offending form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("a value is required")]
    Required,
    #[error("value exceeds the {max} character limit")]
    TooLong { max: usize },
    #[error("program numbers may only contain letters, digits, and dots")]
    InvalidFormat,
    #[error("program number must start with \"{expected}.\"")]
    WrongPrefix { expected: String },
    #[error("program number needs a suffix after \"{prefix}.\"")]
    MissingSuffix { prefix: String },
}

/// A program name is anything non-blank within the length limit. Escaping
/// for storage or display is the caller's concern, so no character class is
/// enforced here.
pub fn validate_program_name(
    name: Option<&str>,
    policy: &ValidationPolicy,
) -> Result<(), ValidationError> {
    let trimmed = name.unwrap_or("").trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    if trimmed.chars().count() > policy.max_name_chars {
        return Err(ValidationError::TooLong {
            max: policy.max_name_chars,
        });
    }

    Ok(())
}

/// Program numbers are optional, but a present number must sit under the
/// initiative's prefix: `<prefix>.<suffix>` with a non-empty suffix drawn
/// from letters, digits, and dots.
///
/// The format check runs first so the prefix and suffix comparisons only
/// ever see a clean character set. The prefix is compared as a literal
/// string; a prefix of "1.1" does not admit "1X1.A".
pub fn validate_program_number(
    candidate: Option<&str>,
    initiative_prefix: Option<&str>,
    policy: &ValidationPolicy,
) -> Result<(), ValidationError> {
    let candidate = candidate.unwrap_or("");
    if candidate.is_empty() {
        return Ok(());
    }

    if !candidate
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.')
    {
        return Err(ValidationError::InvalidFormat);
    }

    let prefix = initiative_prefix.unwrap_or("").trim();
    if !prefix.is_empty() {
        let required = format!("{prefix}.");
        if candidate == prefix || candidate == required {
            return Err(ValidationError::MissingSuffix {
                prefix: prefix.to_string(),
            });
        }
        if !candidate.starts_with(&required) {
            return Err(ValidationError::WrongPrefix {
                expected: prefix.to_string(),
            });
        }
    }

    if candidate.chars().count() > policy.max_number_chars {
        return Err(ValidationError::TooLong {
            max: policy.max_number_chars,
        });
    }

    Ok(())
}

/// Per-field outcome in the shape the form layer renders: a flag plus a
/// display message, empty on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    pub valid: bool,
    pub message: String,
}

impl FieldValidation {
    pub fn from_result(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                message: String::new(),
            },
            Err(error) => Self {
                valid: false,
                message: error.to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProgramValidationRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub program_number: Option<String>,
    #[serde(default)]
    pub initiative_prefix: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgramValidationResponse {
    pub valid: bool,
    pub name: FieldValidation,
    pub program_number: FieldValidation,
}

/// Router builder exposing the program validation endpoint.
pub fn validation_router(policy: Arc<ValidationPolicy>) -> Router {
    Router::new()
        .route("/api/v1/programs/validate", post(validate_handler))
        .with_state(policy)
}

pub(crate) async fn validate_handler(
    State(policy): State<Arc<ValidationPolicy>>,
    Json(request): Json<ProgramValidationRequest>,
) -> Json<ProgramValidationResponse> {
    let name = FieldValidation::from_result(validate_program_name(
        request.name.as_deref(),
        &policy,
    ));
    let program_number = FieldValidation::from_result(validate_program_number(
        request.program_number.as_deref(),
        request.initiative_prefix.as_deref(),
        &policy,
    ));

    Json(ProgramValidationResponse {
        valid: name.valid && program_number.valid,
        name,
        program_number,
    })
}

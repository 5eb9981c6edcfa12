use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json` extractor whose rejections use the API error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                let message = err.body_text();
                match missing_field(&message) {
                    Some(field) => {
                        AppError::Validation(format!("Missing required field: {field}"))
                    }
                    None => AppError::Validation(format!("Invalid request body: {message}")),
                }
            }
            JsonRejection::JsonSyntaxError(err) => {
                AppError::Validation(format!("JSON syntax error: {}", err.body_text()))
            }
            JsonRejection::MissingJsonContentType(_) => {
                AppError::Validation("Missing `Content-Type: application/json` header".to_string())
            }
            JsonRejection::BytesRejection(_) => {
                AppError::Internal(anyhow::anyhow!("Failed to read request body"))
            }
            other => AppError::Validation(other.body_text()),
        }
    }
}

fn missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}

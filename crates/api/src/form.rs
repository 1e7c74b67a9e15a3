//! Extraction of the `/add` request body.
//!
//! The add form may arrive URL-encoded or as `multipart/form-data`; both
//! produce the same [`Submission`]. Only the first non-empty file under
//! [`IMAGE_FIELD`] is kept. Any other content type is read as an empty form.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::Form;

use crate::error::AppError;

/// Multipart field name carrying the optional image.
pub const IMAGE_FIELD: &str = "image";

/// A file part received with the form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Filename as sent by the client. Only its extension is kept.
    pub original_name: String,
    pub data: Bytes,
}

/// Parsed add-form body: text fields plus at most one image.
#[derive(Debug, Default)]
pub struct Submission {
    pub fields: HashMap<String, String>,
    pub image: Option<UploadedFile>,
}

impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    /// Bodies that are neither multipart nor URL-encoded carry no fields;
    /// they yield an empty submission rather than a rejection.
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Multipart => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                read_multipart(multipart).await
            }
            BodyKind::UrlEncoded => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                Ok(Submission {
                    fields,
                    image: None,
                })
            }
            BodyKind::Other => {
                tracing::debug!("Add request without form body, storing empty bookmark");
                Ok(Submission::default())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Multipart,
    UrlEncoded,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    if content_type.starts_with("multipart/form-data") {
        BodyKind::Multipart
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::UrlEncoded
    } else {
        BodyKind::Other
    }
}

/// Map an extractor failure onto an [`AppError`], keeping the body limit distinct.
fn rejected(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest(message)
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<Submission, AppError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| rejected(e.status(), e.body_text()))?
    {
        let name = field.name().unwrap_or("").to_string();

        match field.file_name().map(str::to_string) {
            // File parts: browsers send an empty filename when nothing was chosen.
            Some(file_name) => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;

                if name == IMAGE_FIELD && !file_name.is_empty() && submission.image.is_none() {
                    submission.image = Some(UploadedFile {
                        original_name: file_name,
                        data,
                    });
                }
            }
            None => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| rejected(e.status(), e.body_text()))?;
                submission.fields.insert(name, text);
            }
        }
    }

    Ok(submission)
}

//! Handlers for the public submission forms.
//!
//! Forms are validated here; the write service assumes clean input. A body
//! that cannot be read is reported the same way as one that fails its field
//! rules. Once a form passes validation the visitor always gets an
//! acknowledgement, even if neither backend kept the inquiry.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sriweb_core::forms::{ContactForm, Inquiry, NewsletterForm, ServiceInquiryForm};
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Acknowledgement returned for every accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: &'static str,
    pub stored_in_primary: bool,
}

async fn submit(state: &AppState, inquiry: Inquiry) -> Json<DataResponse<SubmissionReceipt>> {
    let outcome = state.content.writer.submit_inquiry(&inquiry).await;
    Json(DataResponse {
        data: SubmissionReceipt {
            success: true,
            message: outcome.acknowledgement(),
            stored_in_primary: outcome.stored_in_primary,
        },
    })
}

/// POST /api/v1/contact
pub async fn contact(
    State(state): State<AppState>,
    body: Result<Json<ContactForm>, JsonRejection>,
) -> AppResult<Json<DataResponse<SubmissionReceipt>>> {
    let Json(form) = body?;
    form.validate()?;
    Ok(submit(&state, form.into()).await)
}

/// POST /api/v1/service-inquiry
pub async fn service_inquiry(
    State(state): State<AppState>,
    body: Result<Json<ServiceInquiryForm>, JsonRejection>,
) -> AppResult<Json<DataResponse<SubmissionReceipt>>> {
    let Json(form) = body?;
    form.validate()?;
    Ok(submit(&state, form.into()).await)
}

/// POST /api/v1/newsletter
pub async fn newsletter(
    State(state): State<AppState>,
    body: Result<Json<NewsletterForm>, JsonRejection>,
) -> AppResult<Json<DataResponse<SubmissionReceipt>>> {
    let Json(form) = body?;
    form.validate()?;
    Ok(submit(&state, form.into()).await)
}

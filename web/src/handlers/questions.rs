//! Question handlers
//!
//! The ask form, its submission, and the confirmation page.

use axum::{
    extract::{rejection::FormRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::app::{SubmissionOutcome, SUBMITTED_NOTICE};
use crate::auth::CsrfToken;
use crate::domain::entities::{FormErrors, SubmissionInput};
use crate::error::AppError;
use crate::views::{render_ask_form, render_success, AskFormView};
use crate::AppState;

/// Query value that asks the confirmation page to show the submitted notice
pub const SUBMITTED_NOTICE_KEY: &str = "submitted";

/// Where an accepted submission is redirected
pub const SUCCESS_LOCATION: &str = "/Questions/Success?notice=submitted";

/// Form body for POST /Questions/Ask
#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub csrf_token: String,
    #[serde(flatten)]
    pub input: SubmissionInput,
}

/// Query string for GET /Questions/Success
#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    pub notice: Option<String>,
}

/// GET /Questions/Ask
///
/// Render a blank form and (re)issue the anti-forgery cookie.
pub async fn show_ask_form(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = state.csrf.token_for(&headers);
    let input = state.submission_service.blank_form();

    form_response(&state, &token, &input, &FormErrors::new())
}

/// POST /Questions/Ask
///
/// Redirects to the confirmation page when accepted; otherwise re-renders the
/// form with the submitted values and errors. Store failures also end here as a
/// re-rendered form, never as an error page.
pub async fn submit_question(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<AskForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;

    if !state.csrf.verify(&headers, &form.csrf_token) {
        return Err(AppError::Forbidden(
            "Anti-forgery token missing or invalid".to_string(),
        ));
    }

    match state.submission_service.submit(form.input).await {
        SubmissionOutcome::Accepted(question) => {
            tracing::debug!(question_id = %question.id, "Submission accepted");
            Ok((StatusCode::FOUND, [(header::LOCATION, SUCCESS_LOCATION)]).into_response())
        }
        SubmissionOutcome::Rejected(rejection) => {
            tracing::debug!(reason = ?rejection.reason, "Redisplaying form");
            let token = state.csrf.token_for(&headers);
            Ok(form_response(
                &state,
                &token,
                &rejection.input,
                &rejection.errors,
            ))
        }
    }
}

/// GET /Questions/Success
pub async fn show_success(Query(query): Query<SuccessQuery>) -> Html<String> {
    let notice = match query.notice.as_deref() {
        Some(SUBMITTED_NOTICE_KEY) => Some(SUBMITTED_NOTICE),
        _ => None,
    };

    Html(render_success(notice))
}

fn form_response(
    state: &AppState,
    token: &CsrfToken,
    input: &SubmissionInput,
    errors: &FormErrors,
) -> Response {
    let html = render_ask_form(&AskFormView {
        input,
        errors,
        variant: state.submission_service.variant(),
        csrf_token: &token.form_token,
    });

    ([(header::SET_COOKIE, state.csrf.cookie(token))], Html(html)).into_response()
}

//! Survey form and submission routes.

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use foster_db::repositories::{NewSubmission, SurveyRepository};
use foster_shared::AppError;

/// The survey form page.
const FORM_PAGE: &str = include_str!("../../assets/index.html");

/// Form fields as submitted by the survey page.
///
/// Every field is optional text; no range or format validation is applied
/// server-side. Coercion and validation happen later, during processing.
#[derive(Debug, Deserialize)]
pub struct SubmissionForm {
    /// Respondent age.
    pub age: Option<String>,
    /// Respondent gender label.
    pub gender: Option<String>,
    /// Total monthly income.
    pub total_income: Option<String>,
    /// Utilities spending.
    pub utilities_amount: Option<String>,
    /// Entertainment spending.
    pub entertainment_amount: Option<String>,
    /// School fees spending.
    pub school_fees_amount: Option<String>,
    /// Shopping spending.
    pub shopping_amount: Option<String>,
    /// Healthcare spending.
    pub healthcare_amount: Option<String>,
}

/// GET / - Serve the survey form page.
async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// POST / - Accept a form submission and append it to the record store.
///
/// Every submission is accepted as a new record; there is no deduplication.
/// A store failure is reported to the caller rather than silently dropping
/// the data.
async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SubmissionForm>,
) -> impl IntoResponse {
    let Some(db) = state.db else {
        return store_error(&AppError::Database(
            "record store not connected; check the store configuration".to_string(),
        ));
    };

    let submission = NewSubmission {
        age: form.age,
        gender: form.gender,
        total_income: form.total_income,
        expenses: json!({
            "utilities": form.utilities_amount,
            "entertainment": form.entertainment_amount,
            "school_fees": form.school_fees_amount,
            "shopping": form.shopping_amount,
            "healthcare": form.healthcare_amount,
        }),
    };

    let repo = SurveyRepository::new((*db).clone());
    match repo.insert(submission).await {
        Ok(saved) => {
            info!(id = %saved.id, "Survey response saved");
            Redirect::to("/thank-you").into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to save survey response");
            store_error(&AppError::Database(
                "error saving data to the record store".to_string(),
            ))
        }
    }
}

/// Store failures are reported to the caller, never silently dropped.
fn store_error(err: &AppError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// GET /thank-you - Static acknowledgment page.
async fn thank_you() -> &'static str {
    "Thank you for participating in the Foster Income Survey!"
}

/// Creates the survey routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(form_page).post(submit))
        .route("/thank-you", get(thank_you))
}

use axum::http::StatusCode;

use crate::api::problem::{Problem, ProblemResponse};
use crate::contract::error::ContactsError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
    request_id: Option<&str>,
) -> ProblemResponse {
    let problem = Problem::new(status, title, detail)
        .with_type(format!("https://errors.example.com/{}", code))
        .with_code(code)
        .with_instance(instance);

    let problem = match request_id {
        Some(id) => problem.with_request_id(id),
        None => problem,
    };

    ProblemResponse(problem)
}

/// Map contacts errors to RFC9457 problems; this is the error boundary of the
/// contacts routes.
pub fn map_contacts_error(
    e: &ContactsError,
    instance: &str,
    request_id: Option<&str>,
) -> ProblemResponse {
    match e {
        ContactsError::NotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "CONTACTS_NOT_FOUND",
            "Contact not found",
            format!("Contact with id {} was not found", id),
            instance,
            request_id,
        ),
        ContactsError::Internal => from_parts(
            StatusCode::INTERNAL_SERVER_ERROR,
            "CONTACTS_INTERNAL",
            "Internal error",
            "An internal error occurred",
            instance,
            request_id,
        ),
    }
}

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::contacts::validation::{normalize_plan_interest, validate_email};
use crate::errors::AppError;
use crate::models::contact::NewContact;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub plan_interest: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// POST /api/v1/contacts
///
/// Validates the address and records it with the plan the visitor came from.
/// Any store failure becomes one generic retry-later error.
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let email = validate_email(&request.email)?;
    let contact = NewContact {
        email,
        plan_interest: normalize_plan_interest(request.plan_interest),
    };
    let plan = contact.plan_interest.clone();

    match state.contacts.insert(contact).await {
        Ok(row) => {
            info!(contact_id = row.id, plan = ?plan, "Contact recorded");
            Ok((
                StatusCode::CREATED,
                Json(ContactResponse {
                    status: "subscribed",
                    message: "You're on the list! We'll notify you as soon as Chumzee is ready.",
                }),
            ))
        }
        Err(e) => {
            error!("Contact insert failed: {e}");
            Err(AppError::ContactSubmission)
        }
    }
}

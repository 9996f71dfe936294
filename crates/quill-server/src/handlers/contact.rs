//! Contact form endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::ServerError;
use crate::state::AppState;

/// Contact form submission payload.
#[derive(Debug, Deserialize)]
pub(crate) struct ContactForm {
    /// Submitter's name.
    name: String,
    /// Submitter's email (becomes Reply-To).
    email: String,
    /// Message body.
    message: String,
}

/// Handle POST /contact.
pub(crate) async fn submit(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactForm>,
) -> Result<impl IntoResponse, ServerError> {
    for (value, field) in [
        (&form.name, "name"),
        (&form.email, "email"),
        (&form.message, "message"),
    ] {
        if value.trim().is_empty() {
            return Err(ServerError::Validation(format!("{field} cannot be empty")));
        }
    }

    let Some(mailer) = &state.mailer else {
        return Err(ServerError::MailNotConfigured);
    };

    mailer
        .send_contact(&form.name, &form.email, &form.message)
        .await?;

    info!("Contact form relayed for {}", form.email);
    Ok(Json(json!({"sent": true})))
}

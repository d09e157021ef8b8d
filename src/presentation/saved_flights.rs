// HTTP handlers for the saved flight list
use crate::domain::saved_flight::SavedFlightDraft;
use crate::presentation::app_state::AppState;
use crate::presentation::pages;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

const SAVED: &str = "Flight saved successfully!";
const SAVE_FAILED: &str = "Error saving flight";

#[derive(Debug, Deserialize)]
pub struct SavedListQuery {
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuickAddRequest {
    pub callsign: Option<String>,
    pub notes: Option<String>,
    pub priority: Option<String>,
}

/// Quick-add body, accepted either as a JSON document or as a url-encoded form.
pub struct QuickAddBody(pub QuickAddRequest);

#[async_trait]
impl<S> FromRequest<S> for QuickAddBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(body) = Json::<QuickAddRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(body))
        } else {
            let Form(body) = Form::<QuickAddRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(body))
        }
    }
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

fn redirect_with_message(message: &str) -> Redirect {
    Redirect::to(&format!("/saved?message={}", urlencoding::encode(message)))
}

/// Saved flights, newest first
pub async fn list_saved(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SavedListQuery>,
) -> Html<String> {
    match state.saved_flight_service.list().await {
        Ok(flights) => pages::saved_flights(&flights, query.message.as_deref()),
        Err(e) => {
            tracing::error!("Error loading saved flights: {:#}", e);
            pages::saved_flights(&[], Some("Error loading flights"))
        }
    }
}

pub async fn add_form(Query(prefill): Query<SavedFlightDraft>) -> Html<String> {
    pages::add_flight_form(&prefill)
}

pub async fn add_saved(
    State(state): State<Arc<AppState>>,
    Form(draft): Form<SavedFlightDraft>,
) -> Redirect {
    match state.saved_flight_service.add(draft).await {
        Ok(saved) => {
            tracing::info!("Saved flight {} ({})", saved.flight.callsign, saved.id);
            redirect_with_message(SAVED)
        }
        Err(e) => {
            tracing::error!("Error saving flight: {:#}", e);
            redirect_with_message(SAVE_FAILED)
        }
    }
}

/// Save from a callsign alone; route and airline come from the flight lookup.
pub async fn quick_add(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    QuickAddBody(body): QuickAddBody,
) -> Response {
    let respond_json = wants_json(&headers);
    let result = state
        .saved_flight_service
        .quick_add(body.callsign, body.notes, body.priority)
        .await;

    match (result, respond_json) {
        (Ok(saved), true) => {
            tracing::info!("Quick-added flight {} ({})", saved.flight.callsign, saved.id);
            Json(json!({"success": true, "message": "Flight saved!"})).into_response()
        }
        (Ok(saved), false) => {
            tracing::info!("Quick-added flight {} ({})", saved.flight.callsign, saved.id);
            redirect_with_message(SAVED).into_response()
        }
        (Err(e), true) => {
            tracing::error!("Error quick-adding flight: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "message": SAVE_FAILED})),
            )
                .into_response()
        }
        (Err(e), false) => {
            tracing::error!("Error quick-adding flight: {:#}", e);
            redirect_with_message(SAVE_FAILED).into_response()
        }
    }
}

pub async fn delete_saved(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Redirect {
    match state.saved_flight_service.delete(&id).await {
        Ok(true) => redirect_with_message("Flight deleted"),
        Ok(false) => {
            tracing::warn!("Delete requested for unknown saved flight {}", id);
            redirect_with_message("Flight not found")
        }
        Err(e) => {
            tracing::error!("Error deleting saved flight {}: {:#}", id, e);
            redirect_with_message("Error deleting flight")
        }
    }
}

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{cache::ResponseSlot, config::Config, weather::{WeatherClient, WeatherError}};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather_client: Arc<WeatherClient>,
    pub response_slot: Arc<ResponseSlot>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceForm {
    // A missing field behaves the same as an empty one.
    #[serde(default)]
    pub place: String,
}

// Route handlers
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, &'static str)> {
    match tokio::fs::read_to_string(&state.config.home_template_path).await {
        Ok(page) => Ok(Html(page)),
        Err(e) => {
            tracing::error!("Failed to load template: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Failed to load template"))
        }
    }
}

pub async fn submit_place(
    State(state): State<AppState>,
    Form(form): Form<PlaceForm>,
) -> Response {
    if form.place.is_empty() {
        return (StatusCode::BAD_REQUEST, "Place cannot be empty").into_response();
    }

    match state.weather_client.current(&form.place).await {
        Ok(payload) => {
            state.response_slot.store(payload);
            Redirect::to("/showResponse").into_response()
        }
        Err(WeatherError::UpstreamStatus(code)) => {
            let status =
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "Weather API returned an error").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch weather data: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch weather data").into_response()
        }
    }
}

pub async fn show_response(State(state): State<AppState>) -> impl IntoResponse {
    let content = state.response_slot.load();
    ([(header::CONTENT_TYPE, "application/json")], content)
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home).post(submit_place))
        .route("/showResponse", get(show_response))
        .with_state(state)
}

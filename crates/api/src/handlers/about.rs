use crate::{dto::AboutResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::instrument;

#[instrument(skip(state), name = "api_get_about")]
pub async fn get_about(State(state): State<AppState>) -> Json<AboutResponse> {
    Json(state.get_about.execute().into())
}

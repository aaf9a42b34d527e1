use crate::{
    state::AppState,
    utils::{domain_error_response, json_body},
};
use axum::{extract::State, http::StatusCode, response::Response};
use tracing::instrument;

#[instrument(skip(state), name = "api_list_databases")]
pub async fn list_databases(
    State(state): State<AppState>,
) -> Result<Response, (StatusCode, String)> {
    state
        .list_databases
        .execute()
        .await
        .map(json_body)
        .map_err(domain_error_response)
}

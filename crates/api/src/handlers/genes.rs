use crate::{
    state::AppState,
    utils::{domain_error_response, json_body, EMPTY_OBJECT},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use genes_domain::{DomainError, FindQuery, SearchQuery};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// `GET /find`: genes overlapping a location.
///
/// A location that cannot be parsed yields `{}` with 200. A track selector
/// that is not a single directory name is answered like a missing track.
#[instrument(skip(state, params), name = "api_find_genes")]
pub async fn find_genes(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, (StatusCode, String)> {
    let query = match FindQuery::from_params(&params, &state.defaults) {
        Ok(query) => query,
        Err(DomainError::InvalidLocation(reason)) => {
            debug!(reason = %reason, "Unparseable location");
            return Ok(json_body(EMPTY_OBJECT));
        }
        Err(e) => return Err(domain_error_response(e)),
    };

    state
        .find_genes
        .execute(&query)
        .await
        .map(json_body)
        .map_err(domain_error_response)
}

/// `GET /search`: genes matching an identifier or symbol.
#[instrument(skip(state, params), name = "api_search_genes")]
pub async fn search_genes(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, (StatusCode, String)> {
    let query = SearchQuery::from_params(&params, &state.defaults).map_err(domain_error_response)?;

    state
        .search_genes
        .execute(&query)
        .await
        .map(json_body)
        .map_err(domain_error_response)
}

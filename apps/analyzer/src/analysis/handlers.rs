//! Axum route handlers for the text analysis API.
//!
//! These operate on already-extracted text, so the page layer can re-run a search
//! or switch the target role without uploading the PDF again.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::keywords::{extract_keywords, KeywordCount};
use crate::analysis::profiles::{find_profile, role_names, RoleProfile};
use crate::analysis::role_match::{compare_roles, score_role, RoleComparison, RoleMatch};
use crate::analysis::search::{smart_search, SearchHit};
use crate::analysis::DocumentType;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<KeywordCount>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub text: String,
    pub terms: Vec<String>,
    #[serde(default)]
    pub doc_type: DocumentType,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct RoleMatchRequest {
    pub text: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub text: String,
    pub roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub comparison: Vec<RoleComparison>,
}

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<RoleListResponse> {
    Json(RoleListResponse {
        roles: role_names(),
    })
}

/// GET /api/v1/roles/:name
pub async fn handle_get_role(Path(name): Path<String>) -> Result<Json<RoleProfile>, AppError> {
    find_profile(&name)
        .copied()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unknown role '{name}'")))
}

/// POST /api/v1/analyze/keywords
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Json<KeywordsResponse> {
    let count = request.count.unwrap_or(state.config.default_keyword_count);
    Json(KeywordsResponse {
        keywords: extract_keywords(&request.text, count),
    })
}

/// POST /api/v1/analyze/search
///
/// An empty term list is not an error; it simply finds nothing.
pub async fn handle_search(Json(request): Json<SearchRequest>) -> Json<SearchResponse> {
    Json(SearchResponse {
        hits: smart_search(
            &request.text,
            &request.terms,
            request.doc_type.highlight_style(),
        ),
    })
}

/// POST /api/v1/analyze/role
pub async fn handle_role_match(
    Json(request): Json<RoleMatchRequest>,
) -> Result<Json<RoleMatch>, AppError> {
    score_role(&request.text, &request.role)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unknown role '{}'", request.role)))
}

/// POST /api/v1/analyze/compare
///
/// The first role is the primary one; at most two more are scored.
pub async fn handle_compare(
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    let (primary, others) = request
        .roles
        .split_first()
        .ok_or_else(|| AppError::Validation("roles cannot be empty".to_string()))?;

    Ok(Json(CompareResponse {
        comparison: compare_roles(&request.text, primary, others),
    }))
}

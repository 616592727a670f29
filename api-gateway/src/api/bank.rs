//! Bank API handlers
//!
//! Handles endpoints related to bank records:
//! - List banks
//! - Get a bank by account number
//! - Create, update and delete banks

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::model::bank::Bank;

use crate::error::ApiError;
use crate::AppState;

/// List all banks
#[utoipa::path(
    get,
    path = "/api/banks",
    responses(
        (status = 200, description = "All known banks", body = [Bank]),
        (status = 502, description = "Remote banks API unavailable")
    ),
    tag = "bank"
)]
pub async fn get_banks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Bank>>, ApiError> {
    let banks = state.bank_service.get_banks().await?;
    Ok(Json(banks))
}

/// Get a bank by account number
#[utoipa::path(
    get,
    path = "/api/banks/{account_number}",
    params(
        ("account_number" = String, Path, description = "Account number")
    ),
    responses(
        (status = 200, description = "Bank found", body = Bank),
        (status = 404, description = "Bank not found")
    ),
    tag = "bank"
)]
pub async fn get_bank(
    State(state): State<Arc<AppState>>,
    Path(account_number): Path<String>,
) -> Result<Json<Bank>, ApiError> {
    let bank = state.bank_service.get_bank(&account_number).await?;
    Ok(Json(bank))
}

/// Create a new bank
#[utoipa::path(
    post,
    path = "/api/banks",
    request_body = Bank,
    responses(
        (status = 201, description = "Bank created", body = Bank),
        (status = 400, description = "Account number taken, blank, or malformed body")
    ),
    tag = "bank"
)]
pub async fn add_bank(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Bank>, JsonRejection>,
) -> Result<(StatusCode, Json<Bank>), ApiError> {
    let Json(bank) = payload?;
    let created = state.bank_service.add_bank(bank).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace the attributes of an existing bank
#[utoipa::path(
    patch,
    path = "/api/banks",
    request_body = Bank,
    responses(
        (status = 200, description = "Bank updated", body = Bank),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Bank not found")
    ),
    tag = "bank"
)]
pub async fn update_bank(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Bank>, JsonRejection>,
) -> Result<Json<Bank>, ApiError> {
    let Json(bank) = payload?;
    let updated = state.bank_service.update_bank(bank).await?;
    Ok(Json(updated))
}

/// Delete a bank by account number
#[utoipa::path(
    delete,
    path = "/api/banks/{account_number}",
    params(
        ("account_number" = String, Path, description = "Account number")
    ),
    responses(
        (status = 204, description = "Bank deleted"),
        (status = 404, description = "Bank not found")
    ),
    tag = "bank"
)]
pub async fn delete_bank(
    State(state): State<Arc<AppState>>,
    Path(account_number): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.bank_service.delete_bank(&account_number).await?;
    Ok(StatusCode::NO_CONTENT)
}

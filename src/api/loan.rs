use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::{Value, json};

use super::error::{ApiError, ApiJson, parse_id};
use crate::domain::CrudRepository;
use crate::infrastructure::AppState;
use crate::models::{Loan, LoanInput};

const LIST_FAILED: &str = "Não foi possível acessar a listagem de Empréstimos";
const CREATE_FAILED: &str =
    "Não foi possível cadastrar o Empréstimo. Entre em contato com o administrador do sistema.";
const UPDATE_FAILED: &str =
    "Não foi possível atualizar o Empréstimo. Entre em contato com o administrador.";

#[utoipa::path(
    get,
    path = "/lista/emprestimos",
    responses(
        (status = 200, description = "All loans, in id order"),
        (status = 400, description = "Database failure (erro = internal)")
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> Result<Json<Vec<Loan>>, ApiError> {
    let loans = state
        .loan_repo
        .find_all()
        .await
        .map_err(|e| ApiError::new(e, LIST_FAILED))?;

    Ok(Json(loans))
}

// Student and book ids are stored as given: no existence or availability check,
// and the book's available copies are left untouched.
#[utoipa::path(
    post,
    path = "/novo/emprestimo",
    responses(
        (status = 200, description = "Loan created"),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoanInput>,
) -> Result<Json<Value>, ApiError> {
    let loan = state
        .loan_repo
        .create(input)
        .await
        .map_err(|e| ApiError::new(e, CREATE_FAILED))?;

    tracing::info!(
        "Empréstimo cadastrado com sucesso! ID do empréstimo: {}",
        loan.id
    );

    Ok(Json(json!({
        "mensagem": "Empréstimo cadastrado com sucesso!",
        "emprestimo": loan
    })))
}

#[utoipa::path(
    put,
    path = "/atualizar/emprestimo/{idEmprestimo}",
    params(("idEmprestimo" = i32, Path, description = "Loan id")),
    responses(
        (status = 200, description = "Every field replaced"),
        (status = 400, description = "Malformed request, or no loan with this id (erro = not_found)")
    )
)]
pub async fn update_loan(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    ApiJson(input): ApiJson<LoanInput>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(id, UPDATE_FAILED)?;

    let loan = state
        .loan_repo
        .update(id, input)
        .await
        .map_err(|e| ApiError::new(e, UPDATE_FAILED))?;

    Ok(Json(json!({
        "mensagem": "Empréstimo atualizado com sucesso!",
        "emprestimo": loan
    })))
}

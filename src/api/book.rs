use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::{Value, json};

use super::error::{ApiError, ApiJson, parse_id, reject};
use crate::domain::CrudRepository;
use crate::infrastructure::AppState;
use crate::models::{Book, BookInput};

const LIST_FAILED: &str = "Não foi possível acessar a listagem de Livros";
const CREATE_REFUSED: &str =
    "Erro ao cadastra o Livro. Entre em contato com o administrador do sistema.";
const CREATE_FAILED: &str =
    "Não foi possível cadastrar o Livro. Entre em contato com o administrador do sistema.";
const DELETE_REFUSED: &str =
    "Erro ao remover o Livro. Entre em contato com o administrador do sistema.";
const DELETE_FAILED: &str =
    "Não foi possível remover o Livro. Entre em contato com o administrador do sistema.";
const UPDATE_FAILED: &str =
    "Não foi possível atualizar o Livro. Entre em contato com o administrador.";

#[utoipa::path(
    get,
    path = "/lista/livros",
    responses(
        (status = 200, description = "All books, in id order"),
        (status = 400, description = "Database failure (erro = internal)")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state
        .book_repo
        .find_all()
        .await
        .map_err(|e| ApiError::new(e, LIST_FAILED))?;

    Ok(Json(books))
}

#[utoipa::path(
    post,
    path = "/novo/livro",
    responses(
        (status = 200, description = "Book created"),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<BookInput>,
) -> Result<Json<Value>, ApiError> {
    let book = state
        .book_repo
        .create(input)
        .await
        .map_err(reject(CREATE_REFUSED, CREATE_FAILED))?;

    tracing::info!("Livro cadastrado com sucesso! ID do livro: {}", book.id);

    Ok(Json(json!({
        "mensagem": "Livro cadastrado com sucesso!",
        "livro": book
    })))
}

#[utoipa::path(
    delete,
    path = "/delete/livro/{idLivro}",
    params(("idLivro" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book removed"),
        (status = 400, description = "Non-numeric id, or no book with this id (erro = not_found)")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(id, DELETE_FAILED)?;

    state
        .book_repo
        .delete(id)
        .await
        .map_err(reject(DELETE_REFUSED, DELETE_FAILED))?;

    Ok(Json(json!({ "mensagem": "O Livro foi removido com sucesso!" })))
}

#[utoipa::path(
    put,
    path = "/atualizar/livro/{idLivro}",
    params(("idLivro" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Every field replaced"),
        (status = 400, description = "Malformed request, or no book with this id (erro = not_found)")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    ApiJson(input): ApiJson<BookInput>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(id, UPDATE_FAILED)?;

    let book = state
        .book_repo
        .update(id, input)
        .await
        .map_err(|e| ApiError::new(e, UPDATE_FAILED))?;

    Ok(Json(json!({
        "mensagem": "Livro atualizado com sucesso!",
        "livro": book
    })))
}

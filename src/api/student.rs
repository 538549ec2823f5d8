use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::{Value, json};

use super::error::{ApiError, ApiJson, parse_id, reject};
use crate::domain::CrudRepository;
use crate::infrastructure::AppState;
use crate::models::{Student, StudentInput};

const LIST_FAILED: &str = "Não foi possível acessar a listagem de Alunos";
const CREATE_REFUSED: &str =
    "Erro ao cadastrar o Aluno. Entre em contato com o administrador do sistema.";
const CREATE_FAILED: &str =
    "Não foi possível cadastrar o Aluno. Entre em contato com o administrador do sistema.";
const DELETE_REFUSED: &str =
    "Erro ao remover o Aluno. Entre em contato com o administrador do sistema.";
const DELETE_FAILED: &str =
    "Não foi possível remover o Aluno. Entre em contato com o administrador do sistema.";
const UPDATE_FAILED: &str =
    "Não foi possível atualizar o Aluno. Entre em contato com o administrador.";

#[utoipa::path(
    get,
    path = "/lista/alunos",
    responses(
        (status = 200, description = "All students, in id order"),
        (status = 400, description = "Database failure (erro = internal)")
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state
        .student_repo
        .find_all()
        .await
        .map_err(|e| ApiError::new(e, LIST_FAILED))?;

    Ok(Json(students))
}

#[utoipa::path(
    post,
    path = "/novo/aluno",
    responses(
        (status = 200, description = "Student created; RA assigned by the database"),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<StudentInput>,
) -> Result<Json<Value>, ApiError> {
    let student = state
        .student_repo
        .create(input)
        .await
        .map_err(reject(CREATE_REFUSED, CREATE_FAILED))?;

    tracing::info!(
        "Aluno cadastrado com sucesso! ID do aluno: {} (RA {:?})",
        student.id,
        student.ra
    );

    Ok(Json(json!({
        "mensagem": "Aluno cadastrado com sucesso!",
        "aluno": student
    })))
}

#[utoipa::path(
    delete,
    path = "/delete/aluno/{idAluno}",
    params(("idAluno" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student removed"),
        (status = 400, description = "Non-numeric id, or no student with this id (erro = not_found)")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(id, DELETE_FAILED)?;

    state
        .student_repo
        .delete(id)
        .await
        .map_err(reject(DELETE_REFUSED, DELETE_FAILED))?;

    Ok(Json(json!({ "mensagem": "O Aluno foi removido com sucesso!" })))
}

#[utoipa::path(
    put,
    path = "/atualizar/aluno/{idAluno}",
    params(("idAluno" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Every field replaced; RA kept"),
        (status = 400, description = "Malformed request, or no student with this id (erro = not_found)")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    ApiJson(input): ApiJson<StudentInput>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(id, UPDATE_FAILED)?;

    let student = state
        .student_repo
        .update(id, input)
        .await
        .map_err(|e| ApiError::new(e, UPDATE_FAILED))?;

    Ok(Json(json!({
        "mensagem": "Aluno atualizado com sucesso!",
        "aluno": student
    })))
}

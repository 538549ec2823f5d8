pub mod book;
pub mod error;
pub mod health;
pub mod loan;
pub mod student;

use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use utoipa::OpenApi;

use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/api-docs/openapi.json", get(openapi_json))
        // Students
        .route("/lista/alunos", get(student::list_students))
        .route("/novo/aluno", post(student::create_student))
        .route("/delete/aluno/:idAluno", delete(student::delete_student))
        .route("/atualizar/aluno/:idAluno", put(student::update_student))
        // Books
        .route("/lista/livros", get(book::list_books))
        .route("/novo/livro", post(book::create_book))
        .route("/delete/livro/:idLivro", delete(book::delete_book))
        .route("/atualizar/livro/:idLivro", put(book::update_book))
        // Loans (no delete route)
        .route("/lista/emprestimos", get(loan::list_loans))
        .route("/novo/emprestimo", post(loan::create_loan))
        .route("/atualizar/emprestimo/:idEmprestimo", put(loan::update_loan))
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

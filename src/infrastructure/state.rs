//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{BookRepository, LoanRepository, StudentRepository};
use crate::infrastructure::{SeaOrmBookRepository, SeaOrmLoanRepository, SeaOrmStudentRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Student (aluno) repository
    pub student_repo: Arc<StudentRepository>,
    /// Book (livro) repository
    pub book_repo: Arc<BookRepository>,
    /// Loan (emprestimo) repository
    pub loan_repo: Arc<LoanRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let student_repo = Arc::new(SeaOrmStudentRepository::new(db.clone()));
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));
        let loan_repo = Arc::new(SeaOrmLoanRepository::new(db.clone()));

        Self {
            db,
            student_repo,
            book_repo,
            loan_repo,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

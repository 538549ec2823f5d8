//! Repository implementations using SeaORM

pub mod book_repository;
pub mod crud_repository;
pub mod loan_repository;
pub mod student_repository;

pub use book_repository::SeaOrmBookRepository;
pub use crud_repository::{Resource, SeaOrmRepository};
pub use loan_repository::SeaOrmLoanRepository;
pub use student_repository::SeaOrmStudentRepository;

//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::{Book, BookInput, Loan, LoanInput, Student, StudentInput};

/// CRUD contract shared by every resource table.
///
/// `Item` is the stored record (with storage-assigned fields such as the id),
/// `Input` the fields a client supplies on create and update.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Item: Send;
    type Input: Send;

    /// Find all rows, in id order. An empty table yields an empty vector.
    async fn find_all(&self) -> Result<Vec<Self::Item>, DomainError>;

    /// Find a single row by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Self::Item>, DomainError>;

    /// Insert a new row and return it as stored
    async fn create(&self, input: Self::Input) -> Result<Self::Item, DomainError>;

    /// Overwrite every business field of an existing row
    async fn update(&self, id: i32, input: Self::Input) -> Result<Self::Item, DomainError>;

    /// Delete a row by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

pub type StudentRepository = dyn CrudRepository<Item = Student, Input = StudentInput>;

pub type BookRepository = dyn CrudRepository<Item = Book, Input = BookInput>;

pub type LoanRepository = dyn CrudRepository<Item = Loan, Input = LoanInput>;

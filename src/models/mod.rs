pub mod book;
mod lenient;
pub mod loan;
pub mod student;

pub use book::{Book, BookInput};
pub use loan::{Loan, LoanInput};
pub use student::{Student, StudentInput};

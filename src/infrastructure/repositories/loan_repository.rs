//! Loan (emprestimo) table description for the generic repository

use crate::infrastructure::repositories::crud_repository::{Resource, SeaOrmRepository};
use crate::models::loan::{ActiveModel, Column, Entity, Model};
use crate::models::{Loan, LoanInput};

pub struct LoanResource;

impl Resource for LoanResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Item = Loan;
    type Input = LoanInput;

    const TABLE: &'static str = "emprestimo";

    fn id_column() -> Column {
        Column::IdEmprestimo
    }

    fn id_of(model: &Model) -> i32 {
        model.id_emprestimo
    }
}

pub type SeaOrmLoanRepository = SeaOrmRepository<LoanResource>;

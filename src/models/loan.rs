use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "emprestimo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_emprestimo: i32,
    // No foreign keys: neither id is checked against aluno/livro.
    pub id_aluno: i32,
    pub id_livro: i32,
    pub data_emprestimo: NaiveDate,
    pub data_devolucao: NaiveDate,
    pub status_emprestimo: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    #[serde(rename = "idEmprestimo")]
    pub id: i32,
    #[serde(rename = "idAluno")]
    pub student_id: i32,
    #[serde(rename = "idLivro")]
    pub book_id: i32,
    #[serde(rename = "dataEmprestimo")]
    pub loan_date: NaiveDate,
    #[serde(rename = "dataDevolucao")]
    pub due_date: NaiveDate,
    #[serde(rename = "statusEmprestimo")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    #[serde(rename = "idAluno")]
    pub student_id: i32,
    #[serde(rename = "idLivro")]
    pub book_id: i32,
    #[serde(rename = "dataEmprestimo", deserialize_with = "lenient::date")]
    pub loan_date: NaiveDate,
    #[serde(rename = "dataDevolucao", deserialize_with = "lenient::date")]
    pub due_date: NaiveDate,
    #[serde(rename = "statusEmprestimo")]
    pub status: String,
}

impl From<Model> for Loan {
    fn from(model: Model) -> Self {
        Self {
            id: model.id_emprestimo,
            student_id: model.id_aluno,
            book_id: model.id_livro,
            loan_date: model.data_emprestimo,
            due_date: model.data_devolucao,
            status: model.status_emprestimo,
        }
    }
}

impl From<LoanInput> for ActiveModel {
    fn from(input: LoanInput) -> Self {
        Self {
            id_emprestimo: NotSet,
            id_aluno: Set(input.student_id),
            id_livro: Set(input.book_id),
            data_emprestimo: Set(input.loan_date),
            data_devolucao: Set(input.due_date),
            status_emprestimo: Set(input.status),
        }
    }
}

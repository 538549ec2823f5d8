use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "livro")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_livro: i32,
    pub titulo: String,
    pub autor: String,
    pub editora: String,
    pub ano_publicacao: String,
    pub isbn: String,
    pub quant_total: i32,
    pub quant_disponivel: i32,
    pub valor_aquisicao: f64,
    pub status_livro_emprestado: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "idLivro")]
    pub id: i32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "editora")]
    pub publisher: String,
    #[serde(rename = "anoPublicacao")]
    pub publication_year: String,
    pub isbn: String,
    #[serde(rename = "quantTotal")]
    pub total_copies: i32,
    #[serde(rename = "quantDisponivel")]
    pub available_copies: i32,
    #[serde(rename = "valorAquisicao")]
    pub acquisition_value: f64,
    #[serde(rename = "statusLivroEmprestado")]
    pub loan_status: String,
}

/// Book fields accepted on create and update. Copy counts are stored as
/// given and are not reconciled with loans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookInput {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "editora")]
    pub publisher: String,
    #[serde(rename = "anoPublicacao", deserialize_with = "lenient::text")]
    pub publication_year: String,
    pub isbn: String,
    #[serde(rename = "quantTotal")]
    pub total_copies: i32,
    #[serde(rename = "quantDisponivel")]
    pub available_copies: i32,
    #[serde(rename = "valorAquisicao")]
    pub acquisition_value: f64,
    #[serde(rename = "statusLivroEmprestado")]
    pub loan_status: String,
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            id: model.id_livro,
            title: model.titulo,
            author: model.autor,
            publisher: model.editora,
            publication_year: model.ano_publicacao,
            isbn: model.isbn,
            total_copies: model.quant_total,
            available_copies: model.quant_disponivel,
            acquisition_value: model.valor_aquisicao,
            loan_status: model.status_livro_emprestado,
        }
    }
}

impl From<BookInput> for ActiveModel {
    fn from(input: BookInput) -> Self {
        Self {
            id_livro: NotSet,
            titulo: Set(input.title),
            autor: Set(input.author),
            editora: Set(input.publisher),
            ano_publicacao: Set(input.publication_year),
            isbn: Set(input.isbn),
            quant_total: Set(input.total_copies),
            quant_disponivel: Set(input.available_copies),
            valor_aquisicao: Set(input.acquisition_value),
            status_livro_emprestado: Set(input.loan_status),
        }
    }
}

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "aluno")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_aluno: i32,
    #[sea_orm(unique)]
    pub ra: Option<String>, // assigned by the aluno_ra trigger
    pub nome: String,
    pub sobrenome: String,
    pub data_nascimento: NaiveDate,
    pub endereco: String,
    pub email: String,
    pub celular: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A registered library patron, as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "idAluno")]
    pub id: i32,
    pub ra: Option<String>,
    #[serde(rename = "nome")]
    pub first_name: String,
    #[serde(rename = "sobrenome")]
    pub last_name: String,
    #[serde(rename = "dataNascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "endereco")]
    pub address: String,
    pub email: String,
    #[serde(rename = "celular")]
    pub phone: String,
}

/// Client-supplied student fields. The RA is never accepted from clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    #[serde(rename = "nome")]
    pub first_name: String,
    #[serde(rename = "sobrenome")]
    pub last_name: String,
    #[serde(rename = "dataNascimento", deserialize_with = "lenient::date")]
    pub birth_date: NaiveDate,
    #[serde(rename = "endereco")]
    pub address: String,
    pub email: String,
    #[serde(rename = "celular")]
    pub phone: String,
}

impl From<Model> for Student {
    fn from(model: Model) -> Self {
        Self {
            id: model.id_aluno,
            ra: model.ra,
            first_name: model.nome,
            last_name: model.sobrenome,
            birth_date: model.data_nascimento,
            address: model.endereco,
            email: model.email,
            phone: model.celular,
        }
    }
}

impl From<StudentInput> for ActiveModel {
    fn from(input: StudentInput) -> Self {
        Self {
            id_aluno: NotSet,
            ra: NotSet,
            nome: Set(input.first_name),
            sobrenome: Set(input.last_name),
            data_nascimento: Set(input.birth_date),
            endereco: Set(input.address),
            email: Set(input.email),
            celular: Set(input.phone),
        }
    }
}

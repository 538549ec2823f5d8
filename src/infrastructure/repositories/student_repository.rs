//! Student (aluno) table description for the generic repository

use crate::infrastructure::repositories::crud_repository::{Resource, SeaOrmRepository};
use crate::models::student::{ActiveModel, Column, Entity, Model};
use crate::models::{Student, StudentInput};

pub struct StudentResource;

impl Resource for StudentResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Item = Student;
    type Input = StudentInput;

    const TABLE: &'static str = "aluno";

    fn id_column() -> Column {
        Column::IdAluno
    }

    fn id_of(model: &Model) -> i32 {
        model.id_aluno
    }
}

pub type SeaOrmStudentRepository = SeaOrmRepository<StudentResource>;

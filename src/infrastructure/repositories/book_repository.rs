//! Book (livro) table description for the generic repository

use crate::infrastructure::repositories::crud_repository::{Resource, SeaOrmRepository};
use crate::models::book::{ActiveModel, Column, Entity, Model};
use crate::models::{Book, BookInput};

pub struct BookResource;

impl Resource for BookResource {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Item = Book;
    type Input = BookInput;

    const TABLE: &'static str = "livro";

    fn id_column() -> Column {
        Column::IdLivro
    }

    fn id_of(model: &Model) -> i32 {
        model.id_livro
    }
}

pub type SeaOrmBookRepository = SeaOrmRepository<BookResource>;

use chrono::NaiveDate;

use crate::domain::{CrudRepository, DomainError};
use crate::infrastructure::AppState;
use crate::models::{BookInput, LoanInput, StudentInput};

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DomainError::Internal(format!("invalid seed date {year}-{month}-{day}")))
}

/// Insert a few students, books and one loan. Does nothing when students already exist.
pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    if !state.student_repo.find_all().await?.is_empty() {
        tracing::info!("Demo data skipped: aluno table is not empty");
        return Ok(());
    }

    // 1. Students
    let students = vec![
        StudentInput {
            first_name: "Ana".to_owned(),
            last_name: "Souza".to_owned(),
            birth_date: date(2006, 3, 14)?,
            address: "Rua das Flores, 120".to_owned(),
            email: "ana.souza@example.com".to_owned(),
            phone: "(16) 99123-4567".to_owned(),
        },
        StudentInput {
            first_name: "Bruno".to_owned(),
            last_name: "Lima".to_owned(),
            birth_date: date(2005, 11, 2)?,
            address: "Av. Brasil, 45".to_owned(),
            email: "bruno.lima@example.com".to_owned(),
            phone: "(16) 98876-5432".to_owned(),
        },
    ];

    let mut first_student = None;
    for input in students {
        let student = state.student_repo.create(input).await?;
        first_student.get_or_insert(student.id);
    }

    // 2. Books
    let books = vec![
        ("Dom Casmurro", "Machado de Assis", "Garnier", "1899", "9788535910667", 3),
        ("Vidas Secas", "Graciliano Ramos", "Record", "1938", "9788501067340", 2),
        ("O Cortiço", "Aluísio Azevedo", "Ática", "1890", "9788508133031", 1),
    ];

    let mut first_book = None;
    for (title, author, publisher, year, isbn, copies) in books {
        let book = state
            .book_repo
            .create(BookInput {
                title: title.to_owned(),
                author: author.to_owned(),
                publisher: publisher.to_owned(),
                publication_year: year.to_owned(),
                isbn: isbn.to_owned(),
                total_copies: copies,
                available_copies: copies,
                acquisition_value: 49.9,
                loan_status: "Disponível".to_owned(),
            })
            .await?;
        first_book.get_or_insert(book.id);
    }

    // 3. One open loan
    if let (Some(student_id), Some(book_id)) = (first_student, first_book) {
        state
            .loan_repo
            .create(LoanInput {
                student_id,
                book_id,
                loan_date: date(2024, 9, 2)?,
                due_date: date(2024, 9, 16)?,
                status: "Em andamento".to_owned(),
            })
            .await?;
    }

    tracing::info!("Demo data seeded");
    Ok(())
}

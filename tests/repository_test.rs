use biblion::{db, seed};
use biblion::domain::{CrudRepository, DomainError};
use biblion::infrastructure::AppState;
use biblion::models::{BookInput, LoanInput, StudentInput};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, Set};

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db)
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn student(first_name: &str) -> StudentInput {
    StudentInput {
        first_name: first_name.to_string(),
        last_name: "Pereira".to_string(),
        birth_date: day(2004, 6, 1),
        address: "Rua Sete, 7".to_string(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        phone: "(11) 90000-0000".to_string(),
    }
}

fn book(title: &str, copies: i32) -> BookInput {
    BookInput {
        title: title.to_string(),
        author: "Autor".to_string(),
        publisher: "Editora".to_string(),
        publication_year: "2001".to_string(),
        isbn: "9780000000001".to_string(),
        total_copies: copies,
        available_copies: copies,
        acquisition_value: 35.5,
        loan_status: "Disponível".to_string(),
    }
}

#[tokio::test]
async fn test_student_gets_id_and_ra_from_storage() {
    let state = setup_test_state().await;

    let first = state.student_repo.create(student("Carla")).await.unwrap();
    let second = state.student_repo.create(student("Diego")).await.unwrap();

    assert_eq!(first.ra.as_deref(), Some("AAA0001"));
    assert_eq!(second.ra.as_deref(), Some("AAA0002"));
    assert!(second.id > first.id);

    let fetched = state.student_repo.find_by_id(first.id).await.unwrap();
    assert_eq!(fetched, Some(first));
}

#[tokio::test]
async fn test_update_replaces_fields_but_keeps_ra() {
    let state = setup_test_state().await;
    let created = state.student_repo.create(student("Elisa")).await.unwrap();

    let mut replacement = student("Fabio");
    replacement.address = "Praça Central, 1".to_string();
    let updated = state
        .student_repo
        .update(created.id, replacement)
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.ra, created.ra);
    assert_eq!(updated.first_name, "Fabio");
    assert_eq!(updated.address, "Praça Central, 1");
}

#[tokio::test]
async fn test_find_all_is_empty_then_in_id_order() {
    let state = setup_test_state().await;
    assert!(state.book_repo.find_all().await.unwrap().is_empty());

    for title in ["Primeiro", "Segundo", "Terceiro"] {
        state.book_repo.create(book(title, 1)).await.unwrap();
    }

    let titles: Vec<String> = state
        .book_repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, vec!["Primeiro", "Segundo", "Terceiro"]);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let state = setup_test_state().await;

    let err = state.book_repo.delete(42).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound));

    let err = state.book_repo.update(42, book("Nada", 1)).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound));

    assert!(state.book_repo.find_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_removes_only_that_row() {
    let state = setup_test_state().await;
    let keep = state.book_repo.create(book("Fica", 2)).await.unwrap();
    let gone = state.book_repo.create(book("Sai", 2)).await.unwrap();

    state.book_repo.delete(gone.id).await.unwrap();

    let remaining = state.book_repo.find_all().await.unwrap();
    assert_eq!(remaining, vec![keep]);
}

#[tokio::test]
async fn test_loan_does_not_touch_book_availability() {
    let state = setup_test_state().await;
    let book = state.book_repo.create(book("Único", 1)).await.unwrap();

    // Two loans for the last copy both succeed; nothing is decremented.
    for _ in 0..2 {
        state
            .loan_repo
            .create(LoanInput {
                student_id: 1,
                book_id: book.id,
                loan_date: day(2024, 5, 1),
                due_date: day(2024, 5, 15),
                status: "Em andamento".to_string(),
            })
            .await
            .unwrap();
    }

    let after = state.book_repo.find_by_id(book.id).await.unwrap().unwrap();
    assert_eq!(after.available_copies, 1);
    assert_eq!(state.loan_repo.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_duplicate_ra_is_a_conflict() {
    let state = setup_test_state().await;
    state.student_repo.create(student("Gabi")).await.unwrap();

    let clash = biblion::models::student::ActiveModel {
        ra: Set(Some("AAA0001".to_string())),
        nome: Set("Hugo".to_string()),
        sobrenome: Set("Reis".to_string()),
        data_nascimento: Set(day(2003, 1, 1)),
        endereco: Set("Rua A".to_string()),
        email: Set("hugo@example.com".to_string()),
        celular: Set("0".to_string()),
        ..Default::default()
    };
    let err = clash.insert(state.db()).await.unwrap_err();

    assert!(matches!(DomainError::from(err), DomainError::Conflict(_)));
}

#[tokio::test]
async fn test_seed_runs_once() {
    let state = setup_test_state().await;

    seed::seed_demo_data(&state).await.unwrap();
    seed::seed_demo_data(&state).await.unwrap();

    assert_eq!(state.student_repo.find_all().await.unwrap().len(), 2);
    assert_eq!(state.book_repo.find_all().await.unwrap().len(), 3);

    let loans = state.loan_repo.find_all().await.unwrap();
    assert_eq!(loans.len(), 1);
    assert!(loans[0].due_date > loans[0].loan_date);
}

use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::root,
        api::health::health_check,
        api::student::list_students,
        api::student::create_student,
        api::student::delete_student,
        api::student::update_student,
        api::book::list_books,
        api::book::create_book,
        api::book::delete_book,
        api::book::update_book,
        api::loan::list_loans,
        api::loan::create_loan,
        api::loan::update_loan,
    ),
    tags(
        (name = "biblion", description = "BibliOn library API")
    )
)]
pub struct ApiDoc;

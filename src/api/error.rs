//! HTTP mapping of domain failures
//!
//! Every failed request answers 400 with `{"mensagem", "erro"}`. Clients tell
//! the failure kinds apart by `erro`, never by status code.

use axum::{
    Json, async_trait,
    extract::{FromRequest, Path, Request, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::DomainError;

const BODY_REJECTED: &str =
    "Não foi possível processar os dados enviados. Verifique o corpo da requisição.";

/// A failed request: the domain error plus the static message shown to the client.
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
    message: &'static str,
}

impl ApiError {
    pub fn new(error: DomainError, message: &'static str) -> Self {
        Self { error, message }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.error.is_server_side() {
            tracing::error!("{} ({})", self.message, self.error);
        } else {
            tracing::warn!("{} ({})", self.message, self.error);
        }

        let body = Json(json!({
            "mensagem": self.message,
            "erro": self.error.kind(),
        }));
        (self.status(), body).into_response()
    }
}

/// Build the error for a failed operation. Problems with the request itself
/// get `failed`; anything storage reported (missing row, constraint, query
/// failure) gets `refused`.
pub fn reject(refused: &'static str, failed: &'static str) -> impl FnOnce(DomainError) -> ApiError {
    move |error| {
        let message = match error {
            DomainError::Validation(_) => failed,
            _ => refused,
        };
        ApiError::new(error, message)
    }
}

/// Unwrap a numeric path id, turning a malformed one into a validation error.
pub fn parse_id(
    id: Result<Path<i32>, PathRejection>,
    message: &'static str,
) -> Result<i32, ApiError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => Err(ApiError::new(
            DomainError::Validation(rejection.body_text()),
            message,
        )),
    }
}

/// JSON body extractor; missing, mistyped or unparsable fields are validation errors.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::new(DomainError::Validation(rejection.body_text()), BODY_REJECTED)
            })?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn every_kind_answers_bad_request_with_its_own_name() {
        let cases = [
            (DomainError::NotFound, "not_found"),
            (DomainError::Validation("id".into()), "validation"),
            (DomainError::Conflict("ra".into()), "conflict"),
            (DomainError::Database("locked".into()), "internal"),
            (DomainError::Internal("oops".into()), "internal"),
        ];

        for (error, kind) in cases {
            let response = ApiError::new(error, "falha").into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_of(response).await["erro"], kind);
        }
    }

    #[tokio::test]
    async fn response_body_carries_message_and_kind() {
        let response = ApiError::new(DomainError::NotFound, "Aluno não encontrado").into_response();

        let json = body_of(response).await;
        assert_eq!(json["mensagem"], "Aluno não encontrado");
        assert_eq!(json["erro"], "not_found");
    }

    #[test]
    fn reject_picks_message_by_failure_origin() {
        let bad_input = reject("recusado", "falhou")(DomainError::Validation("x".into()));
        assert_eq!(bad_input.message, "falhou");

        let missing = reject("recusado", "falhou")(DomainError::NotFound);
        assert_eq!(missing.message, "recusado");

        let clash = reject("recusado", "falhou")(DomainError::Conflict("ra".into()));
        assert_eq!(clash.message, "recusado");
    }
}

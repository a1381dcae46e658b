//! HTTP layer: handlers under `/api` and the mapping of service errors to responses.

use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::services::ServiceError;

pub mod clients;
pub mod trips;

/// Registers every API handler under the `/api` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(clients::client_trips)
            .service(clients::create_client)
            .service(clients::register_for_trip)
            .service(clients::cancel_registration)
            .service(trips::list_trips),
    );
}

/// Rejects unreadable JSON bodies with 400 and the parser message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        log::debug!("Rejected request body: {message}");
        InternalError::from_response(err, HttpResponse::BadRequest().json(message)).into()
    })
}

/// Translates a service failure into the matching status code and message body.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(err.to_string()),
        ServiceError::Conflict(_) | ServiceError::Validation(_) => {
            HttpResponse::BadRequest().json(err.to_string())
        }
        ServiceError::Internal(message) => HttpResponse::InternalServerError()
            .json(format!("Internal server error: {message}")),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    use super::*;
    use crate::services::{ConflictKind, MissingEntity};

    async fn body_of(response: HttpResponse) -> String {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn not_found_is_404_with_message() {
        let response =
            service_error_response(&ServiceError::NotFound(MissingEntity::Trip(4)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await, "Trip with ID 4 not found");
    }

    #[actix_web::test]
    async fn conflicts_are_bad_requests() {
        let response = service_error_response(&ServiceError::Conflict(
            ConflictKind::AlreadyRegistered,
        ));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            "Client is already registered for this trip"
        );
    }

    #[actix_web::test]
    async fn internal_errors_are_prefixed() {
        let response = service_error_response(&ServiceError::Internal("disk I/O error".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_of(response).await,
            "Internal server error: disk I/O error"
        );
    }
}

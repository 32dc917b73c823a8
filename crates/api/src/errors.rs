use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use warden_dns_domain::DomainError;

/// Surfaces a `DomainError` to the HTTP caller as `(status, text)`.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::ListNotFound(_) | DomainError::DomainNotInList(_) => {
                StatusCode::NOT_FOUND
            }

            DomainError::InvalidRule(_)
            | DomainError::InvalidListName(_)
            | DomainError::MalformedInput(_)
            | DomainError::FetchFailed { .. }
            | DomainError::FetchRejected { .. }
            | DomainError::FetchTooLarge { .. } => StatusCode::BAD_REQUEST,

            DomainError::GuestForbidden => StatusCode::FORBIDDEN,

            DomainError::Io(_)
            | DomainError::PolicyStore(_)
            | DomainError::QueryTimeout
            | DomainError::UpstreamProtocol(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.0.to_string()).into_response()
    }
}

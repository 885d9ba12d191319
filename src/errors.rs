use actix_web::{http::{header::ContentType, StatusCode}, HttpResponse, ResponseError};
use thiserror::Error;

use crate::validation::Field;

#[derive(Debug, Error)]
pub enum AppError{
    #[error("Environment variable {0} must be set")]
    MissingEnv(&'static str),
    #[error("Environment variable {0} has an invalid value")]
    InvalidEnv(&'static str),
    #[error("Cant connect to the DB")]
    DbConnect,
    #[error("Cant run the DB migrations")]
    Migrate,
    #[error("Cant bind to the Socket")]
    SocketBind,
    #[error("Cant start the server")]
    ServerStart,
}

/// Every way a request can fail. The message is what the client sees.
#[derive(Debug, Error)]
pub enum ApiError{
    #[error("Invalid Credentials")]
    InvalidCredentials,
    #[error("User already exists!!, try a different username.")]
    Conflict,
    #[error("User does not exists")]
    AccountNotFound,
    #[error("Invalid Course Id")]
    UnknownCourseId,
    #[error("Course Not found!!")]
    CourseNotFound,
    #[error("")]
    Unauthenticated,
    #[error("Token is not Valid or has already expired!!")]
    InvalidToken,
    #[error("Invalid course {0}")]
    InvalidField(Field),
    #[error("Invalid Course Id format")]
    MalformedId,
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Builds a mapper that logs the underlying failure and hides it behind `message`.
    pub fn internal<E: std::fmt::Display>(message: &'static str) -> impl FnOnce(E) -> ApiError {
        move |e| {
            tracing::error!(error = %e, "{}", message);
            ApiError::Internal(message)
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Unauthenticated => HttpResponse::build(self.status_code()).finish(),
            _ => HttpResponse::build(self.status_code())
                .content_type(ContentType::plaintext())
                .body(self.to_string()),
        }
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Conflict => StatusCode::FORBIDDEN,
            ApiError::AccountNotFound => StatusCode::UNAUTHORIZED,
            ApiError::UnknownCourseId => StatusCode::UNAUTHORIZED,
            ApiError::CourseNotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::InvalidField(_) => StatusCode::UNAUTHORIZED,
            ApiError::MalformedId => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    Conflict(String),
    InternalServerError(String),
    ValidationError(Vec<String>),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Conflict(message) => write!(f, "Conflict: {}", message),
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Conflict(message) => HttpResponse::Conflict().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::InternalServerError(message) => HttpResponse::InternalServerError().json(
                ErrorResponse {
                    success: false,
                    message: message.clone(),
                    errors: None,
                },
            ),
            ApiError::ValidationError(errors) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                message: "Validation failed".to_string(),
                errors: Some(errors.clone()),
            }),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use mongodb::bson;
use mongodb::error::Error as MongoError;
use serde::Serialize;
use thiserror::Error;

/// HTTP 错误响应结构
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub type AppResult<T> = Result<T, AppError>;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    // ==== 常规业务错误 ====
    #[error("Item not found")]
    NotFound,

    #[error("Route not found")]
    RouteNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Invalid request body")]
    InvalidBody(String),

    // ==== 系统错误 ====
    #[error("MongoDB error: {0}")]
    Mongo(#[from] MongoError),
    #[error("BSON encode error: {0}")]
    BsonSer(#[from] bson::ser::Error),
    #[error("BSON decode error: {0}")]
    BsonDe(#[from] bson::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound | AppError::RouteNotFound | AppError::Validation(_) => {
                ErrorResponse { error: self.to_string(), message: None }
            }
            AppError::InvalidBody(detail) => ErrorResponse { error: self.to_string(), message: Some(detail.clone()) },
            e => {
                error!("{:?}", e);
                ErrorResponse { error: "Internal server error".to_string(), message: Some(e.to_string()) }
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub message: String,
    pub count: usize,
}

/// 与 `AppError` 的渲染结构一致，仅用于文档
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderLinkResponse {
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

pub fn result_msg(msg: &str) -> MessageResponse {
    MessageResponse { message: msg.to_string() }
}

pub fn result_seed(count: usize) -> SeedResponse {
    SeedResponse { message: "Database seeded successfully".to_string(), count }
}

use axum::Json;

use super::model::MessageResponse;

pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Customer API".to_string(),
    })
}

use actix_web::{web, HttpResponse};
use chat_client::{ChatRequest, ChatResponse};

use crate::error::{AppError, Result};
use crate::prompt::build_messages;
use crate::state::AppState;

pub async fn handler(state: web::Data<AppState>, req: web::Json<ChatRequest>) -> Result<HttpResponse> {
    let req = req.into_inner();
    if req.message.trim().is_empty() {
        return Err(AppError::InvalidRequest("message must not be empty".to_string()));
    }

    log::info!("User message: {}", req.message);
    log::debug!("Conversation history: {} messages", req.history.len());

    let messages = build_messages(&state.system_prompt, &req.history, &req.message);
    let reply = state.llm.complete(&messages).await.map_err(|e| {
        log::error!("LLM completion failed: {}", e);
        AppError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(ChatResponse { message: reply }))
}

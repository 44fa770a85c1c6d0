use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use tera::Context;

use crate::date;
use crate::web::models::{ChatRequest, ChatResponse};
use crate::web::AppState;

const STRUCTURED_ANSWER_INSTRUCTION: &str =
    "Please respond in an ordered format (numbered list or bullet points) for clarity:";

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let context = Context::new();
    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Chat API endpoint
pub async fn chat(data: web::Data<AppState>, req: web::Json<ChatRequest>) -> impl Responder {
    let prompt = req.prompt.trim();

    if prompt.is_empty() {
        return HttpResponse::BadRequest().json(json!({ "error": "Prompt is required" }));
    }

    info!("Chat request: {}", prompt);

    // Date questions are answered locally, without calling the model.
    if date::is_date_query(prompt) {
        return HttpResponse::Ok().json(ChatResponse {
            response: date::todays_date_reply(),
        });
    }

    let structured_prompt = format!("{}\n{}", STRUCTURED_ANSWER_INSTRUCTION, prompt);

    match data.gemini.generate_reply(&structured_prompt).await {
        Ok(response) => HttpResponse::Ok().json(ChatResponse { response }),
        Err(e) => {
            error!("Gemini API error: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "AI Error",
                "details": e.details()
            }))
        }
    }
}

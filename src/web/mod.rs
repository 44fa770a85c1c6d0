pub mod handlers;
pub mod models;
pub mod routes;

use tera::Tera;

use crate::gemini::GeminiClient;

// App state structure
pub struct AppState {
    pub tera: Tera,
    pub gemini: GeminiClient,
}

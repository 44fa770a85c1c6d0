use actix_cors::Cors;
use actix_files as fs;
use actix_web::{http::header, web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::env;
use tera::Tera;

use gemini_chat_web::gemini::GeminiClient;
use gemini_chat_web::web::{routes, AppState};

const UI_ORIGIN: &str = "http://localhost:4200";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Gemini chat proxy");

    let gemini = match GeminiClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to configure Gemini client: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize template engine
    let mut tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let app_state = Data::new(AppState { tera, gemini });

    info!("Server running on http://127.0.0.1:{}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(UI_ORIGIN)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(header::CONTENT_TYPE);

        App::new()
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", "./static"))
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod convert;

pub use crate::config::ServerConfig;
pub use crate::convert::LatexEngine;

/// Maximum accepted payload size. The original deployment had no limit at
/// all; 10 MiB is far above any realistic LaTeX document.
pub const MAX_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

/// JSON body returned for every failed conversion.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &str, details: Option<String>) -> Self {
        Self {
            error: error.to_string(),
            details,
        }
    }

    /// Renderer exited non-zero; `details` carries its diagnostics.
    pub fn generation_failed(details: &str) -> Self {
        Self::new("PDF generation failed", Some(details.to_string()))
    }

    /// Renderer exited zero but no PDF appeared in the workspace.
    pub fn missing_artifact() -> Self {
        Self::new("PDF file not generated", None)
    }

    /// Any other fault, reported with its own message.
    pub fn internal(message: &str) -> Self {
        Self::new(message, None)
    }
}

pub async fn run() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    #[derive(OpenApi)]
    #[openapi(
        paths(crate::convert::handlers::convert_latex),
        components(schemas(ErrorResponse)),
        tags(
            (name = "Conversion Service", description = "LaTeX to PDF conversion endpoint.")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();
    let engine = web::Data::new(LatexEngine::new(config.pdflatex_bin.clone()));

    log::info!(
        "Starting server at http://{}:{}",
        config.bind_addr,
        config.port
    );

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(engine.clone())
            .app_data(web::PayloadConfig::new(MAX_PAYLOAD_BYTES))
            .service(
                web::resource("/convert")
                    .route(web::post().to(convert::handlers::convert_latex)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}

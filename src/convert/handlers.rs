use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, info};

use crate::convert::engine::{LatexEngine, DOWNLOAD_FILENAME, PDF_CONTENT_TYPE};
use crate::convert::RenderError;
use crate::ErrorResponse;

#[utoipa::path(
    tag = "Conversion Service",
    post,
    path = "/convert",
    request_body(content = String, content_type = "text/plain", description = "Raw LaTeX source"),
    responses(
        (status = 200, description = "Rendered PDF artifact", body = Vec<u8>, content_type = "application/pdf"),
        (status = 500, description = "Conversion failed", body = ErrorResponse)
    )
)]
pub async fn convert_latex(body: web::Bytes, engine: web::Data<LatexEngine>) -> impl Responder {
    info!("Executing convert_latex handler ({} byte payload)", body.len());

    let latex_source = match String::from_utf8(body.to_vec()) {
        Ok(source) => source,
        Err(e) => {
            error!("Request body is not valid UTF-8: {}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal(&e.to_string()));
        }
    };

    // The render blocks on the compiler subprocess; keep it off the worker.
    let engine = engine.get_ref().clone();
    let result = web::block(move || engine.render(&latex_source)).await;

    match result {
        Ok(Ok(pdf)) => {
            info!("Rendered {} byte PDF", pdf.len());
            HttpResponse::Ok()
                .content_type(PDF_CONTENT_TYPE)
                .insert_header(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename(DOWNLOAD_FILENAME.to_string())],
                })
                .body(pdf)
        }
        Ok(Err(RenderError::RendererFailed { code, diagnostics })) => {
            error!("Renderer exited with status {:?}", code);
            debug!("Renderer diagnostics: {}", diagnostics);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::generation_failed(&diagnostics))
        }
        Ok(Err(RenderError::MissingArtifact)) => {
            error!("Renderer succeeded but produced no PDF");
            HttpResponse::InternalServerError().json(ErrorResponse::missing_artifact())
        }
        Ok(Err(e)) => {
            error!("Conversion failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal(&e.to_string()))
        }
        Err(e) => {
            error!("Render task failed to complete: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal(&e.to_string()))
        }
    }
}

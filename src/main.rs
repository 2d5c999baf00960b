#[actix_web::main]
async fn main() -> std::io::Result<()> {
    latex_pdf_server::run().await
}

mod errors;
mod forms;
mod setup;

use actix_web::{web, App, HttpServer};
use setup::{init_tracing, Settings};
use std::io;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings =
        Settings::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    init_tracing(settings.log_format);

    let bind_address = settings.bind_address;
    let settings = web::Data::new(settings);
    tracing::info!(%bind_address, max_form_bytes = settings.max_form_bytes, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(settings.clone())
            .configure(forms::routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

use actix_files::Files;
use actix_web::{get, http::StatusCode, middleware, App, HttpRequest, HttpResponse, HttpServer, Responder};
use std::env;

const DEFAULT_METRICS_BACKEND: &str = "http://127.0.0.1:8000";

/// Relay metrics requests to the backend so the browser app stays
/// same-origin. The query string (tickers, ttl) passes through untouched.
#[get("/api/metrics")]
async fn metrics_relay(req: HttpRequest) -> impl Responder {
    let backend =
        env::var("METRICS_BACKEND").unwrap_or_else(|_| DEFAULT_METRICS_BACKEND.to_string());
    let url = format!("{backend}/metrics?{}", req.query_string());

    let response = match reqwest::get(&url).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("metrics relay request failed: {e}");
            return HttpResponse::BadGateway().finish();
        }
    };

    let status =
        StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);

    match response.text().await {
        Ok(body) => HttpResponse::build(status)
            .content_type("application/json")
            .body(body),
        Err(e) => {
            log::error!("metrics relay body read failed: {e}");
            HttpResponse::BadGateway().finish()
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Get port from environment or default to 8080
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    log::info!("Starting server on 0.0.0.0:{port}");

    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(metrics_relay)
            .service(Files::new("/", "./dist").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

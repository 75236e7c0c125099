use actix_cors::Cors;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::config::ServerConfig;
use crate::routes;
use crate::services::{maximize_service::MaximizeService, stats_service::StatsService};

/// Shared services and every route of the API
pub fn configure(cfg: &mut web::ServiceConfig) {
    let stats_service = StatsService::new();

    cfg.app_data(web::Data::new(stats_service))
        .app_data(web::Data::new(MaximizeService::new(stats_service)))
        .route("/health", web::get().to(routes::health::health_check));

    routes::booking::config(cfg);
}

/// Bind the HTTP server; the returned future runs until SIGINT/SIGTERM and then
/// waits up to `shutdown_timeout` for in-flight requests.
pub fn build_server(config: &ServerConfig) -> std::io::Result<Server> {
    let server = HttpServer::new(|| {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(configure)
    })
    .shutdown_timeout(config.shutdown_timeout.as_secs())
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}

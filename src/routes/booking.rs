use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::booking::BookingRequest;
use crate::services::{maximize_service::MaximizeService, stats_service::StatsService};

/// Largest accepted request body; bigger batches get 413 Payload Too Large
pub const MAX_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid HTTP method only post allowed")]
    InvalidHttpMethod,
    #[error("invalid request body")]
    InvalidRequestBody,
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidHttpMethod => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidRequestBody | ApiError::Decode(_) => StatusCode::BAD_REQUEST,
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_PAYLOAD_BYTES))
        .service(
            web::resource("/stats")
                .route(web::post().to(stats))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/maximize")
                .route(web::post().to(maximize))
                .default_service(web::to(method_not_allowed)),
        );
}

/*
    POST /stats
*/
pub async fn stats(
    stats_service: web::Data<StatsService>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    log::info!("processing request from stats handler");
    let bookings = decode_bookings(&body)?;

    let profit_per_night = stats_service.profit_per_night(&bookings);
    Ok(HttpResponse::Ok().json(profit_per_night))
}

/*
    POST /maximize
*/
pub async fn maximize(
    maximize_service: web::Data<MaximizeService>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    log::info!("processing request from maximize handler");
    let bookings = decode_bookings(&body)?;

    let best = maximize_service.maximize_total_profits(&bookings);
    Ok(HttpResponse::Ok().json(best))
}

async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::InvalidHttpMethod)
}

/// The whole batch is rejected as soon as one booking fails to decode
fn decode_bookings(body: &[u8]) -> Result<Vec<BookingRequest>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        log::warn!("rejecting empty request body");
        return Err(ApiError::InvalidRequestBody);
    }

    let bookings: Vec<BookingRequest> = serde_json::from_slice(body).map_err(|err| {
        log::warn!("rejecting booking payload: {}", err);
        ApiError::from(err)
    })?;

    if bookings.is_empty() {
        log::warn!("rejecting empty booking list");
        return Err(ApiError::InvalidRequestBody);
    }

    Ok(bookings)
}

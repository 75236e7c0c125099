#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, App};
use serde_json::{json, Value};

pub fn create_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
        )
        .wrap(Logger::default())
        .configure(booking_api::api::configure)
}

pub fn booking(request_id: &str, check_in: &str, nights: i32, selling_rate: i32, margin: i32) -> Value {
    json!({
        "request_id": request_id,
        "check_in": check_in,
        "nights": nights,
        "selling_rate": selling_rate,
        "margin": margin
    })
}

/// A + C beat B, and beat A alone
pub fn first_example() -> Value {
    json!([
        booking("A", "2018-01-01", 10, 1000, 10),
        booking("B", "2018-01-06", 10, 700, 10),
        booking("C", "2018-01-12", 10, 400, 10),
    ])
}

pub fn second_example() -> Value {
    json!([
        booking("bookata_XY123", "2020-01-01", 5, 200, 20),
        booking("kayete_PP234", "2020-01-04", 4, 156, 5),
        booking("atropote_AA930", "2020-01-04", 4, 150, 6),
        booking("acme_AAAAA", "2020-01-10", 4, 160, 30),
    ])
}

pub fn stats_example() -> Value {
    json!([
        booking("bookata_XY123", "2020-01-01", 5, 200, 20),
        booking("kayete_PP234", "2018-01-04", 4, 156, 22),
    ])
}

use std::io;

use booking_api::{api, config::ServerConfig};
use env_logger::Env;

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    log::info!("HTTP server running on {}", config.address());
    api::build_server(&config)?.await?;

    log::info!("HTTP server shut down");
    Ok(())
}

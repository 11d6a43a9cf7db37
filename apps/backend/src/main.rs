use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dartbuddy::config::AppConfig;
use dartbuddy::state::app_state::AppState;
use dartbuddy::{routes, telemetry};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        default_start = config.default_start,
        seeded = config.rng_seed.is_some(),
        policy = config.submit_policy.as_str(),
        "starting dartbuddy"
    );

    let (host, port) = (config.host.clone(), config.port);
    let data = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

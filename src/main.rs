use actix_web::{middleware::Logger, web, App, HttpServer};

use studyaid_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        if let Err(e) = config.validate_for_production() {
            log::error!("Refusing to start: {}", e);
            std::process::exit(1);
        }
    }

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let state = web::Data::new(AppState::new(config));

    log::info!(
        "Starting HTTP server on {}:{} (model {})",
        bind_address.0,
        bind_address.1,
        state.config.model_id
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %b %{x-request-id}o %T"#))
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}

use actix_web::{middleware, web, App, HttpServer};
use planner_api::config::ApiConfig;
use planner_api::helpers::llm::create_planner_service;
use planner_api::helpers::logging::{init_tracing, LogTarget};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load()?;
    let _log_guard = init_tracing(&config.logging, LogTarget::Stdout);

    let planner = web::Data::new(create_planner_service(&config)?);
    let allowed_origins = config.cors.allowed_origins.clone();

    let bind_addr = config.bind_addr();
    info!("Starting planner-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(planner_api::build_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .app_data(planner.clone())
            .configure(planner_api::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}

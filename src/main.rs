use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use secrecy::ExposeSecret;

use planago_api::{
    config::AppConfig,
    db,
    routes,
    services::{
        places_search_service::{GooglePlacesSearch, PlaceSearch},
        plan_service::PlanService,
        plan_store::{MongoPlanStore, PlanStore},
    },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env().map_err(to_io_error)?;

    let client = db::mongo::create_mongo_client(config.mongo_uri.expose_secret())
        .await
        .map_err(to_io_error)?;
    let store: Arc<dyn PlanStore> = Arc::new(MongoPlanStore::new(&client, &config.database));

    let search: Arc<dyn PlaceSearch> =
        Arc::new(GooglePlacesSearch::new(&config.places).map_err(to_io_error)?);
    let plan_service = web::Data::new(PlanService::new(search));
    let store = web::Data::from(store);

    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);
    log::info!("Attempting to bind to {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(config.clone())
            .app_data(plan_service.clone())
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}

fn to_io_error<E: std::fmt::Display>(err: E) -> std::io::Error {
    log::error!("Startup failed: {}", err);
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}

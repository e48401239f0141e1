use actix_web::{middleware, web, App, HttpServer};
use garden_plot::{
    api::{openapi::ApiDoc, routes},
    config::Config,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(std::io::Error::other)?;
    let bind_addr = config.bind_addr.clone();
    log::info!("🌱 Garden plot API starting at http://{bind_addr}");
    log::info!("   POST /api/plot/items");
    log::info!("   GET  /api/plot/spots?width=..&height=..");
    log::info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    log::info!("   max spots per request: {}", config.max_spots);

    let config = web::Data::new(config);
    let openapi = ApiDoc::openapi();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .configure(routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}

use actix_web::{App, HttpServer, web};
use config::{Config, ConfigError, Environment, File};
use log::info;

use storefront_catalog::db::establish_connection_pool;
use storefront_catalog::models::config::ServerConfig;
use storefront_catalog::repository::DieselRepository;
use storefront_catalog::routes::products::{
    create_product, delete_product, list_products, product_detail, products_by_category,
    update_product,
};

fn load_config() -> Result<ServerConfig, ConfigError> {
    Config::builder()
        .set_default("database_url", "catalog.db")?
        .set_default("bind_address", "127.0.0.1:8080")?
        .add_source(File::with_name("catalog").required(false))
        .add_source(Environment::default())
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = load_config().map_err(std::io::Error::other)?;

    let pool =
        establish_connection_pool(&server_config.database_url).map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    info!("Starting catalog server on {}", server_config.bind_address);

    let bind_address = server_config.bind_address.clone();
    HttpServer::new(move || {
        App::new().app_data(web::Data::new(repo.clone())).service(
            web::scope("/products")
                .service(create_product)
                .service(list_products)
                .service(products_by_category)
                .service(update_product)
                .service(delete_product)
                // Registered last: the bare `/{product_slug}` pattern would
                // otherwise swallow the literal-prefixed routes above.
                .service(product_detail),
        )
    })
    .bind(bind_address)?
    .run()
    .await
}

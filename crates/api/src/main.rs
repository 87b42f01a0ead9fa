#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;

pub mod routes;
pub mod util;

use std::str::FromStr;

use encore_database::DatabaseInfo;
use encore_providers::{
    openweather::OpenWeather, spotify::Spotify, ticketmaster::Ticketmaster, youtube::YouTube,
};
use log::info;
use rocket::{Build, Rocket};
use rocket_cors::AllowedOrigins;

/// Build the API server.
pub async fn web() -> Rocket<Build> {
    let config = encore_config::config().await;

    // Setup database
    let db = DatabaseInfo::Auto.connect().await.expect("database");
    db.migrate_database().await.expect("migrations");

    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: [
            "Get", "Put", "Post", "Delete", "Options", "Head", "Trace", "Connect", "Patch",
        ]
        .iter()
        .map(|s| FromStr::from_str(s).unwrap())
        .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    // Configure Rocket
    let figment = rocket::Config::figment().merge(("port", config.api.port));
    let rocket = rocket::custom(figment);

    routes::mount(rocket)
        .mount("/", rocket_cors::catch_all_options_routes())
        .mount(
            "/swagger/",
            rocket_okapi::swagger_ui::make_swagger_ui(&rocket_okapi::swagger_ui::SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .register("/", util::catchers::all_catchers())
        .manage(db)
        .manage(Ticketmaster::new(&config.apis.ticketmaster.api_key))
        .manage(OpenWeather::new(&config.apis.openweather.api_key))
        .manage(YouTube::new(&config.apis.youtube.api_key))
        .manage(Spotify::new(
            &config.apis.spotify.client_id,
            &config.apis.spotify.client_secret,
        ))
        .manage(cors.clone())
        .attach(cors)
}

#[launch]
async fn rocket() -> _ {
    pretty_env_logger::init();

    info!(
        "Starting Encore server [version {}].",
        env!("CARGO_PKG_VERSION")
    );

    encore_config::init().await;

    web().await
}

use rocket::{Build, Rocket};
use rocket_okapi::okapi::openapi3::OpenApi;
use rocket_okapi::settings::OpenApiSettings;

mod auth;
mod events;
mod root;
mod spotify;
mod weather;
mod youtube;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root],
        "/auth" => auth::routes(),
        "/events" => events::routes(),
        "/weather" => weather::routes(),
        "/youtube" => youtube::routes(),
        "/spotify" => spotify::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use rocket_okapi::okapi::openapi3::*;

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "Encore API".to_string(),
            description: Some("Concert discovery backend".to_string()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

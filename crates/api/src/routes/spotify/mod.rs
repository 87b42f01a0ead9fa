use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod fetch_artist;
mod search_artist;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![search_artist::search_artist, fetch_artist::fetch_artist]
}

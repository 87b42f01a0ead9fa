use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod fetch_saved;
mod save;
mod search;
mod unsave;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        search::search,
        save::save,
        fetch_saved::fetch_saved,
        unsave::unsave
    ]
}

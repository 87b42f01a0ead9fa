use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

mod create_account;
mod fetch_self;
mod login;
mod logout;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        create_account::create_account,
        login::login,
        logout::logout,
        fetch_self::fetch_self
    ]
}

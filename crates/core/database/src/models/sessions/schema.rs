use rocket_okapi::okapi::openapi3::{SecurityScheme, SecuritySchemeData};
use rocket_okapi::{
    gen::OpenApiGenerator,
    request::{OpenApiFromRequest, RequestHeaderInput},
};

use crate::Session;

impl OpenApiFromRequest<'_> for Session {
    fn from_request_input(
        _gen: &mut OpenApiGenerator,
        _name: String,
        _required: bool,
    ) -> rocket_okapi::Result<RequestHeaderInput> {
        let mut requirements = schemars::Map::new();
        requirements.insert("Bearer Token".to_owned(), vec![]);

        Ok(RequestHeaderInput::Security(
            "Bearer Token".to_owned(),
            SecurityScheme {
                data: SecuritySchemeData::Http {
                    scheme: "bearer".to_owned(),
                    bearer_format: Some("token".to_owned()),
                },
                description: Some("Used to authenticate the current session.".to_owned()),
                extensions: schemars::Map::new(),
            },
            requirements,
        ))
    }
}

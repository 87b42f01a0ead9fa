use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = match self.error_type {
            ErrorType::InvalidRequest { .. } => Status::BadRequest,
            ErrorType::FailedValidation { .. } => Status::BadRequest,
            ErrorType::UnprocessableEntity => Status::UnprocessableEntity,

            ErrorType::EmailTaken => Status::Conflict,
            ErrorType::InvalidCredentials => Status::Unauthorized,
            ErrorType::Unauthenticated => Status::Unauthorized,

            ErrorType::AlreadySaved => Status::BadRequest,

            // Forward the upstream status when we know it.
            ErrorType::UpstreamUnavailable { status, .. } => {
                status.map(Status::new).unwrap_or(Status::BadGateway)
            }

            ErrorType::DatabaseError { .. } => Status::InternalServerError,
            ErrorType::InternalError => Status::InternalServerError,
            ErrorType::NotFound => Status::NotFound,
        };

        // Serialize the error data structure into JSON.
        let string = serde_json::to_string(&self).unwrap();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}

//! Safe path-parameter extractors.
//!
//! Each extractor parses one path segment into a positive i64 and answers
//! 400 with the standard envelope when the segment is missing or malformed,
//! before any handler code runs.

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, err, ok};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! safe_path_id {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                match req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                {
                    Some(id) if id > 0 => ok($name(id)),
                    _ => {
                        let response = HttpResponse::BadRequest().json(
                            ApiResponse::error_empty(
                                ErrorCode::BadRequest,
                                concat!("Invalid path parameter: ", $param),
                            ),
                        );
                        err(InternalError::from_response(
                            concat!("Invalid path parameter: ", $param),
                            response,
                        )
                        .into())
                    }
                }
            }
        }
    };
}

safe_path_id!(SafeIDI64, "id");
safe_path_id!(SafeStudentIdI64, "aluno_id");

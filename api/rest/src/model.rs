use actix_web::{http::StatusCode, HttpResponse, HttpResponseBuilder};
use qb_error::Error;
use serde::Serialize;

pub mod auth;
pub mod comment;
pub mod follow;
pub mod group;
pub mod post;
pub mod profile;
pub mod user;

#[derive(Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PaginationRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl Response {
    pub fn data<T: Serialize>(
        status_code: &StatusCode,
        pagination: &Option<PaginationRes>,
        data: T,
    ) -> HttpResponse {
        match serde_json::to_value(data) {
            Ok(data) => HttpResponseBuilder::new(*status_code).json(Self {
                error: None,
                pagination: *pagination,
                data: Some(data),
            }),
            Err(err) => {
                qb_log::error(None, &err);
                Self::error(&Error::InternalServerError(err.to_string()))
            }
        }
    }

    pub fn error(err: &Error) -> HttpResponse {
        let (status_code, message) = match err {
            Error::BadRequest(msg) => (&StatusCode::BAD_REQUEST, msg),
            Error::Unauthorized(msg) => (&StatusCode::UNAUTHORIZED, msg),
            Error::Forbidden(msg) => (&StatusCode::FORBIDDEN, msg),
            Error::NotFound(msg) => (&StatusCode::NOT_FOUND, msg),
            Error::InternalServerError(msg) => (&StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        Self::error_raw(status_code, message)
    }

    pub fn error_raw(status_code: &StatusCode, message: &str) -> HttpResponse {
        qb_log::error(None, message);

        HttpResponseBuilder::new(*status_code).json(Self {
            error: Some(ErrorRes {
                status: match status_code.canonical_reason() {
                    Some(status_code) => status_code.to_owned(),
                    None => "Unknown".to_owned(),
                },
                message: message.to_owned(),
            }),
            pagination: None,
            data: None,
        })
    }
}

#[derive(Serialize)]
pub struct ErrorRes {
    status: String,
    message: String,
}

#[derive(Serialize, Clone, Copy)]
pub struct PaginationRes {
    count: usize,
    total: usize,
    page: usize,
    total_pages: usize,
    has_next: bool,
    has_previous: bool,
}

impl PaginationRes {
    pub fn new(
        count: &usize,
        total: &usize,
        page: &usize,
        total_pages: &usize,
        has_next: &bool,
        has_previous: &bool,
    ) -> Self {
        Self {
            count: *count,
            total: *total,
            page: *page,
            total_pages: *total_pages,
            has_next: *has_next,
            has_previous: *has_previous,
        }
    }
}

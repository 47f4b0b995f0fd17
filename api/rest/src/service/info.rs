use actix_web::{http::StatusCode, web, HttpResponse};

use crate::{context::ApiRestCtx, model::Response};

pub fn info_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/info/registration", web::get().to(registration))
        .route("/info/page_size", web::get().to(page_size));
}

async fn registration(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    Response::data(&StatusCode::OK, &None, ctx.open_registration())
}

async fn page_size(ctx: web::Data<ApiRestCtx>) -> HttpResponse {
    Response::data(&StatusCode::OK, &None, ctx.page_size())
}

use actix_web::web;

use crate::service::{
    auth::auth_api, comment::comment_api, follow::follow_api, group::group_api, info::info_api,
    post::post_api, profile::profile_api, root::root_api, user::user_api,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api).service(
        web::scope("/api/rest")
            .configure(info_api)
            .configure(auth_api)
            .configure(user_api)
            .configure(profile_api)
            .configure(group_api)
            .configure(post_api)
            .configure(comment_api)
            .configure(follow_api),
    );
}

pub mod auth;
pub mod comment;
pub mod follow;
pub mod group;
pub mod info;
pub mod post;
pub mod profile;
pub mod root;
pub mod user;

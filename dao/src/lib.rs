use qb_db_postgresql::db::PostgresDb;
use qb_db_sqlite::db::SqliteDb;

pub mod comment;
pub mod dto;
pub mod follow;
pub mod group;
pub mod post;
pub mod user;

pub enum Db {
    PostgresqlDb(PostgresDb),
    SqliteDb(SqliteDb),
}

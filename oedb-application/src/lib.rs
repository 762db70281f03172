//! Transactional flows that tie the business layer to the
//! SQLite database and the infrastructure gateways.

#[macro_use]
extern crate log;

mod favorites;
mod manage_listings;
mod provision_users;
mod report_corrections;
mod review_listings;
mod sweep_media;

pub mod prelude {
    pub use super::{
        favorites::*, manage_listings::*, provision_users::*, report_corrections::*,
        review_listings::*, sweep_media::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use oedb_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use oedb_db_sqlite::Connections;
}

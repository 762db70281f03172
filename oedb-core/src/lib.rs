//! # oedb-core
//!
//! Business logic of openeatdb: repository and gateway abstractions plus
//! the use cases that run on top of them. Persistence and transport are
//! provided by other crates.

pub mod entities {
    pub use oedb_entities::{
        favorite::*, gallery::*, hours::*, id::*, language::*, links::*, listing::*, localized::*,
        moderation::*, rating::*, report::*, review::*, revision::*, time::*, user::*,
    };
}

pub mod favorites;
pub mod gateways;
pub mod localize;
pub mod merge;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use self::repositories::Error as RepoError;

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use oedb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod favorite;
mod listing;
mod report;
mod review;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_moderation_status(status: i16) -> Result<ModerationStatus> {
    ModerationStatus::try_from(status).map_err(|err| repo::Error::Other(err.into()))
}

fn load_role(role: i16) -> Result<Role> {
    Role::try_from(role).map_err(|err| repo::Error::Other(err.into()))
}

fn load_report_field(field: &str) -> Result<ReportField> {
    field
        .parse()
        .map_err(|_| anyhow!("Invalid report field: {field}").into())
}

// A LIMIT is mandatory for an OFFSET in SQLite
// <https://www.sqlite.org/lang_select.html>, so an offset without a
// limit gets the largest possible one.
fn sql_pagination(pagination: &Pagination) -> (Option<i64>, i64) {
    let offset = pagination.offset.unwrap_or(0) as i64;
    let limit = match pagination.limit {
        Some(limit) => Some(limit as i64),
        None if offset > 0 => Some(i64::MAX),
        None => None,
    };
    (limit, offset)
}

use std::{fmt::Display, result};

use oedb_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, sqlite, Cfg};
use oedb_application::{error::AppError, prelude as flows};
use oedb_boundary as json;
use oedb_core::{
    repositories::{ListingRepo as _, Pagination},
    usecases,
};
use oedb_entities::{id::Id, language::Language, moderation::ModerationStatus};

mod error;
mod favorites;
mod listings;
mod media;
mod reports;
mod reviews;
mod users;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

fn parse_status_param(status: Option<String>) -> result::Result<Option<ModerationStatus>, ApiError> {
    status
        .as_deref()
        .map(str::parse)
        .transpose()
        .map_err(|err| ApiError::OtherWithStatus(anyhow::anyhow!("{err}"), Status::BadRequest))
}

fn parse_lang_param(lang: Option<String>) -> result::Result<Language, ApiError> {
    lang.as_deref()
        .map(str::parse)
        .transpose()
        .map_err(|err| ApiError::OtherWithStatus(anyhow::anyhow!("{err}"), Status::BadRequest))
        .map(Option::unwrap_or_default)
}

pub fn routes() -> Vec<Route> {
    routes![
        // ---   listings   --- //
        listings::get_listings,
        listings::get_listings_count,
        listings::get_listing,
        listings::get_listing_record,
        listings::post_listing,
        listings::put_listing,
        listings::post_listing_moderation,
        // ---   reports   --- //
        reports::post_report,
        reports::get_reports,
        reports::get_reports_count,
        reports::get_listing_reports,
        reports::post_report_moderation,
        // ---   reviews   --- //
        reviews::get_listing_reviews,
        reviews::post_listing_review,
        reviews::put_review,
        reviews::delete_review,
        reviews::post_review_visibility,
        // ---   favorites   --- //
        favorites::get_favorites,
        favorites::post_toggle_favorite,
        // ---   users   --- //
        users::get_current_user,
        users::post_user,
        // ---   media   --- //
        media::post_media_sweep,
        // ---   util   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

mod authorize;
mod create_new_listing;
mod create_new_user;
mod delete_review;
mod error;
mod load_listings;
mod load_reports;
mod load_reviews;
mod moderate_listing;
mod moderate_report;
mod report_listing;
mod set_review_visibility;
mod submit_review;
mod sweep_media;
mod toggle_favorite;
mod update_listing;
mod update_review;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    authorize::*, create_new_listing::*, create_new_user::*, delete_review::*, error::Error,
    load_listings::*, load_reports::*, load_reviews::*, moderate_listing::*, moderate_report::*,
    report_listing::*, set_review_visibility::*, submit_review::*, sweep_media::*,
    toggle_favorite::*, update_listing::*, update_review::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, RepoError};
}
use self::prelude::*;

pub fn get_user<R: UserRepo>(repo: &R, account: &Account) -> Result<User> {
    Ok(repo.get_user(account.id.as_str())?)
}

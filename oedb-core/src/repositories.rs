// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.
//
// The persistence collaborator promises row-level reads and writes,
// equality filters, counts and ordering. Multi-row transactions are
// not part of the contract.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The version of the object is invalid")]
    InvalidVersion,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait ListingRepo {
    fn create_listing(&self, listing: &Listing) -> Result<()>;

    fn get_listing(&self, id: &str) -> Result<Listing>;
    fn all_listings(&self) -> Result<Vec<Listing>>;
    fn listings_with_status(
        &self,
        status: ModerationStatus,
        pagination: &Pagination,
    ) -> Result<Vec<Listing>>;
    fn count_listings_with_status(&self, status: ModerationStatus) -> Result<u64>;

    // Unconditional last-writer-wins update of all mutable columns.
    fn update_listing(&self, listing: &Listing) -> Result<()>;

    // Writes only if the stored revision still equals `expected`,
    // fails with `InvalidVersion` otherwise.
    fn update_listing_if_revision(&self, expected: Revision, listing: &Listing) -> Result<()>;

    fn set_listing_status(
        &self,
        id: &str,
        status: ModerationStatus,
        comment: Option<&str>,
        at: Timestamp,
    ) -> Result<()>;
}

pub trait ReportRepo {
    fn create_report(&self, report: &CorrectionReport) -> Result<()>;

    fn get_report(&self, id: &str) -> Result<CorrectionReport>;
    fn reports_with_status(
        &self,
        status: ModerationStatus,
        pagination: &Pagination,
    ) -> Result<Vec<CorrectionReport>>;
    fn count_reports_with_status(&self, status: ModerationStatus) -> Result<u64>;
    fn reports_of_listing(&self, listing_id: &str) -> Result<Vec<CorrectionReport>>;

    // Pending to terminal transition, fails with `InvalidVersion` if
    // the report is no longer pending.
    fn close_report_if_pending(&self, id: &str, closure: &ReportClosure) -> Result<()>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: &Review) -> Result<()>;

    fn get_review(&self, id: &str) -> Result<Review>;
    // All reviews of the listing including hidden ones, in insertion order.
    fn reviews_of_listing(&self, listing_id: &str) -> Result<Vec<Review>>;
    fn reviews_of_user(&self, user_id: &str) -> Result<Vec<Review>>;

    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: &str) -> Result<()>;

    // Aggregated externally over visible reviews only; `None` when the
    // listing has no visible reviews.
    fn load_rating_summary(&self, listing_id: &str) -> Result<Option<RatingSummary>>;
}

pub trait FavoriteRepo {
    // Fails with `AlreadyExists` when the pair is already present.
    fn add_favorite(&self, favorite: &Favorite) -> Result<()>;
    // Fails with `NotFound` when the pair is absent.
    fn remove_favorite(&self, user_id: &str, listing_id: &str) -> Result<()>;

    fn favorites_of_user(&self, user_id: &str) -> Result<Vec<Favorite>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn try_get_user_by_api_token(&self, api_token: &str) -> Result<Option<User>>;
    fn try_get_user_by_name(&self, name: &str) -> Result<Option<User>>;
}

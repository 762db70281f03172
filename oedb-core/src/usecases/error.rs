use thiserror::Error;

use crate::{
    gateways::media::MediaError,
    repositories,
    util::validate::{ListingInvalidation, ReportInvalidation, ReviewInvalidation},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name must not be empty")]
    Name,
    #[error("The address must not be empty")]
    Address,
    #[error("Invalid URL")]
    Url,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("The suggested value must not be empty")]
    SuggestedValue,
    #[error("The user name must not be empty")]
    UserName,
    #[error("The user already exists")]
    UserExists,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without authorization")]
    Unauthorized,
    #[error("The listing has not been approved")]
    ListingNotApproved,
    #[error("The report has already been moderated")]
    AlreadyModerated,
    #[error("The listing has already been reviewed by this user")]
    DuplicateReview,
    #[error("A moderation decision must approve or reject")]
    InvalidDecision,
    #[error("Concurrent modifications exhausted all merge attempts")]
    MergeConflict,
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ListingInvalidation> for Error {
    fn from(err: ListingInvalidation) -> Self {
        match err {
            ListingInvalidation::Name => Self::Name,
            ListingInvalidation::Address => Self::Address,
            ListingInvalidation::Url => Self::Url,
        }
    }
}

impl From<ReviewInvalidation> for Error {
    fn from(err: ReviewInvalidation) -> Self {
        match err {
            ReviewInvalidation::RatingValue => Self::RatingValue,
        }
    }
}

impl From<ReportInvalidation> for Error {
    fn from(err: ReportInvalidation) -> Self {
        match err {
            ReportInvalidation::SuggestedValue => Self::SuggestedValue,
        }
    }
}

use super::prelude::*;

/// Set the moderation status of a listing.
///
/// Listings may move between any two states, e.g. an approved listing
/// can be taken down again. The stored admin comment is always
/// replaced, also with `None`.
pub fn moderate_listing<R>(
    repo: &R,
    admin: &Account,
    id: &Id,
    status: ModerationStatus,
    comment: Option<String>,
) -> Result<Listing>
where
    R: ListingRepo,
{
    super::authorize_role(admin, Role::Admin)?;
    log::info!("Setting status of listing {id} to {status}");
    repo.set_listing_status(id.as_str(), status, comment.as_deref(), Timestamp::now())?;
    Ok(repo.get_listing(id.as_str())?)
}

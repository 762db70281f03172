use super::prelude::*;

/// Load a single listing, subject to the visibility rules.
///
/// Approved listings are public. Pending and rejected listings are
/// only revealed to admins and to the account that submitted them,
/// everybody else gets `NotFound` so the id does not leak.
pub fn get_visible_listing<R>(repo: &R, caller: &Caller, id: &Id) -> Result<Listing>
where
    R: ListingRepo,
{
    let listing = repo.get_listing(id.as_str())?;
    if listing.is_approved() {
        return Ok(listing);
    }
    if let Some(account) = caller.account() {
        if account.is_admin() || listing.is_created_by(&account.id) {
            return Ok(listing);
        }
    }
    Err(Error::Repo(RepoError::NotFound))
}

fn effective_status(caller: &Caller, status: Option<ModerationStatus>) -> Result<ModerationStatus> {
    let status = status.unwrap_or(ModerationStatus::Approved);
    if status != ModerationStatus::Approved && !caller.is_admin() {
        return Err(Error::Forbidden);
    }
    Ok(status)
}

/// Load a page of listings with the given status (approved if omitted).
pub fn load_listings<R>(
    repo: &R,
    caller: &Caller,
    status: Option<ModerationStatus>,
    pagination: &Pagination,
) -> Result<Vec<Listing>>
where
    R: ListingRepo,
{
    let status = effective_status(caller, status)?;
    Ok(repo.listings_with_status(status, pagination)?)
}

/// Count listings with the given status (approved if omitted).
pub fn count_listings<R>(
    repo: &R,
    caller: &Caller,
    status: Option<ModerationStatus>,
) -> Result<u64>
where
    R: ListingRepo,
{
    let status = effective_status(caller, status)?;
    Ok(repo.count_listings_with_status(status)?)
}

use super::prelude::*;

/// Load the reviews of a listing in submission order.
///
/// Hidden reviews are filtered out for the public. The author of a
/// hidden review still sees it, admins see everything.
pub fn load_reviews_of_listing<R>(
    repo: &R,
    caller: &Caller,
    listing_id: &Id,
) -> Result<Vec<Review>>
where
    R: ReviewRepo,
{
    let reviews = repo.reviews_of_listing(listing_id.as_str())?;
    if caller.is_admin() {
        return Ok(reviews);
    }
    let caller_id = caller.account_id();
    Ok(reviews
        .into_iter()
        .filter(|review| review.is_visible_to(caller_id))
        .collect())
}

pub fn load_reviews_of_user<R>(repo: &R, account: &Account) -> Result<Vec<Review>>
where
    R: ReviewRepo,
{
    Ok(repo.reviews_of_user(account.id.as_str())?)
}

// One review per account and listing. Hidden reviews block a second
// submission as well.
pub(super) fn has_user_reviewed<R>(repo: &R, user_id: &Id, listing_id: &Id) -> Result<bool>
where
    R: ReviewRepo,
{
    let reviews = repo.reviews_of_listing(listing_id.as_str())?;
    Ok(reviews.iter().any(|review| review.user_id == *user_id))
}

/// Load the rating aggregate of a listing.
///
/// `None` when no visible review exists, hidden reviews never count.
pub fn load_rating_summary<R>(repo: &R, listing_id: &Id) -> Result<Option<RatingSummary>>
where
    R: ReviewRepo,
{
    Ok(repo.load_rating_summary(listing_id.as_str())?)
}

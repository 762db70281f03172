use super::prelude::*;

/// Hide a review from the public or restore it.
///
/// The author still sees their own hidden review. The stored admin
/// comment is always replaced, also with `None`.
pub fn set_review_visibility<R>(
    repo: &R,
    admin: &Account,
    review_id: &Id,
    hidden: bool,
    comment: Option<String>,
) -> Result<Review>
where
    R: ReviewRepo,
{
    super::authorize_role(admin, Role::Admin)?;
    let mut review = repo.get_review(review_id.as_str())?;
    review.is_hidden = hidden;
    review.admin_comment = comment;
    review.updated_at = Timestamp::now();
    log::info!(
        "Setting review {review_id} of listing {} to hidden={hidden}",
        review.listing_id
    );
    repo.update_review(&review)?;
    Ok(review)
}

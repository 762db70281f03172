use super::*;

use oedb_core::gateways::media::MediaGateway;

pub fn submit_review<M>(
    connections: &sqlite::Connections,
    media: &M,
    account: &Account,
    listing_id: &Id,
    form: usecases::ReviewForm,
    images: Vec<usecases::ImageUpload>,
) -> Result<Review>
where
    M: MediaGateway,
{
    // Image uploads run while the write handle is held. The store is
    // local and uploads are small, so the lock window stays short.
    let db = connections.exclusive()?;
    let review =
        usecases::submit_review(&db, media, account, listing_id, form, images).map_err(|err| {
            warn!("Failed to submit review for listing {listing_id}: {err}");
            err
        })?;
    Ok(review)
}

pub fn update_review<M>(
    connections: &sqlite::Connections,
    media: &M,
    account: &Account,
    review_id: &Id,
    form: usecases::ReviewUpdateForm,
    new_images: Vec<usecases::ImageUpload>,
) -> Result<Review>
where
    M: MediaGateway,
{
    let db = connections.exclusive()?;
    let review = usecases::update_review(&db, media, account, review_id, form, new_images)
        .map_err(|err| {
            warn!("Failed to update review {review_id}: {err}");
            err
        })?;
    Ok(review)
}

pub fn delete_review(
    connections: &sqlite::Connections,
    account: &Account,
    review_id: &Id,
) -> Result<()> {
    let db = connections.exclusive()?;
    usecases::delete_review(&db, account, review_id).map_err(|err| {
        warn!("Failed to delete review {review_id}: {err}");
        err
    })?;
    Ok(())
}

pub fn set_review_visibility(
    connections: &sqlite::Connections,
    admin: &Account,
    review_id: &Id,
    hidden: bool,
    comment: Option<String>,
) -> Result<Review> {
    let db = connections.exclusive()?;
    let review =
        usecases::set_review_visibility(&db, admin, review_id, hidden, comment).map_err(|err| {
            warn!("Failed to change visibility of review {review_id}: {err}");
            err
        })?;
    Ok(review)
}

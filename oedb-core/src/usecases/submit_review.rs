use super::prelude::*;
use crate::{
    gateways::media::{media_path, MediaGateway},
    util::validate::Validate,
};

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewForm {
    pub rating: i8,
    pub comment: Option<String>,
}

// Images are uploaded one after the other. The first failure aborts
// the submission, files stored so far are left behind for the
// orphaned media sweep.
pub(super) fn upload_images<M>(
    media: &M,
    listing_id: &Id,
    images: Vec<ImageUpload>,
) -> Result<Gallery>
where
    M: MediaGateway,
{
    let mut urls = Vec::with_capacity(images.len());
    for image in images {
        let path = media_path(&format!("reviews/{listing_id}"), &image.file_name)?;
        let uploaded = media.upload(&path, &image.bytes)?;
        urls.push(uploaded.url);
    }
    Ok(Gallery::new(urls))
}

/// Submit a review with an optional photo gallery.
///
/// One review per account and listing. The first uploaded photo
/// becomes the cover image.
pub fn submit_review<R, M>(
    repo: &R,
    media: &M,
    account: &Account,
    listing_id: &Id,
    form: ReviewForm,
    images: Vec<ImageUpload>,
) -> Result<Review>
where
    R: ListingRepo + ReviewRepo,
    M: MediaGateway,
{
    let ReviewForm { rating, comment } = form;
    let rating = RatingValue::from(rating);
    // Validated before anything is read or written.
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    let listing = repo.get_listing(listing_id.as_str())?;
    if !listing.is_approved() {
        return Err(Error::ListingNotApproved);
    }
    if super::has_user_reviewed(repo, &account.id, listing_id)? {
        return Err(Error::DuplicateReview);
    }
    let images = upload_images(media, listing_id, images)?;
    let now = Timestamp::now();
    let review = Review {
        id: Id::new(),
        listing_id: listing_id.clone(),
        user_id: account.id.clone(),
        created_at: now,
        updated_at: now,
        rating,
        comment: comment.filter(|c| !c.trim().is_empty()),
        images,
        is_hidden: false,
        admin_comment: None,
    };
    review.validate()?;
    log::info!(
        "Creating review {} for listing {listing_id} by user {}",
        review.id,
        account.id
    );
    repo.create_review(&review)?;
    Ok(review)
}

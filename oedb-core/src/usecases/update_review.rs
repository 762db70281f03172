use super::prelude::*;
use crate::{gateways::media::MediaGateway, util::validate::Validate};

#[derive(Debug, Clone, Default)]
pub struct ReviewUpdateForm {
    pub rating: i8,
    pub comment: Option<String>,
    // Image urls to detach from the review.
    pub removed_images: Vec<String>,
}

/// Revise an existing review.
///
/// Only the author may edit, admins moderate visibility instead of
/// content. Removed images are only detached here, their files are
/// reclaimed later by the orphaned media sweep. After the edit the
/// first remaining image is the cover.
pub fn update_review<R, M>(
    repo: &R,
    media: &M,
    account: &Account,
    review_id: &Id,
    form: ReviewUpdateForm,
    new_images: Vec<super::ImageUpload>,
) -> Result<Review>
where
    R: ReviewRepo,
    M: MediaGateway,
{
    let ReviewUpdateForm {
        rating,
        comment,
        removed_images,
    } = form;
    let rating = RatingValue::from(rating);
    if !rating.is_valid() {
        return Err(Error::RatingValue);
    }
    let mut review = repo.get_review(review_id.as_str())?;
    if review.user_id != account.id {
        return Err(Error::Forbidden);
    }
    let mut retained: Vec<_> = review
        .images
        .urls()
        .iter()
        .filter(|url| !removed_images.contains(*url))
        .cloned()
        .collect();
    let uploaded = super::upload_images(media, &review.listing_id, new_images)?;
    retained.extend(Vec::from(uploaded));
    review.images = Gallery::new(retained);
    review.rating = rating;
    review.comment = comment.filter(|c| !c.trim().is_empty());
    review.updated_at = Timestamp::now();
    review.validate()?;
    log::info!("Updating review {} of listing {}", review.id, review.listing_id);
    repo.update_review(&review)?;
    Ok(review)
}

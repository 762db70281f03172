use super::*;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

fn decode_images(
    images: Vec<json::ImageData>,
) -> std::result::Result<Vec<usecases::ImageUpload>, ApiError> {
    images
        .into_iter()
        .map(|image| {
            let json::ImageData { file_name, data } = image;
            let bytes = BASE64.decode(data)?;
            Ok(usecases::ImageUpload { file_name, bytes })
        })
        .collect()
}

/// Reviews of a listing, filtered by the caller's visibility.
#[get("/listings/<id>/reviews")]
pub fn get_listing_reviews(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
) -> Result<Vec<json::Review>> {
    let db = db.shared().map_err(AppError::from)?;
    let caller = auth.caller(&db)?;
    let reviews = usecases::load_reviews_of_listing(&db, &caller, &Id::from(id))?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

#[post("/listings/<id>/reviews", format = "application/json", data = "<review>")]
pub fn post_listing_review(
    db: sqlite::Connections,
    auth: Auth,
    media: &State<Media>,
    id: String,
    review: JsonResult<json::NewReview>,
) -> Result<json::Review> {
    let json::NewReview {
        rating,
        comment,
        images,
    } = review?.into_inner();
    let images = decode_images(images)?;
    let form = usecases::ReviewForm {
        rating: rating.into(),
        comment,
    };
    let account = auth.account(&db.shared().map_err(AppError::from)?)?;
    let review = flows::submit_review(&db, &media.inner().0, &account, &Id::from(id), form, images)?;
    Ok(Json(review.into()))
}

#[put("/reviews/<id>", format = "application/json", data = "<update>")]
pub fn put_review(
    db: sqlite::Connections,
    auth: Auth,
    media: &State<Media>,
    id: String,
    update: JsonResult<json::ReviewUpdate>,
) -> Result<json::Review> {
    let json::ReviewUpdate {
        rating,
        comment,
        removed_images,
        images,
    } = update?.into_inner();
    let new_images = decode_images(images)?;
    let form = usecases::ReviewUpdateForm {
        rating: rating.into(),
        comment,
        removed_images,
    };
    let account = auth.account(&db.shared().map_err(AppError::from)?)?;
    let review = flows::update_review(&db, &media.inner().0, &account, &Id::from(id), form, new_images)?;
    Ok(Json(review.into()))
}

#[delete("/reviews/<id>")]
pub fn delete_review(db: sqlite::Connections, auth: Auth, id: String) -> Result<()> {
    let account = auth.account(&db.shared().map_err(AppError::from)?)?;
    flows::delete_review(&db, &account, &Id::from(id))?;
    Ok(Json(()))
}

#[post(
    "/reviews/<id>/visibility",
    format = "application/json",
    data = "<visibility>"
)]
pub fn post_review_visibility(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    visibility: JsonResult<json::ReviewVisibility>,
) -> Result<json::Review> {
    let json::ReviewVisibility { hidden, comment } = visibility?.into_inner();
    let admin = auth.admin(&db.shared().map_err(AppError::from)?)?;
    let review = flows::set_review_visibility(&db, &admin, &Id::from(id), hidden, comment)?;
    Ok(Json(review.into()))
}

use super::*;

impl<'a> ReviewRepo for DbReadOnly<'a> {
    fn create_review(&self, _review: &Review) -> Result<()> {
        unreachable!();
    }
    fn update_review(&self, _review: &Review) -> Result<()> {
        unreachable!();
    }
    fn delete_review(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn reviews_of_listing(&self, listing_id: &str) -> Result<Vec<Review>> {
        reviews_of_listing(&mut self.conn.borrow_mut(), listing_id)
    }
    fn reviews_of_user(&self, user_id: &str) -> Result<Vec<Review>> {
        reviews_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn load_rating_summary(&self, listing_id: &str) -> Result<Option<RatingSummary>> {
        load_rating_summary(&mut self.conn.borrow_mut(), listing_id)
    }
}

impl<'a> ReviewRepo for DbReadWrite<'a> {
    fn create_review(&self, review: &Review) -> Result<()> {
        create_review(&mut self.conn.borrow_mut(), review)
    }
    fn update_review(&self, review: &Review) -> Result<()> {
        update_review(&mut self.conn.borrow_mut(), review)
    }
    fn delete_review(&self, id: &str) -> Result<()> {
        delete_review(&mut self.conn.borrow_mut(), id)
    }

    fn get_review(&self, id: &str) -> Result<Review> {
        get_review(&mut self.conn.borrow_mut(), id)
    }
    fn reviews_of_listing(&self, listing_id: &str) -> Result<Vec<Review>> {
        reviews_of_listing(&mut self.conn.borrow_mut(), listing_id)
    }
    fn reviews_of_user(&self, user_id: &str) -> Result<Vec<Review>> {
        reviews_of_user(&mut self.conn.borrow_mut(), user_id)
    }
    fn load_rating_summary(&self, listing_id: &str) -> Result<Option<RatingSummary>> {
        load_rating_summary(&mut self.conn.borrow_mut(), listing_id)
    }
}

fn load_review(entity: models::ReviewEntity) -> Result<Review> {
    let models::ReviewEntity {
        rowid: _,
        id,
        listing_id,
        user_id,
        created_at,
        updated_at,
        rating,
        comment,
        image_url: _,
        images,
        is_hidden,
        admin_comment,
    } = entity;
    Ok(Review {
        id: id.into(),
        listing_id: listing_id.into(),
        user_id: user_id.into(),
        created_at: Timestamp::from_millis(created_at),
        updated_at: Timestamp::from_millis(updated_at),
        rating: RatingValue::from(rating as RatingValuePrimitive),
        comment,
        images: Gallery::from(util::decode_string_list(&images)?),
        is_hidden,
        admin_comment,
    })
}

fn into_new_review(review: &Review) -> Result<models::NewReview<'_>> {
    Ok(models::NewReview {
        id: review.id.as_str(),
        listing_id: review.listing_id.as_str(),
        user_id: review.user_id.as_str(),
        created_at: review.created_at.as_millis(),
        updated_at: review.updated_at.as_millis(),
        rating: i16::from(RatingValuePrimitive::from(review.rating)),
        comment: review.comment.as_deref(),
        image_url: review.images.cover(),
        images: util::encode_string_list(review.images.urls())?,
        is_hidden: review.is_hidden,
        admin_comment: review.admin_comment.as_deref(),
    })
}

fn create_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    let new_review = into_new_review(review)?;
    diesel::insert_into(schema::reviews::table)
        .values(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_review(conn: &mut SqliteConnection, id: &str) -> Result<Review> {
    use schema::reviews::dsl;
    let entity = dsl::reviews
        .filter(dsl::id.eq(id))
        .first::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?;
    load_review(entity)
}

// All reviews of the listing including hidden ones, in submission order.
fn reviews_of_listing(conn: &mut SqliteConnection, listing_id: &str) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::listing_id.eq(listing_id))
        .order_by(dsl::rowid.asc())
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_review)
        .collect()
}

fn reviews_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::user_id.eq(user_id))
        .order_by(dsl::rowid.asc())
        .load::<models::ReviewEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_review)
        .collect()
}

fn update_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    use schema::reviews::dsl;
    let new_review = into_new_review(review)?;
    let count = diesel::update(dsl::reviews.filter(dsl::id.eq(review.id.as_str())))
        .set(&new_review)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_review(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::delete(dsl::reviews.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn load_rating_summary(
    conn: &mut SqliteConnection,
    listing_id: &str,
) -> Result<Option<RatingSummary>> {
    use schema::listing_ratings::dsl;
    Ok(dsl::listing_ratings
        .filter(dsl::listing_id.eq(listing_id))
        .first::<models::ListingRatingEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(
            |models::ListingRatingEntity {
                 listing_id,
                 review_count,
                 avg_rating,
             }| RatingSummary {
                listing_id: listing_id.into(),
                review_count: review_count as u64,
                avg_rating: avg_rating.into(),
            },
        ))
}

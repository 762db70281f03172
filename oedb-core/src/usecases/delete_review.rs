use super::prelude::*;

/// Delete a review, allowed for its author and for admins.
///
/// Deleting an unknown id succeeds without an effect so that repeated
/// delete requests stay idempotent. Image files are not touched here,
/// the orphaned media sweep reclaims them.
pub fn delete_review<R>(repo: &R, account: &Account, review_id: &Id) -> Result<()>
where
    R: ReviewRepo,
{
    let review = match repo.get_review(review_id.as_str()) {
        Ok(review) => review,
        Err(RepoError::NotFound) => return Ok(()),
        Err(err) => return Err(err.into()),
    };
    if review.user_id != account.id && !account.is_admin() {
        return Err(Error::Forbidden);
    }
    log::info!(
        "Deleting review {review_id} of listing {} by user {}",
        review.listing_id,
        review.user_id
    );
    repo.delete_review(review_id.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{accounts, MockDb},
        *,
    };
    use crate::usecases;
    use oedb_entities::builders::*;

    fn seeded_db() -> MockDb {
        let db = MockDb::default();
        db.reviews.borrow_mut().push(
            Review::build()
                .id("rv1")
                .listing_id("l1")
                .user_id("u1")
                .finish(),
        );
        db
    }

    #[test]
    fn author_deletes_own_review() {
        let db = seeded_db();
        delete_review(&db, &accounts::user("u1"), &Id::from("rv1")).unwrap();
        assert!(db.reviews.borrow().is_empty());
    }

    #[test]
    fn admin_deletes_any_review() {
        let db = seeded_db();
        delete_review(&db, &accounts::admin("a1"), &Id::from("rv1")).unwrap();
        assert!(db.reviews.borrow().is_empty());
    }

    #[test]
    fn other_users_may_not_delete() {
        let db = seeded_db();
        assert!(matches!(
            delete_review(&db, &accounts::user("u2"), &Id::from("rv1")),
            Err(usecases::Error::Forbidden)
        ));
        assert_eq!(1, db.reviews.borrow().len());
    }

    #[test]
    fn deleting_twice_is_idempotent() {
        let db = seeded_db();
        delete_review(&db, &accounts::user("u1"), &Id::from("rv1")).unwrap();
        delete_review(&db, &accounts::user("u1"), &Id::from("rv1")).unwrap();
    }
}

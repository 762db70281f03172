use std::cell::{Cell, RefCell};

use super::prelude::*;
use crate::gateways::{
    media::{MediaError, MediaGateway, StoredMediaFile, UploadedMedia},
    translate::TranslationGateway,
};

pub type RepoResult<T> = std::result::Result<T, RepoError>;

pub mod accounts {
    use crate::entities::{Account, Role};

    pub fn user(id: &str) -> Account {
        Account {
            id: id.into(),
            role: Role::User,
        }
    }

    pub fn admin(id: &str) -> Account {
        Account {
            id: id.into(),
            role: Role::Admin,
        }
    }
}

/// Translation catalog without any entries.
#[derive(Debug, Default)]
pub struct DummyTranslations;

impl TranslationGateway for DummyTranslations {
    fn translate(&self, _term: &str, _lang: Language) -> Option<String> {
        None
    }
}

/// In-memory media store.
#[derive(Debug, Default)]
pub struct MockMedia {
    pub uploaded: RefCell<Vec<StoredMediaFile>>,
    pub deleted: RefCell<Vec<String>>,
    // Fail every upload once this many files are stored.
    pub fail_after: Cell<Option<usize>>,
}

impl MediaGateway for MockMedia {
    fn upload(&self, path: &str, _bytes: &[u8]) -> std::result::Result<UploadedMedia, MediaError> {
        if let Some(max) = self.fail_after.get() {
            if self.uploaded.borrow().len() >= max {
                return Err(MediaError::Other(anyhow::anyhow!(
                    "simulated upload failure"
                )));
            }
        }
        let url = format!("https://media.test/{path}");
        self.uploaded.borrow_mut().push(StoredMediaFile {
            url: url.clone(),
            uploaded_at: Timestamp::now(),
        });
        Ok(UploadedMedia { url })
    }

    fn list_files_uploaded_before(&self, cutoff: Timestamp) -> std::result::Result<Vec<StoredMediaFile>, MediaError> {
        Ok(self
            .uploaded
            .borrow()
            .iter()
            .filter(|file| file.uploaded_at < cutoff)
            .cloned()
            .collect())
    }

    fn delete(&self, url: &str) -> std::result::Result<(), MediaError> {
        self.uploaded.borrow_mut().retain(|file| file.url != url);
        self.deleted.borrow_mut().push(url.into());
        Ok(())
    }
}

/// In-memory database with row-level reads and writes, mirroring the
/// guarantees of the persistence layer.
#[derive(Debug, Default)]
pub struct MockDb {
    pub listings: RefCell<Vec<Listing>>,
    pub reports: RefCell<Vec<CorrectionReport>>,
    pub reviews: RefCell<Vec<Review>>,
    pub favorites: RefCell<Vec<Favorite>>,
    pub users: RefCell<Vec<User>>,
}

fn get_object<T, K>(objects: &RefCell<Vec<T>>, id: &str, key: K) -> RepoResult<T>
where
    T: Clone,
    K: Fn(&T) -> &str,
{
    objects
        .borrow()
        .iter()
        .find(|x| key(x) == id)
        .cloned()
        .ok_or(RepoError::NotFound)
}

fn create_object<T, K>(objects: &RefCell<Vec<T>>, object: &T, key: K) -> RepoResult<()>
where
    T: Clone,
    K: Fn(&T) -> &str,
{
    let mut objects = objects.borrow_mut();
    if objects.iter().any(|x| key(x) == key(object)) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(object.clone());
    Ok(())
}

fn update_object<T, K>(objects: &RefCell<Vec<T>>, object: &T, key: K) -> RepoResult<()>
where
    T: Clone,
    K: Fn(&T) -> &str,
{
    let mut objects = objects.borrow_mut();
    match objects.iter_mut().find(|x| key(x) == key(object)) {
        Some(stored) => {
            *stored = object.clone();
            Ok(())
        }
        None => Err(RepoError::NotFound),
    }
}

fn delete_object<T, K>(objects: &RefCell<Vec<T>>, id: &str, key: K) -> RepoResult<()>
where
    K: Fn(&T) -> &str,
{
    let mut objects = objects.borrow_mut();
    let len = objects.len();
    objects.retain(|x| key(x) != id);
    if objects.len() == len {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn paginate<T>(items: impl Iterator<Item = T>, pagination: &Pagination) -> Vec<T> {
    let offset = pagination.offset.unwrap_or(0) as usize;
    let limit = pagination.limit.map(|limit| limit as usize).unwrap_or(usize::MAX);
    items.skip(offset).take(limit).collect()
}

impl ListingRepo for MockDb {
    fn create_listing(&self, listing: &Listing) -> RepoResult<()> {
        create_object(&self.listings, listing, |l: &Listing| l.id.as_str())
    }

    fn get_listing(&self, id: &str) -> RepoResult<Listing> {
        get_object(&self.listings, id, |l: &Listing| l.id.as_str())
    }

    fn all_listings(&self) -> RepoResult<Vec<Listing>> {
        Ok(self.listings.borrow().clone())
    }

    fn listings_with_status(
        &self,
        status: ModerationStatus,
        pagination: &Pagination,
    ) -> RepoResult<Vec<Listing>> {
        let listings = self.listings.borrow();
        Ok(paginate(
            listings.iter().filter(|l| l.status == status).cloned(),
            pagination,
        ))
    }

    fn count_listings_with_status(&self, status: ModerationStatus) -> RepoResult<u64> {
        Ok(self
            .listings
            .borrow()
            .iter()
            .filter(|l| l.status == status)
            .count() as u64)
    }

    fn update_listing(&self, listing: &Listing) -> RepoResult<()> {
        update_object(&self.listings, listing, |l: &Listing| l.id.as_str())
    }

    fn update_listing_if_revision(&self, expected: Revision, listing: &Listing) -> RepoResult<()> {
        let mut listings = self.listings.borrow_mut();
        match listings.iter_mut().find(|l| l.id == listing.id) {
            Some(stored) if stored.revision == expected => {
                *stored = listing.clone();
                Ok(())
            }
            Some(_) => Err(RepoError::InvalidVersion),
            None => Err(RepoError::NotFound),
        }
    }

    fn set_listing_status(
        &self,
        id: &str,
        status: ModerationStatus,
        comment: Option<&str>,
        at: Timestamp,
    ) -> RepoResult<()> {
        let mut listings = self.listings.borrow_mut();
        let listing = listings
            .iter_mut()
            .find(|l| l.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        listing.status = status;
        listing.admin_comment = comment.map(Into::into);
        listing.updated_at = at;
        Ok(())
    }
}

impl ReportRepo for MockDb {
    fn create_report(&self, report: &CorrectionReport) -> RepoResult<()> {
        create_object(&self.reports, report, |r: &CorrectionReport| r.id.as_str())
    }

    fn get_report(&self, id: &str) -> RepoResult<CorrectionReport> {
        get_object(&self.reports, id, |r: &CorrectionReport| r.id.as_str())
    }

    fn reports_with_status(
        &self,
        status: ModerationStatus,
        pagination: &Pagination,
    ) -> RepoResult<Vec<CorrectionReport>> {
        let reports = self.reports.borrow();
        Ok(paginate(
            reports.iter().filter(|r| r.status == status).cloned(),
            pagination,
        ))
    }

    fn count_reports_with_status(&self, status: ModerationStatus) -> RepoResult<u64> {
        Ok(self
            .reports
            .borrow()
            .iter()
            .filter(|r| r.status == status)
            .count() as u64)
    }

    fn reports_of_listing(&self, listing_id: &str) -> RepoResult<Vec<CorrectionReport>> {
        Ok(self
            .reports
            .borrow()
            .iter()
            .filter(|r| r.listing_id.as_str() == listing_id)
            .cloned()
            .collect())
    }

    fn close_report_if_pending(&self, id: &str, closure: &ReportClosure) -> RepoResult<()> {
        let mut reports = self.reports.borrow_mut();
        let report = reports
            .iter_mut()
            .find(|r| r.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        if !report.status.is_pending() {
            return Err(RepoError::InvalidVersion);
        }
        report.status = closure.status;
        report.reviewed_by = Some(closure.reviewed_by.clone());
        report.reviewed_at = Some(closure.reviewed_at);
        report.admin_comment = closure.admin_comment.clone();
        Ok(())
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: &Review) -> RepoResult<()> {
        create_object(&self.reviews, review, |r: &Review| r.id.as_str())
    }

    fn get_review(&self, id: &str) -> RepoResult<Review> {
        get_object(&self.reviews, id, |r: &Review| r.id.as_str())
    }

    fn reviews_of_listing(&self, listing_id: &str) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.listing_id.as_str() == listing_id)
            .cloned()
            .collect())
    }

    fn reviews_of_user(&self, user_id: &str) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }

    fn update_review(&self, review: &Review) -> RepoResult<()> {
        update_object(&self.reviews, review, |r: &Review| r.id.as_str())
    }

    fn delete_review(&self, id: &str) -> RepoResult<()> {
        delete_object(&self.reviews, id, |r: &Review| r.id.as_str())
    }

    fn load_rating_summary(&self, listing_id: &str) -> RepoResult<Option<RatingSummary>> {
        let reviews = self.reviews.borrow();
        let visible: Vec<_> = reviews
            .iter()
            .filter(|r| r.listing_id.as_str() == listing_id && !r.is_hidden)
            .collect();
        if visible.is_empty() {
            return Ok(None);
        }
        let sum: i64 = visible
            .iter()
            .map(|r| i64::from(RatingValuePrimitive::from(r.rating)))
            .sum();
        let avg = sum as f64 / visible.len() as f64;
        Ok(Some(RatingSummary {
            listing_id: listing_id.into(),
            review_count: visible.len() as u64,
            avg_rating: avg.into(),
        }))
    }
}

impl FavoriteRepo for MockDb {
    fn add_favorite(&self, favorite: &Favorite) -> RepoResult<()> {
        let mut favorites = self.favorites.borrow_mut();
        if favorites
            .iter()
            .any(|f| f.user_id == favorite.user_id && f.listing_id == favorite.listing_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        favorites.push(favorite.clone());
        Ok(())
    }

    fn remove_favorite(&self, user_id: &str, listing_id: &str) -> RepoResult<()> {
        let mut favorites = self.favorites.borrow_mut();
        let len = favorites.len();
        favorites
            .retain(|f| !(f.user_id.as_str() == user_id && f.listing_id.as_str() == listing_id));
        if favorites.len() == len {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn favorites_of_user(&self, user_id: &str) -> RepoResult<Vec<Favorite>> {
        Ok(self
            .favorites
            .borrow()
            .iter()
            .filter(|f| f.user_id.as_str() == user_id)
            .cloned()
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        create_object(&self.users, user, |u: &User| u.id.as_str())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        update_object(&self.users, user, |u: &User| u.id.as_str())
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        get_object(&self.users, id, |u: &User| u.id.as_str())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }

    fn try_get_user_by_api_token(&self, api_token: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.api_token == api_token)
            .cloned())
    }

    fn try_get_user_by_name(&self, name: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.name == name)
            .cloned())
    }
}

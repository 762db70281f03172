pub mod prelude {
    use std::cell::{Cell, RefCell};

    pub use oedb_core::{
        entities::*,
        favorites::*,
        gateways::{
            media::{MediaError, MediaGateway, StoredMediaFile, UploadedMedia},
            translate::TranslationGateway,
        },
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Translation catalog without any entries.
    pub struct DummyTranslationGW;

    impl TranslationGateway for DummyTranslationGW {
        fn translate(&self, _term: &str, _lang: Language) -> Option<String> {
            None
        }
    }

    /// In-memory media store. Upload timestamps count up from the
    /// epoch, so a sweep with a zero minimum age reclaims every
    /// orphan without waiting.
    #[derive(Default)]
    pub struct FakeMediaGW {
        pub uploaded: RefCell<Vec<StoredMediaFile>>,
        pub deleted: RefCell<Vec<String>>,
        // Fail every upload once this many files are stored.
        pub fail_after: Cell<Option<usize>>,
        upload_seq: Cell<i64>,
    }

    impl FakeMediaGW {
        fn next_upload_time(&self) -> Timestamp {
            let seq = self.upload_seq.get();
            self.upload_seq.set(seq + 1);
            Timestamp::from_millis(seq)
        }

        pub fn store_orphan(&self, path: &str) {
            self.uploaded.borrow_mut().push(StoredMediaFile {
                url: format!("https://media.test/{path}"),
                uploaded_at: self.next_upload_time(),
            });
        }
    }

    impl MediaGateway for FakeMediaGW {
        fn upload(
            &self,
            path: &str,
            _bytes: &[u8],
        ) -> std::result::Result<UploadedMedia, MediaError> {
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
                uploaded_at: self.next_upload_time(),
            });
            Ok(UploadedMedia { url })
        }

        fn list_files_uploaded_before(
            &self,
            cutoff: Timestamp,
        ) -> std::result::Result<Vec<StoredMediaFile>, MediaError> {
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

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub translations: DummyTranslationGW,
        pub media: FakeMediaGW,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            oedb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
            Self {
                db_connections,
                translations: DummyTranslationGW,
                media: FakeMediaGW::default(),
            }
        }

        pub fn create_account(&self, name: &str, role: Role) -> Account {
            let user = User {
                id: Id::new(),
                name: name.into(),
                role,
                api_token: format!("{name}-token"),
                created_at: Timestamp::now(),
            };
            let db = self.db_connections.exclusive().unwrap();
            db.create_user(&user).unwrap();
            Account {
                id: user.id,
                role: user.role,
            }
        }

        pub fn listing_form(&self, name: &str) -> usecases::ListingForm {
            usecases::ListingForm {
                name: name.into(),
                address: "Rua do Comercio 12".into(),
                cuisines: vec!["cantonese".into()],
                ..Default::default()
            }
        }

        pub fn create_approved_listing(&self, admin: &Account, name: &str) -> Listing {
            self.create_approved_listing_from(admin, self.listing_form(name))
        }

        pub fn create_approved_listing_from(
            &self,
            admin: &Account,
            form: usecases::ListingForm,
        ) -> Listing {
            let listing = flows::create_listing(
                &self.db_connections,
                &self.translations,
                &Caller::Account(admin.clone()),
                form,
            )
            .unwrap();
            flows::moderate_listing(
                &self.db_connections,
                admin,
                &listing.id,
                ModerationStatus::Approved,
                None,
            )
            .unwrap()
        }

        pub fn get_listing(&self, id: &Id) -> Listing {
            self.db_connections
                .shared()
                .unwrap()
                .get_listing(id.as_str())
                .unwrap()
        }

        pub fn try_get_visible_listing(&self, caller: &Caller, id: &Id) -> Option<Listing> {
            let db = self.db_connections.shared().unwrap();
            match usecases::get_visible_listing(&db, caller, id) {
                Ok(listing) => Some(listing),
                Err(usecases::Error::Repo(RepoError::NotFound)) => None,
                Err(err) => panic!("failed to load listing: {err}"),
            }
        }

        pub fn get_report(&self, id: &Id) -> CorrectionReport {
            self.db_connections
                .shared()
                .unwrap()
                .get_report(id.as_str())
                .unwrap()
        }

        pub fn rating_summary(&self, listing_id: &Id) -> Option<RatingSummary> {
            self.db_connections
                .shared()
                .unwrap()
                .load_rating_summary(listing_id.as_str())
                .unwrap()
        }

        pub fn reviews_of_listing(&self, listing_id: &Id) -> Vec<Review> {
            self.visible_reviews(&Caller::Anonymous, listing_id)
        }

        pub fn visible_reviews(&self, caller: &Caller, listing_id: &Id) -> Vec<Review> {
            let db = self.db_connections.shared().unwrap();
            usecases::load_reviews_of_listing(&db, caller, listing_id).unwrap()
        }

        pub fn count_users(&self) -> usize {
            self.db_connections.shared().unwrap().count_users().unwrap()
        }

        pub fn account_by_token(&self, api_token: &str) -> Option<Account> {
            let db = self.db_connections.shared().unwrap();
            db.try_get_user_by_api_token(api_token)
                .unwrap()
                .map(|user| Account {
                    id: user.id,
                    role: user.role,
                })
        }
    }
}

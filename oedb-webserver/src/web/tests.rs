use std::{
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
    time::Duration,
};

use parking_lot::Mutex;
use rocket::{local::blocking::Client, Route};

use crate::web::{self, sqlite, Cfg};
use oedb_core::gateways::{
    media::{MediaError, MediaGateway, StoredMediaFile, UploadedMedia},
    translate::TranslationGateway,
};
use oedb_entities::{language::Language, time::Timestamp};

pub mod prelude {
    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{setup, SharedMediaGw, TestCatalog};
    pub(crate) use crate::web::sqlite;
}

/// Thread-safe in-memory media store for client tests.
///
/// Upload timestamps count up from the epoch, a sweep with a zero
/// minimum age reclaims every orphan immediately.
#[derive(Clone, Default)]
pub struct SharedMediaGw {
    pub files: Arc<Mutex<Vec<StoredMediaFile>>>,
    // Fail every upload once this many files are stored.
    pub fail_after: Arc<Mutex<Option<usize>>>,
    upload_seq: Arc<AtomicI64>,
}

impl SharedMediaGw {
    pub fn stored_urls(&self) -> Vec<String> {
        self.files.lock().iter().map(|f| f.url.clone()).collect()
    }

    fn next_upload_time(&self) -> Timestamp {
        Timestamp::from_millis(self.upload_seq.fetch_add(1, Ordering::SeqCst))
    }
}

impl MediaGateway for SharedMediaGw {
    fn upload(&self, path: &str, _bytes: &[u8]) -> Result<UploadedMedia, MediaError> {
        if let Some(max) = *self.fail_after.lock() {
            if self.files.lock().len() >= max {
                return Err(MediaError::Other(anyhow::anyhow!(
                    "simulated upload failure"
                )));
            }
        }
        let url = format!("https://media.test/{path}");
        self.files.lock().push(StoredMediaFile {
            url: url.clone(),
            uploaded_at: self.next_upload_time(),
        });
        Ok(UploadedMedia { url })
    }

    fn list_files_uploaded_before(
        &self,
        cutoff: Timestamp,
    ) -> Result<Vec<StoredMediaFile>, MediaError> {
        Ok(self
            .files
            .lock()
            .iter()
            .filter(|file| file.uploaded_at < cutoff)
            .cloned()
            .collect())
    }

    fn delete(&self, url: &str) -> Result<(), MediaError> {
        self.files.lock().retain(|file| file.url != url);
        Ok(())
    }
}

/// Minimal translation catalog covering the cuisines used in tests.
pub struct TestCatalog;

impl TranslationGateway for TestCatalog {
    fn translate(&self, term: &str, lang: Language) -> Option<String> {
        match (term, lang) {
            ("cantonese", Language::Zh) => Some("粤菜".into()),
            ("cantonese", Language::Pt) => Some("Cantonesa".into()),
            _ => None,
        }
    }
}

pub fn setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections, SharedMediaGw) {
    let _ = env_logger::builder().is_test(true).try_init();
    let connections = oedb_db_sqlite::Connections::init(":memory:", 1).unwrap();
    oedb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    let db = sqlite::Connections::from(connections);
    let media = SharedMediaGw::default();
    let gateways = web::Gateways {
        media: Box::new(media.clone()),
        translations: Box::new(TestCatalog),
    };
    let options = web::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket::config::Config::debug_default()),
        cfg: Cfg {
            media_sweep_min_age: Duration::ZERO,
        },
        version: prelude::DUMMY_VERSION,
    };
    let rocket = web::rocket_instance(options, db.clone(), gateways);
    let client = Client::tracked(rocket).unwrap();
    (client, db, media)
}

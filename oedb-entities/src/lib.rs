//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # oedb-entities
//!
//! Reusable, agnostic domain entities for openeatdb.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod favorite;
pub mod gallery;
pub mod hours;
pub mod id;
pub mod language;
pub mod links;
pub mod listing;
pub mod localized;
pub mod moderation;
pub mod rating;
pub mod report;
pub mod review;
pub mod revision;
pub mod time;
pub mod user;

#[cfg(feature = "url")]
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;

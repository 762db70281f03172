use super::*;

use oedb_core::favorites::{FavoriteChange, FavoriteSet};
use thiserror::Error;

/// A failed toggle, carrying the authoritative set that was re-read
/// after the failure. `None` when the reconciliation read failed too.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ToggleFavoriteError {
    #[source]
    pub source: error::AppError,
    pub reconciled: Option<FavoriteSet>,
}

pub fn load_favorites(
    connections: &sqlite::Connections,
    account: &Account,
) -> Result<FavoriteSet> {
    let db = connections.shared()?;
    Ok(usecases::load_favorite_set(&db, account)?)
}

/// Toggle a listing in the favorite set of an account.
///
/// On failure the stored set is re-read and attached to the error, so
/// that callers can fall back to the authoritative state instead of
/// guessing which side of the toggle was applied.
pub fn toggle_favorite(
    connections: &sqlite::Connections,
    account: &Account,
    listing_id: &Id,
) -> std::result::Result<(FavoriteSet, FavoriteChange), ToggleFavoriteError> {
    let favorites = load_favorites(connections, account).map_err(|err| ToggleFavoriteError {
        source: err,
        reconciled: None,
    })?;
    // The write handle is released before the reconciliation read.
    let result = match connections.exclusive() {
        Ok(db) => usecases::toggle_favorite(&db, account, listing_id, &favorites)
            .map_err(error::AppError::from),
        Err(err) => Err(err.into()),
    };
    result.map_err(|err| {
        warn!(
            "Failed to toggle favorite {listing_id} of user {}: {err}",
            account.id
        );
        let reconciled = load_favorites(connections, account).ok();
        ToggleFavoriteError {
            source: err,
            reconciled,
        }
    })
}

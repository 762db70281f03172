use super::prelude::*;
use crate::favorites::{FavoriteChange, FavoriteSet};

/// Load the favorite set of an account.
pub fn load_favorite_set<R>(repo: &R, account: &Account) -> Result<FavoriteSet>
where
    R: FavoriteRepo,
{
    let favorites = repo.favorites_of_user(account.id.as_str())?;
    Ok(favorites
        .into_iter()
        .map(|favorite| favorite.listing_id)
        .collect())
}

/// Toggle a listing in the favorite set of an account.
///
/// The decision is taken on the snapshot passed in, the store is then
/// brought in line with it. A pair that is already in the decided
/// state is left alone, so two racing toggles converge instead of
/// failing.
pub fn toggle_favorite<R>(
    repo: &R,
    account: &Account,
    listing_id: &Id,
    favorites: &FavoriteSet,
) -> Result<(FavoriteSet, FavoriteChange)>
where
    R: ListingRepo + FavoriteRepo,
{
    let (toggled, change) = favorites.toggled(listing_id);
    match change {
        FavoriteChange::Added => {
            // Only existing listings can be favorited.
            repo.get_listing(listing_id.as_str())?;
            let favorite = Favorite {
                user_id: account.id.clone(),
                listing_id: listing_id.clone(),
                created_at: Timestamp::now(),
            };
            match repo.add_favorite(&favorite) {
                Ok(()) | Err(RepoError::AlreadyExists) => (),
                Err(err) => return Err(err.into()),
            }
        }
        FavoriteChange::Removed => match repo.remove_favorite(account.id.as_str(), listing_id.as_str()) {
            Ok(()) | Err(RepoError::NotFound) => (),
            Err(err) => return Err(err.into()),
        },
    }
    log::debug!(
        "User {} toggled favorite {listing_id}: {change:?}",
        account.id
    );
    Ok((toggled, change))
}

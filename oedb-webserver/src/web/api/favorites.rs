use super::*;

use oedb_core::favorites::FavoriteChange;

/// Ids of the listings in the caller's favorite set.
#[get("/favorites")]
pub fn get_favorites(db: sqlite::Connections, auth: Auth) -> Result<Vec<String>> {
    let account = auth.account(&db.shared().map_err(AppError::from)?)?;
    let favorites = flows::load_favorites(&db, &account)?;
    let mut ids: Vec<_> = favorites.iter().map(ToString::to_string).collect();
    ids.sort_unstable();
    Ok(Json(ids))
}

#[post("/favorites/toggle", format = "application/json", data = "<toggle>")]
pub fn post_toggle_favorite(
    db: sqlite::Connections,
    auth: Auth,
    toggle: JsonResult<json::ToggleFavorite>,
) -> Result<json::FavoriteToggled> {
    let json::ToggleFavorite { listing_id } = toggle?.into_inner();
    let listing_id = Id::from(listing_id);
    let account = auth.account(&db.shared().map_err(AppError::from)?)?;
    let (_favorites, change) =
        flows::toggle_favorite(&db, &account, &listing_id).map_err(|err| err.source)?;
    Ok(Json(json::FavoriteToggled {
        listing_id: listing_id.into(),
        favorited: change == FavoriteChange::Added,
    }))
}

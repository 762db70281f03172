use super::*;

use oedb_core::gateways::translate::TranslationGateway;

pub fn create_listing<G>(
    connections: &sqlite::Connections,
    translations: &G,
    caller: &Caller,
    form: usecases::ListingForm,
) -> Result<Listing>
where
    G: TranslationGateway,
{
    let db = connections.exclusive()?;
    let listing = usecases::create_new_listing(&db, translations, caller, form).map_err(|err| {
        warn!("Failed to create listing: {err}");
        err
    })?;
    Ok(listing)
}

pub fn update_listing<G>(
    connections: &sqlite::Connections,
    translations: &G,
    admin: &Account,
    id: &Id,
    form: usecases::ListingForm,
) -> Result<Listing>
where
    G: TranslationGateway,
{
    let db = connections.exclusive()?;
    let listing = usecases::update_listing(&db, translations, admin, id, form).map_err(|err| {
        warn!("Failed to update listing {id}: {err}");
        err
    })?;
    Ok(listing)
}

pub fn moderate_listing(
    connections: &sqlite::Connections,
    admin: &Account,
    id: &Id,
    status: ModerationStatus,
    comment: Option<String>,
) -> Result<Listing> {
    let db = connections.exclusive()?;
    let listing = usecases::moderate_listing(&db, admin, id, status, comment).map_err(|err| {
        warn!("Failed to moderate listing {id}: {err}");
        err
    })?;
    Ok(listing)
}

use super::{create_new_listing::apply_listing_form, prelude::*, ListingForm};
use crate::{gateways::translate::TranslationGateway, util::validate::Validate};

/// Replace all editable fields of a listing with the given form.
///
/// Reserved for admins. The stored record is overwritten without a
/// revision precondition, concurrent edits follow last-writer-wins.
pub fn update_listing<R, G>(
    repo: &R,
    translations: &G,
    admin: &Account,
    id: &Id,
    form: ListingForm,
) -> Result<Listing>
where
    R: ListingRepo,
    G: TranslationGateway,
{
    super::authorize_role(admin, Role::Admin)?;
    let mut listing = repo.get_listing(id.as_str())?;
    apply_listing_form(&mut listing, form, translations);
    listing.revision = listing.revision.next();
    listing.updated_at = Timestamp::now();
    listing.validate()?;
    log::info!(
        "Updating listing {} (revision {})",
        listing.id,
        u64::from(listing.revision)
    );
    repo.update_listing(&listing)?;
    Ok(listing)
}

use super::prelude::*;
use crate::{gateways::translate::TranslationGateway, localize, util::validate::Validate};

/// Full set of editable listing fields.
///
/// Used both for public submissions and for admin full-form edits.
/// Text mirrors are supplied by the editor, cuisine mirrors are
/// recomputed from the translation catalog.
#[derive(Debug, Clone, Default)]
pub struct ListingForm {
    pub name: String,
    pub name_zh: Option<String>,
    pub name_pt: Option<String>,
    pub description: String,
    pub description_zh: Option<String>,
    pub description_pt: Option<String>,
    pub address: String,
    pub address_zh: Option<String>,
    pub address_pt: Option<String>,
    pub cuisines: Vec<String>,
    pub pet_policy: Option<String>,
    pub contact_info: Option<String>,
    pub extra_info: Option<String>,
    pub gallery: Vec<String>,
    pub menu_images: Vec<String>,
    pub opening_hours: Option<WeeklyHours>,
    pub links: SocialLinks,
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

pub(super) fn apply_listing_form<G>(listing: &mut Listing, form: ListingForm, translations: &G)
where
    G: TranslationGateway,
{
    let ListingForm {
        name,
        name_zh,
        name_pt,
        description,
        description_zh,
        description_pt,
        address,
        address_zh,
        address_pt,
        cuisines,
        pet_policy,
        contact_info,
        extra_info,
        gallery,
        menu_images,
        opening_hours,
        links,
    } = form;
    listing.name = LocalizedText {
        canonical: name,
        zh: name_zh.and_then(non_blank),
        pt: name_pt.and_then(non_blank),
    };
    listing.description = LocalizedText {
        canonical: description,
        zh: description_zh.and_then(non_blank),
        pt: description_pt.and_then(non_blank),
    };
    listing.address = LocalizedText {
        canonical: address,
        zh: address_zh.and_then(non_blank),
        pt: address_pt.and_then(non_blank),
    };
    listing.cuisines = localize::derive_cuisine_mirrors(cuisines, translations);
    listing.pet_policy = pet_policy.and_then(non_blank);
    listing.contact_info = contact_info.and_then(non_blank);
    listing.extra_info = extra_info.and_then(non_blank);
    listing.gallery = Gallery::new(gallery);
    listing.menu_images = menu_images
        .into_iter()
        .filter(|url| !url.trim().is_empty())
        .collect();
    listing.opening_hours = opening_hours.filter(|hours| !hours.is_empty());
    listing.links = SocialLinks {
        website: links.website.and_then(non_blank),
        facebook: links.facebook.and_then(non_blank),
        instagram: links.instagram.and_then(non_blank),
    };
}

/// Create a new listing in pending state from a signed-in submission.
pub fn create_new_listing<R, G>(
    repo: &R,
    translations: &G,
    caller: &Caller,
    form: ListingForm,
) -> Result<Listing>
where
    R: ListingRepo,
    G: TranslationGateway,
{
    let account = super::require_account(caller)?;
    let now = Timestamp::now();
    let mut listing = Listing {
        id: Id::new(),
        created_at: now,
        updated_at: now,
        created_by: Some(account.id.clone()),
        revision: Revision::initial(),
        status: ModerationStatus::default(),
        name: LocalizedText::default(),
        description: LocalizedText::default(),
        address: LocalizedText::default(),
        cuisines: LocalizedList::default(),
        pet_policy: None,
        contact_info: None,
        extra_info: None,
        gallery: Gallery::default(),
        menu_images: vec![],
        opening_hours: None,
        links: SocialLinks::default(),
        admin_comment: None,
    };
    apply_listing_form(&mut listing, form, translations);
    listing.validate()?;
    log::info!(
        "Creating new pending listing {} ({})",
        listing.id,
        listing.name.canonical
    );
    repo.create_listing(&listing)?;
    Ok(listing)
}

use super::*;

use oedb_entities::listing::Listing;

fn listing_form(form: json::ListingForm) -> std::result::Result<usecases::ListingForm, ApiError> {
    let json::ListingForm {
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
    let opening_hours = opening_hours.as_deref().map(str::parse).transpose()?;
    Ok(usecases::ListingForm {
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
        links: links.into(),
    })
}

fn localized_listing(
    listing: &Listing,
    lang: Language,
    rating: Option<json::RatingSummary>,
) -> json::LocalizedListing {
    json::LocalizedListing {
        id: listing.id.to_string(),
        created_at: listing.created_at.as_millis(),
        updated_at: listing.updated_at.as_millis(),
        status: listing.status.into(),
        lang: lang.into(),
        name: listing.name.resolve(lang).to_owned(),
        description: listing.description.resolve(lang).to_owned(),
        address: listing.address.resolve(lang).to_owned(),
        cuisines: listing.cuisines.resolve(lang).to_vec(),
        pet_policy: listing.pet_policy.clone(),
        contact_info: listing.contact_info.clone(),
        extra_info: listing.extra_info.clone(),
        gallery: listing.gallery.urls().to_vec(),
        image_url: listing.gallery.cover().map(ToOwned::to_owned),
        menu_images: listing.menu_images.clone(),
        opening_hours: listing.opening_hours.map(|hours| hours.to_string()),
        links: listing.links.clone().into(),
        rating,
    }
}

#[get("/listings?<status>&<limit>&<offset>")]
pub fn get_listings(
    db: sqlite::Connections,
    auth: Auth,
    status: Option<String>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<Vec<json::Listing>> {
    let status = parse_status_param(status)?;
    let pagination = Pagination { offset, limit };
    let db = db.shared().map_err(AppError::from)?;
    let caller = auth.caller(&db)?;
    let listings = usecases::load_listings(&db, &caller, status, &pagination)?;
    Ok(Json(listings.into_iter().map(Into::into).collect()))
}

#[get("/listings/count?<status>")]
pub fn get_listings_count(
    db: sqlite::Connections,
    auth: Auth,
    status: Option<String>,
) -> Result<json::ResultCount> {
    let status = parse_status_param(status)?;
    let db = db.shared().map_err(AppError::from)?;
    let caller = auth.caller(&db)?;
    let count = usecases::count_listings(&db, &caller, status)?;
    Ok(Json(json::ResultCount { count }))
}

/// Single-language projection with the rating summary attached.
#[get("/listings/<id>?<lang>", rank = 2)]
pub fn get_listing(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    lang: Option<String>,
) -> Result<json::LocalizedListing> {
    let lang = parse_lang_param(lang)?;
    let db = db.shared().map_err(AppError::from)?;
    let caller = auth.caller(&db)?;
    let listing = usecases::get_visible_listing(&db, &caller, &Id::from(id))?;
    let rating = usecases::load_rating_summary(&db, &listing.id)?.map(Into::into);
    Ok(Json(localized_listing(&listing, lang, rating)))
}

/// Full canonical record with all mirrors, for the moderation UI.
#[get("/listings/<id>/record")]
pub fn get_listing_record(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
) -> Result<json::Listing> {
    let db = db.shared().map_err(AppError::from)?;
    auth.admin(&db)?;
    let listing = db.get_listing(&id)?;
    Ok(Json(listing.into()))
}

#[post("/listings", format = "application/json", data = "<form>")]
pub fn post_listing(
    db: sqlite::Connections,
    auth: Auth,
    translations: &State<Translations>,
    form: JsonResult<json::ListingForm>,
) -> Result<json::Listing> {
    let form = listing_form(form?.into_inner())?;
    let caller = auth.caller(&db.shared().map_err(AppError::from)?)?;
    let listing = flows::create_listing(&db, &translations.inner().0, &caller, form)?;
    Ok(Json(listing.into()))
}

#[put("/listings/<id>", format = "application/json", data = "<form>")]
pub fn put_listing(
    db: sqlite::Connections,
    auth: Auth,
    translations: &State<Translations>,
    id: String,
    form: JsonResult<json::ListingForm>,
) -> Result<json::Listing> {
    let form = listing_form(form?.into_inner())?;
    let admin = auth.admin(&db.shared().map_err(AppError::from)?)?;
    let listing = flows::update_listing(&db, &translations.inner().0, &admin, &Id::from(id), form)?;
    Ok(Json(listing.into()))
}

#[post(
    "/listings/<id>/moderation",
    format = "application/json",
    data = "<decision>"
)]
pub fn post_listing_moderation(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    decision: JsonResult<json::ModerationDecision>,
) -> Result<json::Listing> {
    let json::ModerationDecision { status, comment } = decision?.into_inner();
    let admin = auth.admin(&db.shared().map_err(AppError::from)?)?;
    let listing = flows::moderate_listing(&db, &admin, &Id::from(id), status.into(), comment)?;
    Ok(Json(listing.into()))
}

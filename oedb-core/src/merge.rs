//! Applies approved correction reports to their listing.

use crate::entities::*;

/// Split a suggested value into its comma-separated parts.
///
/// Values without a comma pass through whole. Parts are trimmed and
/// empty parts are dropped.
pub fn split_values(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Apply an approved correction to the listing, in place.
///
/// Scalar corrections overwrite the canonical value and leave the
/// language mirrors as they are; mirrors only get recomputed by
/// full-form edits. Cuisine corrections replace the canonical list,
/// image and menu corrections append in order without deduplication.
pub fn apply_report(listing: &mut Listing, field: ReportField, suggested_value: &str) {
    match field {
        ReportField::PetPolicy => {
            listing.pet_policy = Some(suggested_value.trim().to_owned());
        }
        ReportField::ContactInfo => {
            listing.contact_info = Some(suggested_value.trim().to_owned());
        }
        ReportField::Other => {
            listing.extra_info = Some(suggested_value.trim().to_owned());
        }
        ReportField::Address => {
            listing.address.canonical = suggested_value.trim().to_owned();
        }
        ReportField::CuisineType => {
            listing.cuisines.canonical = split_values(suggested_value);
        }
        ReportField::Image => {
            listing.gallery.append(split_values(suggested_value));
        }
        ReportField::Menu => {
            listing.menu_images.extend(split_values(suggested_value));
        }
    }
}

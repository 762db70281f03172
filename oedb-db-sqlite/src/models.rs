#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.
//
// List-valued columns (cuisines, gallery, menu_images, images) are
// stored as JSON arrays of strings. The `image_url` columns always
// mirror the first entry of the corresponding list.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = listings, treat_none_as_null = true)]
pub struct NewListing<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
    pub created_by: Option<&'a str>,
    pub rev: i64,
    pub status: i16,
    pub name: &'a str,
    pub name_zh: Option<&'a str>,
    pub name_pt: Option<&'a str>,
    pub description: &'a str,
    pub description_zh: Option<&'a str>,
    pub description_pt: Option<&'a str>,
    pub address: &'a str,
    pub address_zh: Option<&'a str>,
    pub address_pt: Option<&'a str>,
    pub cuisines: String,
    pub cuisines_zh: String,
    pub cuisines_pt: String,
    pub pet_policy: Option<&'a str>,
    pub contact_info: Option<&'a str>,
    pub extra_info: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub gallery: String,
    pub menu_images: String,
    pub opening_hours: Option<String>,
    pub website: Option<&'a str>,
    pub facebook: Option<&'a str>,
    pub instagram: Option<&'a str>,
    pub admin_comment: Option<&'a str>,
}

#[derive(Queryable)]
pub struct ListingEntity {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub created_by: Option<String>,
    pub rev: i64,
    pub status: i16,
    pub name: String,
    pub name_zh: Option<String>,
    pub name_pt: Option<String>,
    pub description: String,
    pub description_zh: Option<String>,
    pub description_pt: Option<String>,
    pub address: String,
    pub address_zh: Option<String>,
    pub address_pt: Option<String>,
    pub cuisines: String,
    pub cuisines_zh: String,
    pub cuisines_pt: String,
    pub pet_policy: Option<String>,
    pub contact_info: Option<String>,
    pub extra_info: Option<String>,
    pub image_url: Option<String>,
    pub gallery: String,
    pub menu_images: String,
    pub opening_hours: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub admin_comment: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = correction_reports)]
pub struct NewReport<'a> {
    pub id: &'a str,
    pub listing_id: &'a str,
    pub created_at: i64,
    pub created_by: Option<&'a str>,
    pub field: String,
    pub suggested_value: &'a str,
    pub reason: Option<&'a str>,
    pub status: i16,
    pub reviewed_by: Option<&'a str>,
    pub reviewed_at: Option<i64>,
    pub admin_comment: Option<&'a str>,
}

#[derive(Queryable)]
pub struct ReportEntity {
    pub rowid: i64,
    pub id: String,
    pub listing_id: String,
    pub created_at: i64,
    pub created_by: Option<String>,
    pub field: String,
    pub suggested_value: String,
    pub reason: Option<String>,
    pub status: i16,
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<i64>,
    pub admin_comment: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = reviews, treat_none_as_null = true)]
pub struct NewReview<'a> {
    pub id: &'a str,
    pub listing_id: &'a str,
    pub user_id: &'a str,
    pub created_at: i64,
    pub updated_at: i64,
    pub rating: i16,
    pub comment: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub images: String,
    pub is_hidden: bool,
    pub admin_comment: Option<&'a str>,
}

#[derive(Queryable)]
pub struct ReviewEntity {
    pub rowid: i64,
    pub id: String,
    pub listing_id: String,
    pub user_id: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub rating: i16,
    pub comment: Option<String>,
    pub image_url: Option<String>,
    pub images: String,
    pub is_hidden: bool,
    pub admin_comment: Option<String>,
}

#[derive(Queryable)]
pub struct ListingRatingEntity {
    pub listing_id: String,
    pub review_count: i64,
    pub avg_rating: f64,
}

#[derive(Insertable)]
#[diesel(table_name = favorites)]
pub struct NewFavorite<'a> {
    pub user_id: &'a str,
    pub listing_id: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct FavoriteEntity {
    pub user_id: String,
    pub listing_id: String,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub role: i16,
    pub api_token: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub role: i16,
    pub api_token: String,
    pub created_at: i64,
}

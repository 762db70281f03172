use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Rejected,
    Pending,
    Approved,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Guest,
    User,
    Admin,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
    Pt,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum ReportField {
    PetPolicy,
    ContactInfo,
    Address,
    CuisineType,
    Image,
    Menu,
    Other,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct RatingValue(i8);

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct AvgRatingValue(f64);

impl From<i8> for RatingValue {
    fn from(from: i8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RatingSummary {
    pub review_count: u64,
    pub avg_rating: AvgRatingValue,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Full directory record with all language mirrors.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Listing {
    pub id             : String,
    pub created_at     : i64,
    pub updated_at     : i64,
    pub created_by     : Option<String>,
    pub revision       : u64,
    pub status         : ModerationStatus,
    pub name           : String,
    pub name_zh        : Option<String>,
    pub name_pt        : Option<String>,
    pub description    : String,
    pub description_zh : Option<String>,
    pub description_pt : Option<String>,
    pub address        : String,
    pub address_zh     : Option<String>,
    pub address_pt     : Option<String>,
    pub cuisines       : Vec<String>,
    pub cuisines_zh    : Vec<String>,
    pub cuisines_pt    : Vec<String>,
    pub pet_policy     : Option<String>,
    pub contact_info   : Option<String>,
    pub extra_info     : Option<String>,
    pub gallery        : Vec<String>,
    pub image_url      : Option<String>,
    pub menu_images    : Vec<String>,
    pub opening_hours  : Option<String>,
    pub links          : SocialLinks,
    pub admin_comment  : Option<String>,
}

/// Single-language projection of a listing as served to readers.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LocalizedListing {
    pub id: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub status: ModerationStatus,
    pub lang: Language,
    pub name: String,
    pub description: String,
    pub address: String,
    pub cuisines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<String>,
    pub gallery: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub menu_images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    pub links: SocialLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingSummary>,
}

/// Submission and admin edit payload for a listing.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
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
    #[serde(default)]
    pub cuisines: Vec<String>,
    pub pet_policy: Option<String>,
    pub contact_info: Option<String>,
    pub extra_info: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub menu_images: Vec<String>,
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub links: SocialLinks,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CorrectionReport {
    pub id              : String,
    pub listing_id      : String,
    pub created_at      : i64,
    pub created_by      : Option<String>,
    pub field           : ReportField,
    pub suggested_value : String,
    pub reason          : Option<String>,
    pub status          : ModerationStatus,
    pub reviewed_by     : Option<String>,
    pub reviewed_at     : Option<i64>,
    pub admin_comment   : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewReport {
    pub listing_id: String,
    pub field: ReportField,
    pub suggested_value: String,
    pub reason: Option<String>,
}

/// Moderation verdict for a listing or a correction report.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ModerationDecision {
    pub status: ModerationStatus,
    pub comment: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Review {
    pub id            : String,
    pub listing_id    : String,
    pub user_id       : String,
    pub created_at    : i64,
    pub updated_at    : i64,
    pub rating        : RatingValue,
    pub comment       : Option<String>,
    pub images        : Vec<String>,
    pub image_url     : Option<String>,
    pub is_hidden     : bool,
    pub admin_comment : Option<String>,
}

/// Base64 encoded image attachment of a review payload.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ImageData {
    pub file_name: String,
    pub data: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewReview {
    pub rating: RatingValue,
    pub comment: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageData>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ReviewUpdate {
    pub rating: RatingValue,
    pub comment: Option<String>,
    #[serde(default)]
    pub removed_images: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImageData>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ReviewVisibility {
    pub hidden: bool,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ToggleFavorite {
    pub listing_id: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct FavoriteToggled {
    pub listing_id: String,
    pub favorited: bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct User {
    pub id         : String,
    pub name       : String,
    pub role       : UserRole,
    pub created_at : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewUser {
    pub name: String,
    pub role: UserRole,
}

/// Returned exactly once, when an account is provisioned.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UserWithToken {
    pub id         : String,
    pub name       : String,
    pub role       : UserRole,
    pub api_token  : String,
    pub created_at : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct ResultCount {
    pub count: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SweepSummary {
    pub examined: u64,
    pub deleted: u64,
}

/// Structured error body of the JSON API.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error),
    error("{message}")
)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        role -> SmallInt,
        api_token -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Listings
///////////////////////////////////////////////////////////////////////

table! {
    listings (rowid) {
        rowid -> BigInt,
        id -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
        created_by -> Nullable<Text>,
        rev -> BigInt,
        status -> SmallInt,
        name -> Text,
        name_zh -> Nullable<Text>,
        name_pt -> Nullable<Text>,
        description -> Text,
        description_zh -> Nullable<Text>,
        description_pt -> Nullable<Text>,
        address -> Text,
        address_zh -> Nullable<Text>,
        address_pt -> Nullable<Text>,
        cuisines -> Text,
        cuisines_zh -> Text,
        cuisines_pt -> Text,
        pet_policy -> Nullable<Text>,
        contact_info -> Nullable<Text>,
        extra_info -> Nullable<Text>,
        image_url -> Nullable<Text>,
        gallery -> Text,
        menu_images -> Text,
        opening_hours -> Nullable<Text>,
        website -> Nullable<Text>,
        facebook -> Nullable<Text>,
        instagram -> Nullable<Text>,
        admin_comment -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Correction reports
///////////////////////////////////////////////////////////////////////

table! {
    correction_reports (rowid) {
        rowid -> BigInt,
        id -> Text,
        listing_id -> Text,
        created_at -> BigInt,
        created_by -> Nullable<Text>,
        field -> Text,
        suggested_value -> Text,
        reason -> Nullable<Text>,
        status -> SmallInt,
        reviewed_by -> Nullable<Text>,
        reviewed_at -> Nullable<BigInt>,
        admin_comment -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    reviews (rowid) {
        rowid -> BigInt,
        id -> Text,
        listing_id -> Text,
        user_id -> Text,
        created_at -> BigInt,
        updated_at -> BigInt,
        rating -> SmallInt,
        comment -> Nullable<Text>,
        image_url -> Nullable<Text>,
        images -> Text,
        is_hidden -> Bool,
        admin_comment -> Nullable<Text>,
    }
}

// Aggregate view over visible reviews.
table! {
    listing_ratings (listing_id) {
        listing_id -> Text,
        review_count -> BigInt,
        avg_rating -> Double,
    }
}

///////////////////////////////////////////////////////////////////////
// Favorites
///////////////////////////////////////////////////////////////////////

table! {
    favorites (user_id, listing_id) {
        user_id -> Text,
        listing_id -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////

allow_tables_to_appear_in_same_query!(
    correction_reports,
    favorites,
    listings,
    listing_ratings,
    reviews,
    users,
);

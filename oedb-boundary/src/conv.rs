use super::*;
use oedb_entities as e;

// NOTE:
// Request payloads are mapped to use-case parameters inside the
// webserver, because both sides of those conversions are foreign
// to this crate. Only entity conversions live here.

impl From<e::moderation::ModerationStatus> for ModerationStatus {
    fn from(from: e::moderation::ModerationStatus) -> Self {
        use e::moderation::ModerationStatus::*;
        match from {
            Rejected => ModerationStatus::Rejected,
            Pending => ModerationStatus::Pending,
            Approved => ModerationStatus::Approved,
        }
    }
}

impl From<ModerationStatus> for e::moderation::ModerationStatus {
    fn from(from: ModerationStatus) -> Self {
        use e::moderation::ModerationStatus::*;
        match from {
            ModerationStatus::Rejected => Rejected,
            ModerationStatus::Pending => Pending,
            ModerationStatus::Approved => Approved,
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Guest => UserRole::Guest,
            User => UserRole::User,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Guest => Guest,
            UserRole::User => User,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::language::Language> for Language {
    fn from(from: e::language::Language) -> Self {
        use e::language::Language::*;
        match from {
            En => Language::En,
            Zh => Language::Zh,
            Pt => Language::Pt,
        }
    }
}

impl From<Language> for e::language::Language {
    fn from(from: Language) -> Self {
        use e::language::Language::*;
        match from {
            Language::En => En,
            Language::Zh => Zh,
            Language::Pt => Pt,
        }
    }
}

impl From<e::report::ReportField> for ReportField {
    fn from(from: e::report::ReportField) -> Self {
        use e::report::ReportField::*;
        match from {
            PetPolicy => ReportField::PetPolicy,
            ContactInfo => ReportField::ContactInfo,
            Address => ReportField::Address,
            CuisineType => ReportField::CuisineType,
            Image => ReportField::Image,
            Menu => ReportField::Menu,
            Other => ReportField::Other,
        }
    }
}

impl From<ReportField> for e::report::ReportField {
    fn from(from: ReportField) -> Self {
        use e::report::ReportField::*;
        match from {
            ReportField::PetPolicy => PetPolicy,
            ReportField::ContactInfo => ContactInfo,
            ReportField::Address => Address,
            ReportField::CuisineType => CuisineType,
            ReportField::Image => Image,
            ReportField::Menu => Menu,
            ReportField::Other => Other,
        }
    }
}

impl From<e::rating::RatingValue> for RatingValue {
    fn from(from: e::rating::RatingValue) -> Self {
        let v: i8 = from.into();
        RatingValue::from(v)
    }
}

impl From<RatingValue> for e::rating::RatingValue {
    fn from(from: RatingValue) -> Self {
        e::rating::RatingValue::from(from.0)
    }
}

impl From<e::rating::AvgRatingValue> for AvgRatingValue {
    fn from(from: e::rating::AvgRatingValue) -> Self {
        let v: f64 = from.into();
        AvgRatingValue::from(v)
    }
}

impl From<e::rating::RatingSummary> for RatingSummary {
    fn from(from: e::rating::RatingSummary) -> Self {
        let e::rating::RatingSummary {
            listing_id: _,
            review_count,
            avg_rating,
        } = from;
        Self {
            review_count,
            avg_rating: avg_rating.into(),
        }
    }
}

impl From<e::links::SocialLinks> for SocialLinks {
    fn from(from: e::links::SocialLinks) -> Self {
        let e::links::SocialLinks {
            website,
            facebook,
            instagram,
        } = from;
        Self {
            website,
            facebook,
            instagram,
        }
    }
}

impl From<SocialLinks> for e::links::SocialLinks {
    fn from(from: SocialLinks) -> Self {
        let SocialLinks {
            website,
            facebook,
            instagram,
        } = from;
        Self {
            website,
            facebook,
            instagram,
        }
    }
}

impl From<e::listing::Listing> for Listing {
    fn from(from: e::listing::Listing) -> Self {
        let e::listing::Listing {
            id,
            created_at,
            updated_at,
            created_by,
            revision,
            status,
            name,
            description,
            address,
            cuisines,
            pet_policy,
            contact_info,
            extra_info,
            gallery,
            menu_images,
            opening_hours,
            links,
            admin_comment,
        } = from;
        let e::localized::LocalizedText {
            canonical: name,
            zh: name_zh,
            pt: name_pt,
        } = name;
        let e::localized::LocalizedText {
            canonical: description,
            zh: description_zh,
            pt: description_pt,
        } = description;
        let e::localized::LocalizedText {
            canonical: address,
            zh: address_zh,
            pt: address_pt,
        } = address;
        let e::localized::LocalizedList {
            canonical: cuisines,
            zh: cuisines_zh,
            pt: cuisines_pt,
        } = cuisines;
        let image_url = gallery.cover().map(ToOwned::to_owned);
        Self {
            id: id.into(),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
            created_by: created_by.map(Into::into),
            revision: revision.into(),
            status: status.into(),
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
            cuisines_zh,
            cuisines_pt,
            pet_policy,
            contact_info,
            extra_info,
            gallery: gallery.into(),
            image_url,
            menu_images,
            opening_hours: opening_hours.map(|hours| hours.to_string()),
            links: links.into(),
            admin_comment,
        }
    }
}

impl From<e::review::Review> for Review {
    fn from(from: e::review::Review) -> Self {
        let e::review::Review {
            id,
            listing_id,
            user_id,
            created_at,
            updated_at,
            rating,
            comment,
            images,
            is_hidden,
            admin_comment,
        } = from;
        let image_url = images.cover().map(ToOwned::to_owned);
        Self {
            id: id.into(),
            listing_id: listing_id.into(),
            user_id: user_id.into(),
            created_at: created_at.as_millis(),
            updated_at: updated_at.as_millis(),
            rating: rating.into(),
            comment,
            images: images.into(),
            image_url,
            is_hidden,
            admin_comment,
        }
    }
}

impl From<e::report::CorrectionReport> for CorrectionReport {
    fn from(from: e::report::CorrectionReport) -> Self {
        let e::report::CorrectionReport {
            id,
            listing_id,
            created_at,
            created_by,
            field,
            suggested_value,
            reason,
            status,
            reviewed_by,
            reviewed_at,
            admin_comment,
        } = from;
        Self {
            id: id.into(),
            listing_id: listing_id.into(),
            created_at: created_at.as_millis(),
            created_by: created_by.map(Into::into),
            field: field.into(),
            suggested_value,
            reason,
            status: status.into(),
            reviewed_by: reviewed_by.map(Into::into),
            reviewed_at: reviewed_at.map(e::time::Timestamp::as_millis),
            admin_comment,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            role,
            api_token: _api_token,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            role: role.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::user::User> for UserWithToken {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            role,
            api_token,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            role: role.into(),
            api_token,
            created_at: created_at.as_millis(),
        }
    }
}

use thiserror::Error;

use crate::{entities::*, util::parse::parse_url_param};

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error)]
pub enum ListingInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Missing address")]
    Address,
    #[error("Invalid URL")]
    Url,
}

impl Validate for Listing {
    type Error = ListingInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.canonical.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if self.address.canonical.trim().is_empty() {
            return Err(Self::Error::Address);
        }
        let SocialLinks {
            website,
            facebook,
            instagram,
        } = &self.links;
        for link in [website, facebook, instagram].into_iter().flatten() {
            parse_url_param(link).map_err(|_| Self::Error::Url)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ReviewInvalidation {
    #[error("Rating value out of range")]
    RatingValue,
}

impl Validate for Review {
    type Error = ReviewInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.rating.is_valid() {
            return Err(Self::Error::RatingValue);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ReportInvalidation {
    #[error("Missing suggested value")]
    SuggestedValue,
}

impl Validate for CorrectionReport {
    type Error = ReportInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.suggested_value.trim().is_empty() {
            return Err(Self::Error::SuggestedValue);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oedb_entities::builders::*;

    #[test]
    fn validate_listing() {
        assert!(Listing::build().finish().validate().is_err());
        assert!(Listing::build().name("Cafe").finish().validate().is_err());
        assert!(Listing::build()
            .name("Cafe")
            .address("Main street 7")
            .finish()
            .validate()
            .is_ok());
    }

    #[test]
    fn validate_listing_links() {
        let mut listing = Listing::build()
            .name("Cafe")
            .address("Main street 7")
            .finish();
        listing.links.website = Some("https://cafe.example".into());
        assert!(listing.validate().is_ok());
        listing.links.website = Some("not a url".into());
        assert!(matches!(
            listing.validate(),
            Err(ListingInvalidation::Url)
        ));
        // Blank links count as absent.
        listing.links.website = Some(" ".into());
        assert!(listing.validate().is_ok());
    }

    #[test]
    fn validate_review_rating() {
        assert!(Review::build().rating(1).finish().validate().is_ok());
        assert!(Review::build().rating(5).finish().validate().is_ok());
        assert!(Review::build().rating(0).finish().validate().is_err());
        assert!(Review::build().rating(6).finish().validate().is_err());
    }

    #[test]
    fn validate_report_suggested_value() {
        let report = CorrectionReport::build()
            .suggested_value("Dogs welcome")
            .finish();
        assert!(report.validate().is_ok());
        let report = CorrectionReport::build().suggested_value("  ").finish();
        assert!(report.validate().is_err());
    }
}

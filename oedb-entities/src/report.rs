use strum::{Display, EnumIter, EnumString};

use crate::{id::*, moderation::*, time::*};

/// Target attribute of a correction report.
///
/// The variant decides the merge semantics on approval: scalar fields
/// are overwritten, `cuisine_type` replaces the canonical list, `image`
/// and `menu` append. `other` lands in the listing's extra info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReportField {
    PetPolicy,
    ContactInfo,
    Address,
    CuisineType,
    Image,
    Menu,
    Other,
}

impl ReportField {
    /// Fields whose suggested value is comma-split into multiple values.
    pub fn is_multi_value(self) -> bool {
        matches!(self, Self::CuisineType | Self::Image | Self::Menu)
    }
}

/// A crowd-sourced correction proposal against a single listing field.
///
/// The suggested value is always a flat string, even for multi-value
/// fields. `Pending` reports await moderation; both other states are
/// terminal and freeze the record.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionReport {
    pub id              : Id,
    pub listing_id      : Id,
    pub created_at      : Timestamp,
    pub created_by      : Option<Id>,
    pub field           : ReportField,
    pub suggested_value : String,
    pub reason          : Option<String>,
    pub status          : ModerationStatus,
    pub reviewed_by     : Option<Id>,
    pub reviewed_at     : Option<Timestamp>,
    pub admin_comment   : Option<String>,
}

/// Closure data recorded when a report reaches a terminal status.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportClosure {
    pub status        : ModerationStatus,
    pub reviewed_by   : Id,
    pub reviewed_at   : Timestamp,
    pub admin_comment : Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_report_field() {
        assert_eq!(
            ReportField::PetPolicy,
            "pet_policy".parse::<ReportField>().unwrap()
        );
        assert_eq!(
            ReportField::CuisineType,
            "cuisine_type".parse::<ReportField>().unwrap()
        );
        assert_eq!(ReportField::Other, "other".parse::<ReportField>().unwrap());
        assert!("price_range".parse::<ReportField>().is_err());
    }

    #[test]
    fn multi_value_fields() {
        assert!(ReportField::CuisineType.is_multi_value());
        assert!(ReportField::Image.is_multi_value());
        assert!(ReportField::Menu.is_multi_value());
        assert!(!ReportField::PetPolicy.is_multi_value());
        assert!(!ReportField::Address.is_multi_value());
    }
}

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

pub type ModerationStatusPrimitive = i16;

/// Shared lifecycle of listings and correction reports.
///
/// Pending submissions only become visible or applied through an
/// approval. For reports both non-pending states are terminal.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModerationStatus {
    Rejected = -1,
    Pending  =  0,
    Approved =  1,
}

impl ModerationStatus {
    pub const fn default() -> Self {
        Self::Pending
    }

    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    pub fn is_terminal(self) -> bool {
        !self.is_pending()
    }
}

#[derive(Debug, Error)]
#[error("Invalid moderation status primitive: {0}")]
pub struct InvalidModerationStatusPrimitive(ModerationStatusPrimitive);

impl TryFrom<ModerationStatusPrimitive> for ModerationStatus {
    type Error = InvalidModerationStatusPrimitive;
    fn try_from(from: ModerationStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidModerationStatusPrimitive(from))
    }
}

impl From<ModerationStatus> for ModerationStatusPrimitive {
    fn from(from: ModerationStatus) -> Self {
        from.to_i16().expect("Moderation status primitive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn status_primitive_roundtrip() {
        for status in ModerationStatus::iter() {
            let primitive = ModerationStatusPrimitive::from(status);
            assert_eq!(status, ModerationStatus::try_from(primitive).unwrap());
        }
        assert!(ModerationStatus::try_from(7).is_err());
    }

    #[test]
    fn parse_status() {
        assert_eq!(
            ModerationStatus::Approved,
            "approved".parse::<ModerationStatus>().unwrap()
        );
        assert_eq!(
            ModerationStatus::Pending,
            "Pending".parse::<ModerationStatus>().unwrap()
        );
        assert!("archived".parse::<ModerationStatus>().is_err());
    }
}

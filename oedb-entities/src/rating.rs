use crate::id::*;

pub type RatingValuePrimitive = i8;

/// Star rating of a single review, valid range 1..=5.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct RatingValue(RatingValuePrimitive);

impl RatingValue {
    pub fn new<I: Into<RatingValuePrimitive>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<RatingValuePrimitive> for RatingValue {
    fn from(from: RatingValuePrimitive) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for RatingValuePrimitive {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// Average star rating over the visible reviews of a listing.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl AvgRatingValue {
    pub const fn min() -> Self {
        Self(1.0)
    }

    pub const fn max() -> Self {
        Self(5.0)
    }

    pub fn clamp(self) -> Self {
        Self(self.0.max(Self::min().0).min(Self::max().0))
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
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

impl From<RatingValue> for AvgRatingValue {
    fn from(from: RatingValue) -> Self {
        f64::from(RatingValuePrimitive::from(from)).into()
    }
}

/// Derived, read-only rating aggregate of a listing.
///
/// Computed outside the application core over visible reviews only;
/// the core never writes it.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub listing_id   : Id,
    pub review_count : u64,
    pub avg_rating   : AvgRatingValue,
}

use crate::{gallery::*, id::*, rating::*, time::*};

/// User review of a listing with an optional photo gallery.
///
/// At most one review per user and listing is expected; the constraint
/// is enforced by use-case logic, not by storage. Hidden reviews stay
/// owned by their author and visible to them.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id            : Id,
    pub listing_id    : Id,
    pub user_id       : Id,
    pub created_at    : Timestamp,
    pub updated_at    : Timestamp,
    pub rating        : RatingValue,
    pub comment       : Option<String>,
    pub images        : Gallery,
    pub is_hidden     : bool,
    pub admin_comment : Option<String>,
}

impl Review {
    /// Visibility for a non-admin caller.
    pub fn is_visible_to(&self, caller_id: Option<&Id>) -> bool {
        !self.is_hidden || caller_id == Some(&self.user_id)
    }
}

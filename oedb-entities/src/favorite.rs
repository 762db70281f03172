use crate::{id::*, time::*};

/// Pure set membership: the user bookmarked the listing.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub user_id    : Id,
    pub listing_id : Id,
    pub created_at : Timestamp,
}

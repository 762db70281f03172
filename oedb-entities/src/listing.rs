use crate::{
    gallery::*, hours::*, id::*, links::*, localized::*, moderation::*, revision::*, time::*,
};

/// Directory record of a single eatery.
///
/// Created by public submission, mutated by admin edits and by approved
/// correction reports, never hard-deleted. Visibility follows `status`.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub id            : Id,
    pub created_at    : Timestamp,
    pub updated_at    : Timestamp,
    pub created_by    : Option<Id>,
    pub revision      : Revision,
    pub status        : ModerationStatus,
    pub name          : LocalizedText,
    pub description   : LocalizedText,
    pub address       : LocalizedText,
    pub cuisines      : LocalizedList,
    pub pet_policy    : Option<String>,
    pub contact_info  : Option<String>,
    pub extra_info    : Option<String>,
    pub gallery       : Gallery,
    pub menu_images   : Vec<String>,
    pub opening_hours : Option<WeeklyHours>,
    pub links         : SocialLinks,
    pub admin_comment : Option<String>,
}

impl Listing {
    pub fn is_approved(&self) -> bool {
        self.status == ModerationStatus::Approved
    }

    pub fn is_created_by(&self, user_id: &Id) -> bool {
        self.created_by.as_ref() == Some(user_id)
    }
}

/// Outbound links of a listing.
///
/// Stored as plain strings; syntactic URL validation happens at the
/// use-case boundary.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub website   : Option<String>,
    pub facebook  : Option<String>,
    pub instagram : Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.website.is_none() && self.facebook.is_none() && self.instagram.is_none()
    }
}

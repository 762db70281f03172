pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{listing_builder::*, report_builder::*, review_builder::*};

pub mod listing_builder {

    use super::*;
    use crate::{
        gallery::*, id::*, listing::*, localized::*, moderation::*, revision::*, time::*,
    };

    #[derive(Debug)]
    pub struct ListingBuild {
        listing: Listing,
    }

    impl ListingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.listing.id = id.into();
            self
        }
        pub fn revision(mut self, v: u64) -> Self {
            self.listing.revision = v.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.listing.name.canonical = name.into();
            self
        }
        pub fn name_zh(mut self, name: &str) -> Self {
            self.listing.name.zh = Some(name.into());
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.listing.description.canonical = desc.into();
            self
        }
        pub fn address(mut self, addr: &str) -> Self {
            self.listing.address.canonical = addr.into();
            self
        }
        pub fn address_pt(mut self, addr: &str) -> Self {
            self.listing.address.pt = Some(addr.into());
            self
        }
        pub fn cuisines(mut self, cuisines: Vec<impl Into<String>>) -> Self {
            self.listing.cuisines.canonical = cuisines.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn cuisines_zh(mut self, cuisines: Vec<impl Into<String>>) -> Self {
            self.listing.cuisines.zh = cuisines.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn cuisines_pt(mut self, cuisines: Vec<impl Into<String>>) -> Self {
            self.listing.cuisines.pt = cuisines.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn pet_policy(mut self, policy: &str) -> Self {
            self.listing.pet_policy = Some(policy.into());
            self
        }
        pub fn gallery(mut self, urls: Vec<impl Into<String>>) -> Self {
            self.listing.gallery = Gallery::new(urls.into_iter().map(|x| x.into()).collect());
            self
        }
        pub fn menu_images(mut self, urls: Vec<impl Into<String>>) -> Self {
            self.listing.menu_images = urls.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn status(mut self, status: ModerationStatus) -> Self {
            self.listing.status = status;
            self
        }
        pub fn approved(self) -> Self {
            self.status(ModerationStatus::Approved)
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.listing.created_by = Some(user_id.into());
            self
        }
        pub fn finish(self) -> Listing {
            self.listing
        }
    }

    impl Builder for Listing {
        type Build = ListingBuild;
        fn build() -> ListingBuild {
            let now = Timestamp::now();
            ListingBuild {
                listing: Listing {
                    id: Id::new(),
                    created_at: now,
                    updated_at: now,
                    created_by: None,
                    revision: Revision::initial(),
                    status: ModerationStatus::default(),
                    name: LocalizedText::default(),
                    description: LocalizedText::default(),
                    address: LocalizedText::default(),
                    cuisines: LocalizedList::default(),
                    pet_policy: None,
                    contact_info: None,
                    extra_info: None,
                    gallery: Gallery::default(),
                    menu_images: vec![],
                    opening_hours: None,
                    links: Default::default(),
                    admin_comment: None,
                },
            }
        }
    }
}

pub mod report_builder {

    use super::*;
    use crate::{id::*, moderation::*, report::*, time::*};

    #[derive(Debug)]
    pub struct ReportBuild {
        report: CorrectionReport,
    }

    impl ReportBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.report.id = id.into();
            self
        }
        pub fn listing_id(mut self, id: &str) -> Self {
            self.report.listing_id = id.into();
            self
        }
        pub fn field(mut self, field: ReportField) -> Self {
            self.report.field = field;
            self
        }
        pub fn suggested_value(mut self, value: &str) -> Self {
            self.report.suggested_value = value.into();
            self
        }
        pub fn reason(mut self, reason: &str) -> Self {
            self.report.reason = Some(reason.into());
            self
        }
        pub fn status(mut self, status: ModerationStatus) -> Self {
            self.report.status = status;
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.report.created_by = Some(user_id.into());
            self
        }
        pub fn finish(self) -> CorrectionReport {
            self.report
        }
    }

    impl Builder for CorrectionReport {
        type Build = ReportBuild;
        fn build() -> ReportBuild {
            ReportBuild {
                report: CorrectionReport {
                    id: Id::new(),
                    listing_id: Id::new(),
                    created_at: Timestamp::now(),
                    created_by: None,
                    field: ReportField::Other,
                    suggested_value: String::new(),
                    reason: None,
                    status: ModerationStatus::default(),
                    reviewed_by: None,
                    reviewed_at: None,
                    admin_comment: None,
                },
            }
        }
    }
}

pub mod review_builder {

    use super::*;
    use crate::{gallery::*, id::*, rating::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn listing_id(mut self, id: &str) -> Self {
            self.review.listing_id = id.into();
            self
        }
        pub fn user_id(mut self, id: &str) -> Self {
            self.review.user_id = id.into();
            self
        }
        pub fn rating(mut self, rating: i8) -> Self {
            self.review.rating = RatingValue::from(rating);
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = Some(comment.into());
            self
        }
        pub fn images(mut self, urls: Vec<impl Into<String>>) -> Self {
            self.review.images = Gallery::new(urls.into_iter().map(|x| x.into()).collect());
            self
        }
        pub fn hidden(mut self, hidden: bool) -> Self {
            self.review.is_hidden = hidden;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            let now = Timestamp::now();
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    listing_id: Id::new(),
                    user_id: Id::new(),
                    created_at: now,
                    updated_at: now,
                    rating: RatingValue::max(),
                    comment: None,
                    images: Gallery::default(),
                    is_hidden: false,
                    admin_comment: None,
                },
            }
        }
    }
}

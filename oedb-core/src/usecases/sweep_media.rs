use std::collections::HashSet;

use super::prelude::*;
use crate::gateways::media::MediaGateway;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub examined: usize,
    pub deleted: usize,
}

/// Delete stored media files that no listing or review references.
///
/// Orphans accumulate from aborted submissions and from images that
/// were detached later. Only files uploaded before `cutoff` are
/// considered so that uploads of requests still in flight survive.
pub fn sweep_orphaned_media<R, M>(
    repo: &R,
    media: &M,
    admin: &Account,
    cutoff: Timestamp,
) -> Result<SweepSummary>
where
    R: ListingRepo + ReviewRepo,
    M: MediaGateway,
{
    super::authorize_role(admin, Role::Admin)?;
    let mut referenced = HashSet::new();
    for listing in repo.all_listings()? {
        for review in repo.reviews_of_listing(listing.id.as_str())? {
            referenced.extend(Vec::from(review.images));
        }
        referenced.extend(Vec::from(listing.gallery));
        referenced.extend(listing.menu_images);
    }
    let mut summary = SweepSummary::default();
    for file in media.list_files_uploaded_before(cutoff)? {
        summary.examined += 1;
        if referenced.contains(&file.url) {
            continue;
        }
        media.delete(&file.url)?;
        summary.deleted += 1;
    }
    log::info!(
        "Swept orphaned media: deleted {} of {} stored files",
        summary.deleted,
        summary.examined
    );
    Ok(summary)
}

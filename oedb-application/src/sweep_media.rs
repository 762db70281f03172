use std::time::Duration;

use super::*;

use oedb_core::gateways::media::MediaGateway;

/// Delete stored media files that no listing or review references.
///
/// Only files older than `min_age` are considered, uploads of requests
/// still in flight are too young to be touched.
pub fn sweep_orphaned_media<M>(
    connections: &sqlite::Connections,
    media: &M,
    admin: &Account,
    min_age: Duration,
) -> Result<usecases::SweepSummary>
where
    M: MediaGateway,
{
    let cutoff = Timestamp::now() - min_age;
    let db = connections.shared()?;
    let summary = usecases::sweep_orphaned_media(&db, media, admin, cutoff).map_err(|err| {
        warn!("Media sweep failed: {err}");
        err
    })?;
    Ok(summary)
}

use super::*;

/// Reclaim stored files that no listing or review references anymore.
#[post("/media/sweep")]
pub fn post_media_sweep(
    db: sqlite::Connections,
    auth: Auth,
    media: &State<Media>,
    cfg: &State<Cfg>,
) -> Result<json::SweepSummary> {
    let admin = auth.account(&db.shared().map_err(AppError::from)?)?;
    let summary =
        flows::sweep_orphaned_media(&db, &media.inner().0, &admin, cfg.media_sweep_min_age)?;
    Ok(Json(json::SweepSummary {
        examined: summary.examined as u64,
        deleted: summary.deleted as u64,
    }))
}

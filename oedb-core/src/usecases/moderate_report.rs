use super::prelude::*;
use crate::merge;

// Upper bound for the optimistic merge loop. Contention on a single
// listing is rare enough that more attempts would not help.
const MAX_MERGE_ATTEMPTS: usize = 5;

#[derive(Debug, Clone)]
pub struct ReportDecision {
    pub status: ModerationStatus,
    pub comment: Option<String>,
}

/// Close a pending correction report with an admin decision.
///
/// An approval first merges the suggested value into the listing and
/// then closes the report. These are two separate writes without a
/// surrounding transaction. If closing fails the merged values stay in
/// the listing and the report remains open for another attempt.
pub fn moderate_report<R>(
    repo: &R,
    admin: &Account,
    report_id: &Id,
    decision: ReportDecision,
) -> Result<CorrectionReport>
where
    R: ListingRepo + ReportRepo,
{
    super::authorize_role(admin, Role::Admin)?;
    let ReportDecision { status, comment } = decision;
    if !status.is_terminal() {
        return Err(Error::InvalidDecision);
    }
    let report = repo.get_report(report_id.as_str())?;
    if report.status.is_terminal() {
        return Err(Error::AlreadyModerated);
    }
    if status == ModerationStatus::Approved {
        apply_report_with_retry(repo, &report)?;
    }
    let closure = ReportClosure {
        status,
        reviewed_by: admin.id.clone(),
        reviewed_at: Timestamp::now(),
        admin_comment: comment,
    };
    match repo.close_report_if_pending(report_id.as_str(), &closure) {
        Ok(()) => (),
        // Another admin closed the report between our read and the
        // conditional write.
        Err(RepoError::InvalidVersion) => return Err(Error::AlreadyModerated),
        Err(err) => return Err(err.into()),
    }
    log::info!("Closed report {report_id} as {status}");
    let ReportClosure {
        status,
        reviewed_by,
        reviewed_at,
        admin_comment,
    } = closure;
    Ok(CorrectionReport {
        status,
        reviewed_by: Some(reviewed_by),
        reviewed_at: Some(reviewed_at),
        admin_comment,
        ..report
    })
}

fn apply_report_with_retry<R>(repo: &R, report: &CorrectionReport) -> Result<()>
where
    R: ListingRepo,
{
    for _ in 0..MAX_MERGE_ATTEMPTS {
        let mut listing = repo.get_listing(report.listing_id.as_str())?;
        let expected = listing.revision;
        merge::apply_report(&mut listing, report.field, &report.suggested_value);
        listing.revision = expected.next();
        listing.updated_at = Timestamp::now();
        match repo.update_listing_if_revision(expected, &listing) {
            Ok(()) => return Ok(()),
            Err(RepoError::InvalidVersion) => {
                log::debug!(
                    "Listing {} changed concurrently, retrying merge",
                    listing.id
                );
            }
            Err(err) => return Err(err.into()),
        }
    }
    Err(Error::MergeConflict)
}

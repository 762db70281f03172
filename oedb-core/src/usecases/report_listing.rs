use super::prelude::*;
use crate::util::validate::Validate;

#[derive(Debug, Clone)]
pub struct ReportForm {
    pub listing_id: Id,
    pub field: ReportField,
    pub suggested_value: String,
    pub reason: Option<String>,
}

/// File a correction report against an approved listing.
///
/// Reports are accepted from anonymous visitors as well, in that case
/// `created_by` stays empty.
pub fn report_listing<R>(repo: &R, caller: &Caller, form: ReportForm) -> Result<CorrectionReport>
where
    R: ListingRepo + ReportRepo,
{
    let ReportForm {
        listing_id,
        field,
        suggested_value,
        reason,
    } = form;
    let report = CorrectionReport {
        id: Id::new(),
        listing_id,
        created_at: Timestamp::now(),
        created_by: caller.account_id().cloned(),
        field,
        suggested_value: suggested_value.trim().to_string(),
        reason: reason.filter(|r| !r.trim().is_empty()),
        status: ModerationStatus::default(),
        reviewed_by: None,
        reviewed_at: None,
        admin_comment: None,
    };
    report.validate()?;
    let listing = repo.get_listing(report.listing_id.as_str())?;
    if !listing.is_approved() {
        return Err(Error::ListingNotApproved);
    }
    log::info!(
        "Filing {} report {} for listing {}",
        report.field,
        report.id,
        report.listing_id
    );
    repo.create_report(&report)?;
    Ok(report)
}

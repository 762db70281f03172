use super::*;

pub fn file_report(
    connections: &sqlite::Connections,
    caller: &Caller,
    form: usecases::ReportForm,
) -> Result<CorrectionReport> {
    let db = connections.exclusive()?;
    let report = usecases::report_listing(&db, caller, form).map_err(|err| {
        warn!("Failed to file correction report: {err}");
        err
    })?;
    Ok(report)
}

/// Decide a pending correction report.
///
/// An approval merges the suggestion into the listing and then closes
/// the report. The two writes are not wrapped in a transaction, a
/// failure in between leaves the merge applied and the report open.
pub fn moderate_report(
    connections: &sqlite::Connections,
    admin: &Account,
    report_id: &Id,
    decision: usecases::ReportDecision,
) -> Result<CorrectionReport> {
    let db = connections.exclusive()?;
    let report = usecases::moderate_report(&db, admin, report_id, decision).map_err(|err| {
        warn!("Failed to moderate report {report_id}: {err}");
        err
    })?;
    Ok(report)
}

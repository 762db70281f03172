use super::*;

#[post("/reports", format = "application/json", data = "<report>")]
pub fn post_report(
    db: sqlite::Connections,
    auth: Auth,
    report: JsonResult<json::NewReport>,
) -> Result<json::CorrectionReport> {
    let json::NewReport {
        listing_id,
        field,
        suggested_value,
        reason,
    } = report?.into_inner();
    let form = usecases::ReportForm {
        listing_id: listing_id.into(),
        field: field.into(),
        suggested_value,
        reason,
    };
    let caller = auth.caller(&db.shared().map_err(AppError::from)?)?;
    let report = flows::file_report(&db, &caller, form)?;
    Ok(Json(report.into()))
}

#[get("/reports?<status>&<limit>&<offset>")]
pub fn get_reports(
    db: sqlite::Connections,
    auth: Auth,
    status: Option<String>,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<Vec<json::CorrectionReport>> {
    let status = parse_status_param(status)?;
    let pagination = Pagination { offset, limit };
    let db = db.shared().map_err(AppError::from)?;
    let admin = auth.account(&db)?;
    let reports = usecases::load_reports(&db, &admin, status, &pagination)?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

#[get("/reports/count?<status>")]
pub fn get_reports_count(
    db: sqlite::Connections,
    auth: Auth,
    status: Option<String>,
) -> Result<json::ResultCount> {
    let status = parse_status_param(status)?;
    let db = db.shared().map_err(AppError::from)?;
    let admin = auth.account(&db)?;
    let count = usecases::count_reports(&db, &admin, status)?;
    Ok(Json(json::ResultCount { count }))
}

/// Correction history of a single listing.
#[get("/listings/<id>/reports")]
pub fn get_listing_reports(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
) -> Result<Vec<json::CorrectionReport>> {
    let db = db.shared().map_err(AppError::from)?;
    let admin = auth.account(&db)?;
    let reports = usecases::load_reports_of_listing(&db, &admin, &Id::from(id))?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

#[post(
    "/reports/<id>/moderation",
    format = "application/json",
    data = "<decision>"
)]
pub fn post_report_moderation(
    db: sqlite::Connections,
    auth: Auth,
    id: String,
    decision: JsonResult<json::ModerationDecision>,
) -> Result<json::CorrectionReport> {
    let json::ModerationDecision { status, comment } = decision?.into_inner();
    let decision = usecases::ReportDecision {
        status: status.into(),
        comment,
    };
    let admin = auth.admin(&db.shared().map_err(AppError::from)?)?;
    let report = flows::moderate_report(&db, &admin, &Id::from(id), decision)?;
    Ok(Json(report.into()))
}

use super::*;

impl<'a> ReportRepo for DbReadOnly<'a> {
    fn create_report(&self, _report: &CorrectionReport) -> Result<()> {
        unreachable!();
    }
    fn close_report_if_pending(&self, _id: &str, _closure: &ReportClosure) -> Result<()> {
        unreachable!();
    }

    fn get_report(&self, id: &str) -> Result<CorrectionReport> {
        get_report(&mut self.conn.borrow_mut(), id)
    }
    fn reports_with_status(
        &self,
        status: ModerationStatus,
        pagination: &Pagination,
    ) -> Result<Vec<CorrectionReport>> {
        reports_with_status(&mut self.conn.borrow_mut(), status, pagination)
    }
    fn count_reports_with_status(&self, status: ModerationStatus) -> Result<u64> {
        count_reports_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn reports_of_listing(&self, listing_id: &str) -> Result<Vec<CorrectionReport>> {
        reports_of_listing(&mut self.conn.borrow_mut(), listing_id)
    }
}

impl<'a> ReportRepo for DbReadWrite<'a> {
    fn create_report(&self, report: &CorrectionReport) -> Result<()> {
        create_report(&mut self.conn.borrow_mut(), report)
    }
    fn close_report_if_pending(&self, id: &str, closure: &ReportClosure) -> Result<()> {
        close_report_if_pending(&mut self.conn.borrow_mut(), id, closure)
    }

    fn get_report(&self, id: &str) -> Result<CorrectionReport> {
        get_report(&mut self.conn.borrow_mut(), id)
    }
    fn reports_with_status(
        &self,
        status: ModerationStatus,
        pagination: &Pagination,
    ) -> Result<Vec<CorrectionReport>> {
        reports_with_status(&mut self.conn.borrow_mut(), status, pagination)
    }
    fn count_reports_with_status(&self, status: ModerationStatus) -> Result<u64> {
        count_reports_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn reports_of_listing(&self, listing_id: &str) -> Result<Vec<CorrectionReport>> {
        reports_of_listing(&mut self.conn.borrow_mut(), listing_id)
    }
}

fn load_report(entity: models::ReportEntity) -> Result<CorrectionReport> {
    let models::ReportEntity {
        rowid: _,
        id,
        listing_id,
        created_at,
        created_by,
        field,
        suggested_value,
        reason,
        status,
        reviewed_by,
        reviewed_at,
        admin_comment,
    } = entity;
    Ok(CorrectionReport {
        id: id.into(),
        listing_id: listing_id.into(),
        created_at: Timestamp::from_millis(created_at),
        created_by: created_by.map(Into::into),
        field: load_report_field(&field)?,
        suggested_value,
        reason,
        status: load_moderation_status(status)?,
        reviewed_by: reviewed_by.map(Into::into),
        reviewed_at: reviewed_at.map(Timestamp::from_millis),
        admin_comment,
    })
}

fn into_new_report(report: &CorrectionReport) -> models::NewReport<'_> {
    models::NewReport {
        id: report.id.as_str(),
        listing_id: report.listing_id.as_str(),
        created_at: report.created_at.as_millis(),
        created_by: report.created_by.as_ref().map(Id::as_str),
        field: report.field.to_string(),
        suggested_value: &report.suggested_value,
        reason: report.reason.as_deref(),
        status: i16::from(report.status),
        reviewed_by: report.reviewed_by.as_ref().map(Id::as_str),
        reviewed_at: report.reviewed_at.map(Timestamp::as_millis),
        admin_comment: report.admin_comment.as_deref(),
    }
}

fn create_report(conn: &mut SqliteConnection, report: &CorrectionReport) -> Result<()> {
    let new_report = into_new_report(report);
    diesel::insert_into(schema::correction_reports::table)
        .values(&new_report)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_report(conn: &mut SqliteConnection, id: &str) -> Result<CorrectionReport> {
    use schema::correction_reports::dsl;
    let entity = dsl::correction_reports
        .filter(dsl::id.eq(id))
        .first::<models::ReportEntity>(conn)
        .map_err(from_diesel_err)?;
    load_report(entity)
}

// Oldest first, so the moderation queue is worked off in order.
fn reports_with_status(
    conn: &mut SqliteConnection,
    status: ModerationStatus,
    pagination: &Pagination,
) -> Result<Vec<CorrectionReport>> {
    use schema::correction_reports::dsl;
    let mut query = dsl::correction_reports
        .filter(dsl::status.eq(i16::from(status)))
        .order_by(dsl::rowid.asc())
        .into_boxed();
    let (limit, offset) = sql_pagination(pagination);
    if let Some(limit) = limit {
        query = query.limit(limit);
        if offset > 0 {
            query = query.offset(offset);
        }
    }
    query
        .load::<models::ReportEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_report)
        .collect()
}

fn count_reports_with_status(conn: &mut SqliteConnection, status: ModerationStatus) -> Result<u64> {
    use schema::correction_reports::dsl;
    Ok(dsl::correction_reports
        .filter(dsl::status.eq(i16::from(status)))
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as u64)
}

fn reports_of_listing(
    conn: &mut SqliteConnection,
    listing_id: &str,
) -> Result<Vec<CorrectionReport>> {
    use schema::correction_reports::dsl;
    dsl::correction_reports
        .filter(dsl::listing_id.eq(listing_id))
        .order_by(dsl::rowid.asc())
        .load::<models::ReportEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_report)
        .collect()
}

fn close_report_if_pending(
    conn: &mut SqliteConnection,
    id: &str,
    closure: &ReportClosure,
) -> Result<()> {
    use schema::correction_reports::dsl;
    let count = diesel::update(
        dsl::correction_reports
            .filter(dsl::id.eq(id))
            .filter(dsl::status.eq(i16::from(ModerationStatus::Pending))),
    )
    .set((
        dsl::status.eq(i16::from(closure.status)),
        dsl::reviewed_by.eq(closure.reviewed_by.as_str()),
        dsl::reviewed_at.eq(closure.reviewed_at.as_millis()),
        dsl::admin_comment.eq(closure.admin_comment.as_deref()),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        // Distinguish an already closed report from a missing row.
        let exists = dsl::correction_reports
            .filter(dsl::id.eq(id))
            .select(diesel::dsl::count(dsl::rowid))
            .first::<i64>(conn)
            .map_err(from_diesel_err)?
            > 0;
        return Err(if exists {
            repo::Error::InvalidVersion
        } else {
            repo::Error::NotFound
        });
    }
    Ok(())
}

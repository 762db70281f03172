use super::prelude::*;

/// Load a page of the moderation queue, oldest first.
pub fn load_reports<R>(
    repo: &R,
    admin: &Account,
    status: Option<ModerationStatus>,
    pagination: &Pagination,
) -> Result<Vec<CorrectionReport>>
where
    R: ReportRepo,
{
    super::authorize_role(admin, Role::Admin)?;
    let status = status.unwrap_or(ModerationStatus::Pending);
    Ok(repo.reports_with_status(status, pagination)?)
}

pub fn count_reports<R>(
    repo: &R,
    admin: &Account,
    status: Option<ModerationStatus>,
) -> Result<u64>
where
    R: ReportRepo,
{
    super::authorize_role(admin, Role::Admin)?;
    let status = status.unwrap_or(ModerationStatus::Pending);
    Ok(repo.count_reports_with_status(status)?)
}

/// Load the report history of a single listing.
pub fn load_reports_of_listing<R>(
    repo: &R,
    admin: &Account,
    listing_id: &Id,
) -> Result<Vec<CorrectionReport>>
where
    R: ReportRepo,
{
    super::authorize_role(admin, Role::Admin)?;
    Ok(repo.reports_of_listing(listing_id.as_str())?)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{accounts, MockDb},
        *,
    };
    use crate::usecases;
    use oedb_entities::builders::*;

    #[test]
    fn queue_defaults_to_pending_reports() {
        let db = MockDb::default();
        db.reports.borrow_mut().extend(vec![
            CorrectionReport::build().id("r1").listing_id("l1").finish(),
            CorrectionReport::build()
                .id("r2")
                .listing_id("l1")
                .status(ModerationStatus::Rejected)
                .finish(),
        ]);
        let queue = load_reports(
            &db,
            &accounts::admin("a1"),
            None,
            &Pagination::default(),
        )
        .unwrap();
        assert_eq!(1, queue.len());
        assert_eq!(Id::from("r1"), queue[0].id);
        assert_eq!(1, count_reports(&db, &accounts::admin("a1"), None).unwrap());
    }

    #[test]
    fn queue_is_admin_only() {
        let db = MockDb::default();
        assert!(matches!(
            load_reports(
                &db,
                &accounts::user("u1"),
                None,
                &Pagination::default()
            ),
            Err(usecases::Error::Forbidden)
        ));
    }
}

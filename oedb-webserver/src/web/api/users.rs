use super::*;

#[get("/users/current")]
pub fn get_current_user(db: sqlite::Connections, auth: Auth) -> Result<json::User> {
    let db = db.shared().map_err(AppError::from)?;
    let account = auth.account(&db)?;
    let user = usecases::get_user(&db, &account)?;
    Ok(Json(user.into()))
}

/// Provision an account. The minted api token is only ever part of
/// this one response.
#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(
    db: sqlite::Connections,
    auth: Auth,
    new_user: JsonResult<json::NewUser>,
) -> Result<json::UserWithToken> {
    let json::NewUser { name, role } = new_user?.into_inner();
    let new_user = usecases::NewUser {
        name,
        role: role.into(),
    };
    let admin = auth.admin(&db.shared().map_err(AppError::from)?)?;
    let user = flows::create_user(&db, &admin, new_user)?;
    Ok(Json(user.into()))
}

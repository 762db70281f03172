use super::*;

pub fn create_user(
    connections: &sqlite::Connections,
    admin: &Account,
    new_user: usecases::NewUser,
) -> Result<User> {
    let db = connections.exclusive()?;
    let user = usecases::create_new_user(&db, admin, new_user).map_err(|err| {
        warn!("Failed to create user: {err}");
        err
    })?;
    Ok(user)
}

/// Make sure the configured bootstrap admin account exists.
///
/// Looked up by name. Role and token are overwritten with the
/// configured values, so a token rotated in the config file takes
/// effect on the next start.
pub fn ensure_bootstrap_admin(
    connections: &sqlite::Connections,
    name: &str,
    api_token: &str,
) -> Result<User> {
    let db = connections.exclusive()?;
    let user = match db.try_get_user_by_name(name)? {
        Some(mut user) => {
            if user.role != Role::Admin || user.api_token != api_token {
                user.role = Role::Admin;
                user.api_token = api_token.to_owned();
                db.update_user(&user)?;
                info!("Updated bootstrap admin account '{name}'");
            }
            user
        }
        None => {
            let user = User {
                id: Id::new(),
                name: name.to_owned(),
                role: Role::Admin,
                api_token: api_token.to_owned(),
                created_at: Timestamp::now(),
            };
            db.create_user(&user)?;
            info!("Created bootstrap admin account '{name}'");
            user
        }
    };
    Ok(user)
}

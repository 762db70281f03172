use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub role: Role,
}

/// Register a new account. Accounts are provisioned by admins, there
/// is no self-service signup.
pub fn create_new_user<R>(repo: &R, admin: &Account, new_user: NewUser) -> Result<User>
where
    R: UserRepo,
{
    super::authorize_role(admin, Role::Admin)?;
    let NewUser { name, role } = new_user;
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(Error::UserName);
    }
    if repo.try_get_user_by_name(&name)?.is_some() {
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        name,
        role,
        api_token: String::from(Id::new()),
        created_at: Timestamp::now(),
    };
    log::debug!("Creating new user {} with role {:?}", user.name, user.role);
    repo.create_user(&user)?;
    Ok(user)
}

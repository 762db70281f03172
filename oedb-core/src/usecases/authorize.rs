use super::prelude::*;

pub fn authorize_account_by_possible_api_tokens<R: UserRepo>(
    repo: &R,
    tokens: &[String],
) -> Result<User> {
    for token in tokens {
        if let Some(user) = repo.try_get_user_by_api_token(token)? {
            return Ok(user);
        }
    }
    Err(Error::Unauthorized)
}

/// Callers below the required role are rejected with `Forbidden`.
pub fn authorize_role(account: &Account, min_required_role: Role) -> Result<()> {
    if account.role < min_required_role {
        return Err(Error::Forbidden);
    }
    Ok(())
}

/// Anonymous callers are rejected with `Unauthorized`.
pub fn require_account(caller: &Caller) -> Result<&Account> {
    caller.account().ok_or(Error::Unauthorized)
}

use std::ops::Deref;

use rocket::request::{FromRequest, Outcome, Request};

use oedb_application::error::AppError;
use oedb_core::{
    gateways::{media::MediaGateway, translate::TranslationGateway},
    repositories::UserRepo,
    usecases,
};
use oedb_entities::user::{Account, Caller, Role};

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// Credentials attached to a request.
///
/// Resolving them against the user store happens inside the request
/// handlers, the guard only collects the bearer tokens.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
}

impl Auth {
    /// The account behind one of the presented tokens.
    pub fn account<R: UserRepo>(&self, repo: &R) -> Result<Account> {
        let user = usecases::authorize_account_by_possible_api_tokens(repo, &self.bearer_tokens)?;
        Ok(Account::from(&user))
    }

    /// The account behind one of the presented tokens, admins only.
    pub fn admin<R: UserRepo>(&self, repo: &R) -> Result<Account> {
        let account = self.account(repo)?;
        usecases::authorize_role(&account, Role::Admin)?;
        Ok(account)
    }

    /// Caller identity for operations that accept anonymous visitors.
    ///
    /// A request without credentials is anonymous. Presented but
    /// invalid tokens are rejected instead of being downgraded.
    pub fn caller<R: UserRepo>(&self, repo: &R) -> Result<Caller> {
        if self.bearer_tokens.is_empty() {
            return Ok(Caller::Anonymous);
        }
        Ok(Caller::from(self.account(repo)?))
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        Outcome::Success(Self { bearer_tokens })
    }
}

pub struct Media(pub Box<dyn MediaGateway + Send + Sync>);

impl Deref for Media {
    type Target = dyn MediaGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Translations(pub Box<dyn TranslationGateway + Send + Sync>);

impl Deref for Translations {
    type Target = dyn TranslationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Version(pub &'static str);

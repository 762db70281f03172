use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use thiserror::Error;

use crate::{id::*, time::*};

/// Provisioned account record.
///
/// `api_token` is the bearer credential; it never crosses the API
/// boundary except when the account is first provisioned.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub name       : String,
    pub role       : Role,
    pub api_token  : String,
    pub created_at : Timestamp,
}

pub type RolePrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    Guest = 0,
    User  = 1,
    Admin = 2,
}

impl Default for Role {
    fn default() -> Role {
        Role::Guest
    }
}

#[derive(Debug, Error)]
#[error("Invalid role primitive: {0}")]
pub struct InvalidRolePrimitive(RolePrimitive);

impl TryFrom<RolePrimitive> for Role {
    type Error = InvalidRolePrimitive;
    fn try_from(from: RolePrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidRolePrimitive(from))
    }
}

impl From<Role> for RolePrimitive {
    fn from(from: Role) -> Self {
        from.to_i16().expect("Role primitive")
    }
}

/// Identity of an authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Id,
    pub role: Role,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role >= Role::Admin
    }
}

impl From<&User> for Account {
    fn from(from: &User) -> Self {
        Self {
            id: from.id.clone(),
            role: from.role,
        }
    }
}

/// Caller identity, passed explicitly into every operation.
///
/// There is no ambient session; operations that accept anonymous
/// callers take a [`Caller`], all others take an [`Account`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    Account(Account),
}

impl Caller {
    pub fn account(&self) -> Option<&Account> {
        match self {
            Self::Anonymous => None,
            Self::Account(account) => Some(account),
        }
    }

    pub fn account_id(&self) -> Option<&Id> {
        self.account().map(|account| &account.id)
    }

    pub fn is_admin(&self) -> bool {
        self.account().map(Account::is_admin).unwrap_or(false)
    }
}

impl Default for Caller {
    fn default() -> Caller {
        Caller::Anonymous
    }
}

impl From<Account> for Caller {
    fn from(from: Account) -> Self {
        Self::Account(from)
    }
}

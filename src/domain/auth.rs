//! Identity of the user a session token was issued for.

use serde::{Deserialize, Serialize};

/// Claims decoded from the storefront session token.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AuthenticatedUser {
    /// Backend identifier of the user.
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Grants access to the admin back-office.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    /// Expiry as a unix timestamp.
    pub exp: u64,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

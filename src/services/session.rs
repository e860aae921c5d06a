//! Decoding of the storefront session token into an [`AuthenticatedUser`].

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::domain::auth::AuthenticatedUser;
use crate::services::{ServiceError, ServiceResult};

/// Capability handed to whichever component needs the caller's identity.
#[derive(Clone)]
pub struct SessionContext {
    key: DecodingKey,
    validation: Validation,
}

impl SessionContext {
    /// Creates a context validating HS256 tokens signed with `secret`.
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Decodes a bearer token, accepting it with or without the `Bearer ` prefix.
    pub fn authenticate(&self, token: &str) -> ServiceResult<AuthenticatedUser> {
        let token = token.trim();
        let token = token.strip_prefix("Bearer ").unwrap_or(token);

        decode::<AuthenticatedUser>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                log::warn!("Rejected session token: {err}");
                ServiceError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    const SECRET: &str = "test-secret";

    fn token_for(user: &AuthenticatedUser, secret: &str) -> String {
        encode(
            &Header::default(),
            user,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn user(exp: u64) -> AuthenticatedUser {
        AuthenticatedUser {
            id: "u1".to_string(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            is_admin: true,
            exp,
        }
    }

    #[test]
    fn valid_token_yields_claims() {
        let claims = user(4_102_444_800);
        let context = SessionContext::new(SECRET);

        let decoded = context
            .authenticate(&format!("Bearer {}", token_for(&claims, SECRET)))
            .unwrap();

        assert_eq!(decoded, claims);
        assert!(decoded.is_admin());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let context = SessionContext::new(SECRET);
        let token = token_for(&user(4_102_444_800), "other-secret");

        assert!(matches!(
            context.authenticate(&token),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let context = SessionContext::new(SECRET);
        let token = token_for(&user(1_000), SECRET);

        assert!(matches!(
            context.authenticate(&token),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn garbage_is_rejected() {
        let context = SessionContext::new(SECRET);
        assert!(matches!(
            context.authenticate("not-a-token"),
            Err(ServiceError::Unauthorized)
        ));
    }
}

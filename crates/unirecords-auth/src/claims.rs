//! Access token claims.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Session identity embedded in every access token.
///
/// `role` is kept as the raw role name so a token minted for a role this
/// build does not know about still authenticates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: String,
    /// Expiration (Unix timestamp)
    pub exp: usize,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    /// The subject as a user id, if it is a valid UUID.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "ada@uni.edu".to_string(),
            name: "Ada Obi".to_string(),
            role: "STUDENT".to_string(),
            exp: 1234567890,
            iat: 1234567800,
        }
    }

    #[test]
    fn test_claims_serialize() {
        let serialized = serde_json::to_string(&claims("user-id-123")).unwrap();
        assert!(serialized.contains(r#""sub":"user-id-123""#));
        assert!(serialized.contains(r#""role":"STUDENT""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"abc","email":"e@x.io","name":"E","role":"LECTURER","exp":9999999999,"iat":9999999900}"#;
        let parsed: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.role, "LECTURER");
        assert_eq!(parsed.exp, 9999999999);
    }

    #[test]
    fn test_user_id() {
        let id = Uuid::new_v4();
        assert_eq!(claims(&id.to_string()).user_id(), Some(id));
        assert_eq!(claims("not-a-uuid").user_id(), None);
    }
}

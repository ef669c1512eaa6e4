use std::collections::BTreeMap;

use serde_json::Value;

/// Locations of the authorizer claims inside an API Gateway request
/// context. REST APIs with a Cognito authorizer use `authorizer.claims`;
/// HTTP APIs with a JWT authorizer use `authorizer.jwt.claims`.
const CLAIM_POINTERS: &[&str] = &[
    "/authorizer/claims",
    "/authorizer/lambda/claims",
    "/authorizer/jwt/claims",
];

/// Claim keys consulted, in order, when naming the caller in logs.
const NAME_CLAIMS: &[&str] = &["email", "cognito:username", "username", "sub"];

/// Caller identity as asserted by the upstream gateway.
///
/// Only ever used for logging. Nothing here is verified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub claims: BTreeMap<String, String>,
}

impl Identity {
    /// Build an identity from a claims object. Non-string claim values are
    /// skipped; anything other than an object yields `None`.
    pub fn from_claims(claims: &Value) -> Option<Self> {
        let object = claims.as_object()?;
        let claims = object
            .iter()
            .filter_map(|(key, value)| Some((key.clone(), value.as_str()?.to_string())))
            .collect();
        Some(Self { claims })
    }

    /// Find the authorizer claims inside a serialized request context.
    pub fn from_request_context(context: &Value) -> Option<Self> {
        CLAIM_POINTERS
            .iter()
            .filter_map(|pointer| context.pointer(pointer))
            .find_map(Self::from_claims)
    }

    pub fn claim(&self, key: &str) -> Option<&str> {
        self.claims
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Name to show for this caller: email, then Cognito username, then
    /// subject.
    pub fn display_name(&self) -> Option<&str> {
        NAME_CLAIMS.iter().find_map(|key| self.claim(key))
    }
}

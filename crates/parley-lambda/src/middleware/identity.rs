use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lambda_http::request::RequestContext;

use parley_core::models::identity::Identity;

/// Caller identity from the API Gateway authorizer, if any.
///
/// Never rejects: a request without an authorizer, or with claims we cannot
/// read, simply has no identity. Nothing is verified here; the gateway is
/// trusted to have done that.
#[derive(Clone, Debug, Default)]
pub struct CallerIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<RequestContext>()
            .and_then(|ctx| serde_json::to_value(ctx).ok())
            .and_then(|ctx| Identity::from_request_context(&ctx));
        Ok(CallerIdentity(identity))
    }
}

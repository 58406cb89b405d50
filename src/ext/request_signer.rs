//! Request signing contracts that attach access tokens to outbound requests.

// crates.io
use oauth2::http::{HeaderValue, header::AUTHORIZATION};
// self
use crate::{_prelude::*, auth::AccessToken, error::ConfigError};

/// Describes how to attach an [`AccessToken`] to an outbound request without constraining the
/// HTTP client type.
///
/// The trait is generic over both the request and error types so implementers can integrate with
/// any client builder while keeping this crate free of those dependencies.
pub trait RequestSignerExt<Request, Error>
where
	Self: Send + Sync,
{
	/// Consumes the provided request and injects authorization state derived from `token`.
	fn attach_token(&self, request: Request, token: &AccessToken) -> Result<Request, Error>;
}

/// Signs requests with `Authorization: Bearer <token>` (RFC 6750).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BearerAuthorization;
impl RequestSignerExt<HttpRequest, Error> for BearerAuthorization {
	fn attach_token(&self, mut request: HttpRequest, token: &AccessToken) -> Result<HttpRequest> {
		let mut value = HeaderValue::from_str(&format!("Bearer {}", token.token()))
			.map_err(|e| ConfigError::from(oauth2::http::Error::from(e)))?;

		value.set_sensitive(true);
		request.headers_mut().insert(AUTHORIZATION, value);

		Ok(request)
	}
}

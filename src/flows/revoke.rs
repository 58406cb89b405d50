//! Mollie token revocation.
//!
//! Revocation responses are returned untouched: Mollie answers `204 No Content` on success and
//! the caller decides what any other status means.

// self
use crate::{
	_prelude::*,
	flows::Client,
	http::ProviderHttpClient,
	obs::{self, FlowKind},
	provider::{Mollie, TokenTypeHint},
};

impl<C> Client<Mollie, C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Revokes an access token.
	pub async fn revoke_access_token(&self, token: &str) -> Result<HttpResponse> {
		self.revoke_token(TokenTypeHint::AccessToken, token).await
	}

	/// Revokes a refresh token.
	pub async fn revoke_refresh_token(&self, token: &str) -> Result<HttpResponse> {
		self.revoke_token(TokenTypeHint::RefreshToken, token).await
	}

	/// Sends `DELETE {api}/oauth2/tokens` for `token` and returns the raw response.
	///
	/// Only request construction and transport failures are errors; the response status is
	/// never inspected.
	pub async fn revoke_token(&self, hint: TokenTypeHint, token: &str) -> Result<HttpResponse> {
		obs::observe(FlowKind::Revocation, "revoke_token", async move {
			let request = self.provider.revoke_token_request(hint, token)?;

			self.send(request).await
		})
		.await
	}
}

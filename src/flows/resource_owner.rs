//! Resource-owner profile lookup and bearer-authenticated requests.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	ext::{BearerAuthorization, RequestSignerExt},
	flows::Client,
	http::{self, ProviderHttpClient},
	obs::{self, FlowKind},
	provider::ProviderStrategy,
};

impl<P, C> Client<P, C>
where
	P: ProviderStrategy,
	C: ?Sized + ProviderHttpClient,
{
	/// Fetches the profile of the party that authorized `token`.
	pub async fn get_resource_owner(&self, token: &AccessToken) -> Result<P::ResourceOwner> {
		obs::observe(FlowKind::ResourceOwner, "get_resource_owner", async move {
			let url = self.provider.resource_owner_details_url(token);
			let request = self.authenticated_request(Method::GET, &url, token)?;
			let response = self.fetch_mapping(request).await?;

			Ok(self.provider.create_resource_owner(response, token))
		})
		.await
	}

	/// Builds a bodyless request carrying the provider's default headers and
	/// `Authorization: Bearer <token>`.
	pub fn authenticated_request(
		&self,
		method: Method,
		url: &Url,
		token: &AccessToken,
	) -> Result<HttpRequest> {
		let request =
			http::form_request(method, url, self.provider.default_headers(), std::iter::empty())?;

		BearerAuthorization.attach_token(request, token)
	}
}

//! Token exchange against the provider's token endpoint.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, ScopeList},
	flows::Client,
	http::{self, ProviderHttpClient},
	obs::{self, FlowKind},
	provider::{GrantType, ProviderStrategy},
};

/// Grant parameters supplied by the caller of [`Client::get_access_token`].
///
/// `params` win over the client-identifying defaults. A `scope` list is joined with the
/// provider's separator and replaces any `scope` entry in `params`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenOptions {
	/// Grant-specific form parameters (`code`, `refresh_token`, `username`, ...).
	pub params: BTreeMap<String, String>,
	/// Requested scopes.
	pub scope: Option<ScopeList>,
}
impl TokenOptions {
	/// Options for the `authorization_code` grant.
	pub fn authorization_code(code: impl Into<String>) -> Self {
		Self::default().with_param("code", code)
	}

	/// Options for the `refresh_token` grant.
	pub fn refresh_token(refresh_token: impl Into<String>) -> Self {
		Self::default().with_param("refresh_token", refresh_token)
	}

	/// Adds or replaces a form parameter.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());

		self
	}

	/// Sets the requested scopes.
	pub fn with_scope(mut self, scope: impl Into<ScopeList>) -> Self {
		self.scope = Some(scope.into());

		self
	}
}
impl Debug for TokenOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenOptions")
			.field("params", &self.params.keys().collect::<Vec<_>>())
			.field("scope", &self.scope)
			.finish()
	}
}

impl<P, C> Client<P, C>
where
	P: ProviderStrategy,
	C: ?Sized + ProviderHttpClient,
{
	/// Requests an access token with `grant`.
	///
	/// The form carries the provider's client credentials, `code_verifier` when a PKCE verifier
	/// is remembered, `grant_type`, and the caller's options. The response must pass the
	/// provider's check and be a key-value mapping.
	pub async fn get_access_token(
		&self,
		grant: GrantType,
		options: TokenOptions,
	) -> Result<AccessToken> {
		obs::observe(FlowKind::AccessToken, "get_access_token", async move {
			let request = self.access_token_request(grant, options)?;
			let response = self.fetch_mapping(request).await?;

			Ok(AccessToken::from_response(response)?)
		})
		.await
	}

	/// Builds the token-exchange request without sending it.
	pub fn access_token_request(
		&self,
		grant: GrantType,
		options: TokenOptions,
	) -> Result<HttpRequest> {
		let TokenOptions { mut params, scope } = options;

		if let Some(scope) = scope {
			params.insert("scope".into(), scope.join(self.provider.scope_separator()));
		}

		let mut defaults = self.provider.credentials().form_params();

		if let Some(verifier) = self.pkce_code().filter(|verifier| !verifier.is_empty()) {
			defaults.insert("code_verifier".into(), verifier);
		}

		let form = grant.prepare_request_parameters(defaults, params)?;
		let url = self.provider.base_access_token_url(&form);

		Ok(http::form_request(
			Method::POST,
			&url,
			self.provider.default_headers(),
			form.iter().map(|(key, value)| (key.as_str(), value.as_str())),
		)?)
	}
}

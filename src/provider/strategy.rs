//! Capability interface the engine consumes from a provider adapter.
//!
//! The engine only knows how to speak OAuth 2.0; everything provider specific (endpoint URLs,
//! scope defaults, error-body conventions, resource-owner shape) is supplied through
//! [`ProviderStrategy`]. The hooks use crate-owned data types so adapters never depend on a
//! particular HTTP client.

// crates.io
use oauth2::http::HeaderMap;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credentials, ScopeList},
	error::IdentityProviderError,
	http::{RawResponse, ResponseBody},
};

/// Provider hooks consumed by [`Client`](crate::flows::Client).
///
/// Implementors are required to be `Send + Sync`. Override only what you need: scopes, separator,
/// PKCE, and headers have defaults matching a plain OAuth 2.0 provider.
pub trait ProviderStrategy
where
	Self: 'static + Send + Sync,
{
	/// Profile type produced by [`create_resource_owner`](Self::create_resource_owner).
	type ResourceOwner: ResourceOwner;

	/// Client credentials attached to authorization URLs and token requests.
	fn credentials(&self) -> &Credentials;

	/// Authorization page the end user is redirected to.
	fn base_authorization_url(&self) -> Url;

	/// Token endpoint; `params` are the form parameters about to be sent.
	fn base_access_token_url(&self, params: &BTreeMap<String, String>) -> Url;

	/// Endpoint returning the profile of the token's resource owner.
	fn resource_owner_details_url(&self, token: &AccessToken) -> Url;

	/// Scopes requested when the caller supplies none.
	fn default_scopes(&self) -> ScopeList {
		ScopeList::default()
	}

	/// Separator used to join scope lists.
	fn scope_separator(&self) -> &str {
		","
	}

	/// PKCE challenge method, or `None` to skip PKCE.
	fn pkce_method(&self) -> Option<PkceMethod> {
		None
	}

	/// Headers attached to every request the provider issues.
	fn default_headers(&self) -> HeaderMap {
		HeaderMap::new()
	}

	/// Inspects a parsed response and fails when it signals an error.
	fn check_response(
		&self,
		response: &RawResponse,
		body: &ResponseBody,
	) -> Result<(), IdentityProviderError>;

	/// Wraps a profile mapping into the provider's resource-owner type.
	fn create_resource_owner(
		&self,
		response: Map<String, Value>,
		token: &AccessToken,
	) -> Self::ResourceOwner;
}

/// Profile of the party that authorized an access token.
pub trait ResourceOwner
where
	Self: Send + Sync,
{
	/// Identifier of the resource owner.
	fn id(&self) -> Result<&str>;

	/// Unmodified profile mapping.
	fn to_raw_map(&self) -> &Map<String, Value>;
}

/// PKCE challenge methods (RFC 7636).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PkceMethod {
	/// SHA-256 digest of the verifier, base64url encoded.
	S256,
	/// Verifier sent verbatim.
	#[serde(rename = "plain")]
	Plain,
}
impl PkceMethod {
	/// Returns the RFC 7636 identifier for the challenge method.
	pub const fn as_str(self) -> &'static str {
		match self {
			PkceMethod::S256 => "S256",
			PkceMethod::Plain => "plain",
		}
	}
}
impl Display for PkceMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

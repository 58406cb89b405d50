//! Provider-agnostic OAuth 2.0 client driven by a [`ProviderStrategy`].
//!
//! [`Client`] owns the transport and the per-client authorization state (CSRF `state`, PKCE
//! verifier) while the provider supplies endpoints, scopes, and response checks. Each operation
//! lives in its own module: `authorization` builds redirect URLs, `access_token` runs the token
//! exchange, `resource_owner` fetches the owner profile, and `revoke` covers Mollie's
//! revocation endpoint.

pub mod access_token;
pub mod authorization;
pub mod common;
pub mod resource_owner;
pub mod revoke;

pub use access_token::*;
pub use authorization::*;

// self
use crate::{
	_prelude::*,
	http::ProviderHttpClient,
	provider::{Mollie, ProviderStrategy},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Client bound to the Mollie adapter.
pub type MollieClient<C> = Client<Mollie, C>;
/// Mollie client on the crate's default reqwest transport.
#[cfg(feature = "reqwest")]
pub type ReqwestMollieClient = Client<Mollie, ReqwestHttpClient>;

/// Runs OAuth 2.0 operations against a single provider.
///
/// The remembered `state` and PKCE verifier are overwritten by every
/// [`authorization_url`](Client::authorization_url) call; persist them between the redirect and
/// the token exchange (see [`Client::set_pkce_code`]) when the callback is handled by another
/// process or client instance.
pub struct Client<P, C>
where
	P: ProviderStrategy,
	C: ?Sized + ProviderHttpClient,
{
	/// Provider adapter supplying endpoints, scopes, and response checks.
	pub provider: P,
	/// HTTP transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Source of CSRF `state` values.
	pub state_generator: Arc<dyn StateGenerator>,
	state: RwLock<Option<String>>,
	pkce_code: RwLock<Option<String>>,
}
impl<P, C> Client<P, C>
where
	P: ProviderStrategy,
	C: ?Sized + ProviderHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(provider: P, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			provider,
			http_client: http_client.into(),
			state_generator: Arc::new(RandomStateGenerator),
			state: RwLock::new(None),
			pkce_code: RwLock::new(None),
		}
	}

	/// Replaces the CSRF `state` generator.
	pub fn with_state_generator(mut self, generator: impl 'static + StateGenerator) -> Self {
		self.state_generator = Arc::new(generator);

		self
	}

	/// `state` produced by the last authorization URL, if any.
	pub fn state(&self) -> Option<String> {
		self.state.read().clone()
	}

	/// PKCE verifier produced by the last authorization URL, if any.
	pub fn pkce_code(&self) -> Option<String> {
		self.pkce_code.read().clone()
	}

	/// Restores a PKCE verifier so the next token exchange sends it as `code_verifier`.
	pub fn set_pkce_code(&self, code: impl Into<String>) {
		*self.pkce_code.write() = Some(code.into());
	}

	/// Forgets the PKCE verifier.
	pub fn clear_pkce_code(&self) {
		*self.pkce_code.write() = None;
	}
}
#[cfg(feature = "reqwest")]
impl<P> Client<P, ReqwestHttpClient>
where
	P: ProviderStrategy,
{
	/// Creates a client with its own reqwest-backed transport.
	pub fn new(provider: P) -> Self {
		Self::with_http_client(provider, ReqwestHttpClient::default())
	}
}
impl<P, C> Debug for Client<P, C>
where
	P: ProviderStrategy + Debug,
	C: ?Sized + ProviderHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("provider", &self.provider)
			.field("state", &*self.state.read())
			.field("pkce_code_set", &self.pkce_code.read().is_some())
			.finish()
	}
}

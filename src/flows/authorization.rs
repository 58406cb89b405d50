//! Authorization redirect URLs with CSRF state and optional PKCE.
//!
//! [`Client::authorization_url`] assembles the provider's authorize URL, remembers the `state`
//! and PKCE verifier on the client, and returns both alongside the URL so callers can persist
//! them across the redirect.

// crates.io
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};
// self
use crate::{
	_prelude::*,
	auth::ScopeList,
	flows::Client,
	http::ProviderHttpClient,
	obs::{self, FlowKind},
	provider::{PkceMethod, ProviderStrategy},
};

const STATE_BYTES: usize = 16;
const PKCE_VERIFIER_LEN: usize = 64;

/// Source of CSRF `state` values.
pub trait StateGenerator
where
	Self: Send + Sync,
{
	/// Produces a fresh, unguessable state value.
	fn generate(&self) -> String;
}

/// Default generator: 16 random bytes rendered as 32 lowercase hex characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStateGenerator;
impl StateGenerator for RandomStateGenerator {
	fn generate(&self) -> String {
		let bytes: [u8; STATE_BYTES] = rand::random();

		bytes.iter().map(|byte| format!("{byte:02x}")).collect()
	}
}

/// Caller overrides for [`Client::authorization_url`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorizationOptions {
	/// Explicit `state`; generated when absent or empty.
	pub state: Option<String>,
	/// Requested scopes; the provider defaults apply when absent or empty.
	pub scope: Option<ScopeList>,
	/// Redirect URI overriding the one in the provider credentials.
	pub redirect_uri: Option<String>,
	/// `approval_prompt` value; defaults to `auto`.
	pub approval_prompt: Option<String>,
	/// Additional query parameters appended after the standard ones.
	pub extra_params: Vec<(String, String)>,
}
impl AuthorizationOptions {
	/// Sets an explicit `state`.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}

	/// Sets the requested scopes.
	pub fn with_scope(mut self, scope: impl Into<ScopeList>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Overrides the redirect URI.
	pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}

	/// Overrides `approval_prompt` (Mollie accepts `auto` and `force`).
	pub fn with_approval_prompt(mut self, approval_prompt: impl Into<String>) -> Self {
		self.approval_prompt = Some(approval_prompt.into());

		self
	}

	/// Appends an extra query parameter.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.extra_params.push((key.into(), value.into()));

		self
	}
}

/// Authorization URL plus the values that must survive the redirect.
#[derive(Clone)]
pub struct AuthorizationRequest {
	/// URL the end user should be sent to.
	pub url: Url,
	/// `state` embedded in the URL; compare it with the one on the callback.
	pub state: String,
	/// PKCE verifier to send with the token exchange, when PKCE is enabled.
	pub pkce_code: Option<String>,
}
impl AuthorizationRequest {
	/// Returns true if `returned_state` matches the state embedded in the URL.
	pub fn state_matches(&self, returned_state: &str) -> bool {
		self.state == returned_state
	}
}
impl Debug for AuthorizationRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthorizationRequest")
			.field("url", &self.url)
			.field("state", &self.state)
			.field("pkce_code_set", &self.pkce_code.is_some())
			.finish()
	}
}

impl<P, C> Client<P, C>
where
	P: ProviderStrategy,
	C: ?Sized + ProviderHttpClient,
{
	/// Builds the URL that starts the authorization code flow.
	///
	/// Query parameters: `state`, `scope`, `response_type=code`, `approval_prompt`, the PKCE
	/// challenge when the provider enables PKCE, `redirect_uri`, `client_id`, then any extra
	/// caller parameters. Parameters are appended to whatever query the base URL already has.
	///
	/// Building the URL currently never fails; the `Result` is kept for API stability.
	pub fn authorization_url(&self, options: AuthorizationOptions) -> Result<AuthorizationRequest> {
		obs::observe_sync(FlowKind::Authorization, "authorization_url", || {
			Ok(self.build_authorization_request(options))
		})
	}

	fn build_authorization_request(&self, options: AuthorizationOptions) -> AuthorizationRequest {
		let AuthorizationOptions { state, scope, redirect_uri, approval_prompt, extra_params } =
			options;
		let state = state
			.filter(|state| !state.is_empty())
			.unwrap_or_else(|| self.state_generator.generate());
		let scope = scope
			.filter(|scope| !scope.is_empty())
			.unwrap_or_else(|| self.provider.default_scopes());
		let credentials = self.provider.credentials();
		let redirect_uri = redirect_uri.or_else(|| credentials.redirect_uri.clone());
		let pkce = self.provider.pkce_method().map(|method| {
			let verifier = random_string(PKCE_VERIFIER_LEN);
			let challenge = compute_pkce_challenge(method, &verifier);

			(method, verifier, challenge)
		});
		let mut url = self.provider.base_authorization_url();

		{
			let mut pairs = url.query_pairs_mut();

			pairs.append_pair("state", &state);
			pairs.append_pair("scope", &scope.join(self.provider.scope_separator()));
			pairs.append_pair("response_type", "code");
			pairs.append_pair("approval_prompt", approval_prompt.as_deref().unwrap_or("auto"));

			if let Some((method, _, challenge)) = &pkce {
				pairs.append_pair("code_challenge", challenge);
				pairs.append_pair("code_challenge_method", method.as_str());
			}
			if let Some(redirect_uri) = &redirect_uri {
				pairs.append_pair("redirect_uri", redirect_uri);
			}
			if let Some(client_id) = &credentials.client_id {
				pairs.append_pair("client_id", client_id);
			}

			for (key, value) in &extra_params {
				pairs.append_pair(key, value);
			}
		}

		let pkce_code = pkce.map(|(_, verifier, _)| verifier);

		*self.state.write() = Some(state.clone());

		if let Some(verifier) = &pkce_code {
			*self.pkce_code.write() = Some(verifier.clone());
		}

		AuthorizationRequest { url, state, pkce_code }
	}
}

fn random_string(len: usize) -> String {
	rand::rng().sample_iter(Alphanumeric).take(len).map(char::from).collect()
}

fn compute_pkce_challenge(method: PkceMethod, verifier: &str) -> String {
	match method {
		PkceMethod::S256 => URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes())),
		PkceMethod::Plain => verifier.to_owned(),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn random_state_is_lowercase_hex() {
		let state = RandomStateGenerator.generate();

		assert_eq!(state.len(), 32);
		assert!(state.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
		assert_ne!(state, RandomStateGenerator.generate());
	}

	#[test]
	fn s256_challenge_matches_rfc_7636_vector() {
		let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";

		assert_eq!(
			compute_pkce_challenge(PkceMethod::S256, verifier),
			"E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
		);
		assert_eq!(compute_pkce_challenge(PkceMethod::Plain, verifier), verifier);
	}

	#[test]
	fn verifiers_are_alphanumeric() {
		let verifier = random_string(PKCE_VERIFIER_LEN);

		assert_eq!(verifier.len(), PKCE_VERIFIER_LEN);
		assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));
	}
}

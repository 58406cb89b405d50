//! Mollie Connect adapter.
//!
//! [`Mollie`] implements [`ProviderStrategy`] for Mollie's OAuth 2.0 endpoints: authorization on
//! the web dashboard host, token exchange and revocation on the API host, and the organization
//! profile as resource owner. Pair it with [`Client`](crate::flows::Client) (or the
//! [`MollieClient`](crate::flows::MollieClient) alias) to run the flows.

pub mod options;
pub mod resource_owner;
pub mod scope;

pub use options::*;
pub use resource_owner::*;
pub use scope::*;

// crates.io
use oauth2::http::{HeaderMap, HeaderValue, Method, header::USER_AGENT};
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credentials, ScopeList},
	error::{ConfigError, IdentityProviderError},
	http::{self, RawResponse, ResponseBody},
	provider::{PkceMethod, ProviderStrategy},
};

/// Default Mollie API host (token exchange, revocation, organization profile).
pub const DEFAULT_API_URL: &str = "https://api.mollie.com";
/// Default Mollie web host (authorization page).
pub const DEFAULT_WEB_URL: &str = "https://my.mollie.com";
/// Prefix every Mollie app client identifier carries.
pub const CLIENT_ID_PREFIX: &str = "app_";

/// `token_type_hint` values accepted by the revocation endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenTypeHint {
	/// Revokes an access token.
	AccessToken,
	/// Revokes a refresh token.
	RefreshToken,
}
impl TokenTypeHint {
	/// Returns the wire value of the hint.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenTypeHint::AccessToken => "access_token",
			TokenTypeHint::RefreshToken => "refresh_token",
		}
	}
}
impl Display for TokenTypeHint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// API and web base URLs every Mollie endpoint is derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MollieEndpoints {
	api: Url,
	web: Url,
}
impl MollieEndpoints {
	/// Validates and stores both base URLs.
	pub fn new(api: &str, web: &str) -> Result<Self, ConfigError> {
		Ok(Self { api: parse_base_url("api", api)?, web: parse_base_url("web", web)? })
	}

	/// API base URL.
	pub fn api(&self) -> &Url {
		&self.api
	}

	/// Web base URL.
	pub fn web(&self) -> &Url {
		&self.web
	}

	/// `{web}/oauth2/authorize`
	pub fn authorization(&self) -> Url {
		join(&self.web, &["oauth2", "authorize"])
	}

	/// `{api}/oauth2/tokens`, shared by token exchange and revocation.
	pub fn tokens(&self) -> Url {
		join(&self.api, &["oauth2", "tokens"])
	}

	/// `{api}/v2/organizations/me`
	pub fn organization(&self) -> Url {
		join(&self.api, &["v2", "organizations", "me"])
	}
}

/// Mollie Connect provider adapter.
#[derive(Clone, Debug)]
pub struct Mollie {
	credentials: Credentials,
	endpoints: MollieEndpoints,
	pkce_method: Option<PkceMethod>,
}
impl Mollie {
	/// Creates the adapter against Mollie's production hosts.
	///
	/// Fails with [`ConfigError::InvalidClientId`] when a client identifier is supplied without
	/// the `app_` prefix. Performs no network activity.
	pub fn new(options: MollieOptions) -> Result<Self> {
		if options.client_id.as_deref().is_some_and(|id| !id.starts_with(CLIENT_ID_PREFIX)) {
			return Err(ConfigError::InvalidClientId { prefix: CLIENT_ID_PREFIX }.into());
		}

		let (credentials, pkce_method) = options.into_credentials();
		let endpoints = MollieEndpoints::new(DEFAULT_API_URL, DEFAULT_WEB_URL)?;

		Ok(Self { credentials, endpoints, pkce_method })
	}

	/// Replaces the API base URL; affects every URL built afterwards.
	pub fn set_api_url(&mut self, url: impl AsRef<str>) -> Result<&mut Self> {
		self.endpoints.api = parse_base_url("api", url.as_ref())?;

		Ok(self)
	}

	/// Replaces the web base URL; affects every URL built afterwards.
	pub fn set_web_url(&mut self, url: impl AsRef<str>) -> Result<&mut Self> {
		self.endpoints.web = parse_base_url("web", url.as_ref())?;

		Ok(self)
	}

	/// Current API base URL.
	pub fn api_url(&self) -> &Url {
		self.endpoints.api()
	}

	/// Current web base URL.
	pub fn web_url(&self) -> &Url {
		self.endpoints.web()
	}

	/// Current endpoint configuration.
	pub fn endpoints(&self) -> &MollieEndpoints {
		&self.endpoints
	}

	/// Builds the `DELETE {api}/oauth2/tokens` request revoking `token`.
	///
	/// The form body carries `token_type_hint`, `token`, and whichever client credentials are
	/// configured. Send it through any transport; the response needs no further processing.
	pub fn revoke_token_request(&self, hint: TokenTypeHint, token: &str) -> Result<HttpRequest> {
		let credentials = self.credentials.form_params();
		let form = [("token_type_hint", hint.as_str()), ("token", token)]
			.into_iter()
			.chain(credentials.iter().map(|(key, value)| (key.as_str(), value.as_str())));

		Ok(http::form_request(
			Method::DELETE,
			&self.endpoints.tokens(),
			self.default_headers(),
			form,
		)?)
	}
}
impl ProviderStrategy for Mollie {
	type ResourceOwner = MollieResourceOwner;

	fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	fn base_authorization_url(&self) -> Url {
		self.endpoints.authorization()
	}

	fn base_access_token_url(&self, _: &BTreeMap<String, String>) -> Url {
		self.endpoints.tokens()
	}

	fn resource_owner_details_url(&self, _: &AccessToken) -> Url {
		self.endpoints.organization()
	}

	fn default_scopes(&self) -> ScopeList {
		MollieScope::OrganizationsRead.into()
	}

	fn scope_separator(&self) -> &str {
		" "
	}

	fn pkce_method(&self) -> Option<PkceMethod> {
		self.pkce_method
	}

	fn default_headers(&self) -> HeaderMap {
		let mut headers = HeaderMap::new();

		if let Ok(value) = HeaderValue::from_str(&user_agent()) {
			headers.insert(USER_AGENT, value);
		}

		headers
	}

	fn check_response(
		&self,
		response: &RawResponse,
		body: &ResponseBody,
	) -> Result<(), IdentityProviderError> {
		if response.status.as_u16() < 400 {
			return Ok(());
		}

		Err(IdentityProviderError::new(error_message(response, body), response))
	}

	fn create_resource_owner(
		&self,
		response: Map<String, Value>,
		_: &AccessToken,
	) -> Self::ResourceOwner {
		MollieResourceOwner::new(response)
	}
}

/// `User-Agent` sent with every request: `MollieOAuth2Rust/<version> Rust (<os>; <arch>)`.
pub fn user_agent() -> String {
	format!(
		"MollieOAuth2Rust/{} Rust ({}; {})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

fn parse_base_url(endpoint: &'static str, value: &str) -> Result<Url, ConfigError> {
	let url =
		Url::parse(value).map_err(|source| ConfigError::UnparsableBaseUrl { endpoint, source })?;

	if !matches!(url.scheme(), "http" | "https")
		|| !url.has_host()
		|| url.query().is_some()
		|| url.fragment().is_some()
	{
		return Err(ConfigError::InvalidBaseUrl { endpoint, url: value.to_owned() });
	}

	Ok(url)
}

fn join(base: &Url, segments: &[&str]) -> Url {
	let mut url = base.clone();

	// Validated bases always have a host, so they can carry path segments.
	if let Ok(mut path) = url.path_segments_mut() {
		path.pop_if_empty().extend(segments);
	}

	url
}

// Mollie error bodies: `{"error": {"type": "...", "message": "...", "field": "..."}}`, or a plain
// `{"error": "..."}`.
fn error_message(response: &RawResponse, body: &ResponseBody) -> String {
	let Some(error) = body.as_object().and_then(|map| present(map.get("error"))) else {
		return response.reason_phrase().to_owned();
	};
	let message = match (present(error.get("type")), present(error.get("message"))) {
		(Some(kind), Some(message)) => format!("[{}] {}", render(kind), render(message)),
		_ => render(error),
	};

	match present(error.get("field")) {
		Some(field) => format!("{message} (field: {})", render(field)),
		None => message,
	}
}

fn present(value: Option<&Value>) -> Option<&Value> {
	value.filter(|value| !value.is_null())
}

fn render(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use oauth2::http::{StatusCode, header::CONTENT_TYPE};
	// self
	use super::*;

	const MOCK_CLIENT_ID: &str = "app_mock_client_id";
	const MOCK_SECRET: &str = "mock_secret";
	const REDIRECT_URI: &str = "none";

	fn provider() -> Mollie {
		Mollie::new(
			MollieOptions::default()
				.with_client_id(MOCK_CLIENT_ID)
				.with_client_secret(MOCK_SECRET)
				.with_redirect_uri(REDIRECT_URI),
		)
		.expect("Mock options should be accepted.")
	}

	fn failure(status: u16, body: &str) -> (RawResponse, ResponseBody) {
		let response = RawResponse::new(
			StatusCode::from_u16(status).expect("Status fixture should be valid."),
			HeaderMap::new(),
			body.as_bytes().to_vec(),
		);
		let parsed = ResponseBody::parse(&response).expect("Fixture body should parse.");

		(response, parsed)
	}

	fn message(status: u16, body: &str) -> String {
		let (response, parsed) = failure(status, body);

		provider()
			.check_response(&response, &parsed)
			.expect_err("Error statuses must be rejected.")
			.message
	}

	#[test]
	fn client_id_without_prefix_is_rejected() {
		let err = Mollie::new(MollieOptions::default().with_client_id("not_prefixed"))
			.expect_err("Unprefixed client ids must be rejected.");

		assert_eq!(err.to_string(), "Mollie needs the client ID to be prefixed with app_.");
		assert!(Mollie::new(MollieOptions::default()).is_ok());
	}

	#[test]
	fn endpoints_follow_configured_hosts() {
		let mut provider = provider();
		let token = AccessToken::new("mock_access_token");

		assert_eq!(
			provider.base_access_token_url(&BTreeMap::new()).as_str(),
			"https://api.mollie.com/oauth2/tokens"
		);
		assert_eq!(
			provider.base_authorization_url().as_str(),
			"https://my.mollie.com/oauth2/authorize"
		);
		assert_eq!(
			provider.resource_owner_details_url(&token).as_str(),
			"https://api.mollie.com/v2/organizations/me"
		);

		let params = BTreeMap::from([
			("grant_type".to_owned(), "authorization_code".to_owned()),
			("code".to_owned(), "mock_authorization_code".to_owned()),
		]);

		assert_eq!(
			provider.base_access_token_url(&params),
			provider.base_access_token_url(&BTreeMap::new())
		);

		let before = provider.base_access_token_url(&BTreeMap::new());

		provider
			.set_api_url("https://api.mollie.nl")
			.expect("API URL should be accepted.")
			.set_web_url("https://www.mollie.nl/")
			.expect("Web URL should be accepted.");

		assert_eq!(before.as_str(), "https://api.mollie.com/oauth2/tokens");
		assert_eq!(
			provider.base_access_token_url(&BTreeMap::new()).as_str(),
			"https://api.mollie.nl/oauth2/tokens"
		);
		assert_eq!(
			provider.base_authorization_url().as_str(),
			"https://www.mollie.nl/oauth2/authorize"
		);
		assert_eq!(
			provider.resource_owner_details_url(&token).as_str(),
			"https://api.mollie.nl/v2/organizations/me"
		);
	}

	#[test]
	fn base_urls_must_be_absolute_http() {
		let mut provider = provider();

		for invalid in ["ftp://api.mollie.com", "https://api.mollie.com?x=1", "https://a.test/#f"] {
			let err = provider.set_api_url(invalid).expect_err("Invalid base URL must fail.");

			assert!(matches!(err, Error::Config(ConfigError::InvalidBaseUrl { .. })), "{invalid}");
		}

		let err = provider.set_web_url("/relative").expect_err("Relative URLs must fail.");

		assert!(matches!(err, Error::Config(ConfigError::UnparsableBaseUrl { .. })));
		assert_eq!(provider.api_url().as_str(), "https://api.mollie.com/");
	}

	#[test]
	fn scopes_default_to_organizations_read() {
		let provider = provider();

		assert_eq!(provider.default_scopes().as_slice(), ["organizations.read"]);
		assert_eq!(provider.scope_separator(), " ");
	}

	#[test]
	fn default_headers_carry_user_agent() {
		let headers = provider().default_headers();
		let agent = headers
			.get(USER_AGENT)
			.and_then(|value| value.to_str().ok())
			.expect("User-Agent should be set.");

		assert!(agent.starts_with(concat!("MollieOAuth2Rust/", env!("CARGO_PKG_VERSION"), " Rust (")));
		assert_eq!(headers.len(), 1);
	}

	#[test]
	fn successful_statuses_pass_check_response() {
		let (response, parsed) = failure(399, "{\"error\":\"ignored\"}");

		assert!(provider().check_response(&response, &parsed).is_ok());
	}

	#[test]
	fn error_messages_follow_mollie_conventions() {
		assert_eq!(
			message(422, "{\"error\":{\"type\":\"request\",\"message\":\"Bad code\"}}"),
			"[request] Bad code"
		);
		assert_eq!(
			message(
				422,
				"{\"error\":{\"type\":\"request\",\"message\":\"Bad\",\"field\":\"redirect_uri\"}}"
			),
			"[request] Bad (field: redirect_uri)"
		);
		assert_eq!(message(400, "{\"error\":\"invalid_grant\"}"), "invalid_grant");
		assert_eq!(message(404, "{}"), "Not Found");
		assert_eq!(message(503, "[1,2]"), "Service Unavailable");
		assert_eq!(message(401, "{\"error\":{\"type\":\"auth\"}}"), "{\"type\":\"auth\"}");
	}

	#[test]
	fn identity_provider_error_keeps_the_response() {
		let (response, parsed) = failure(500, "{\"error\":\"boom\"}");
		let err = provider()
			.check_response(&response, &parsed)
			.expect_err("Server errors must be rejected.");

		assert_eq!(err.status, 500);
		assert_eq!(err.response.body, b"{\"error\":\"boom\"}");
	}

	#[test]
	fn revoke_request_is_a_form_encoded_delete() {
		let request = provider()
			.revoke_token_request(TokenTypeHint::RefreshToken, "mock_refresh_token")
			.expect("Revoke request should build.");

		assert_eq!(request.method(), Method::DELETE);
		assert_eq!(request.uri(), "https://api.mollie.com/oauth2/tokens");
		assert_eq!(
			request.headers().get(CONTENT_TYPE).and_then(|value| value.to_str().ok()),
			Some("application/x-www-form-urlencoded")
		);
		assert!(request.headers().contains_key(USER_AGENT));
		assert_eq!(
			String::from_utf8_lossy(request.body()),
			"token_type_hint=refresh_token&token=mock_refresh_token&client_id=app_mock_client_id&client_secret=mock_secret&redirect_uri=none"
		);
	}

	#[test]
	fn resource_owner_factory_wraps_the_mapping() {
		let mut profile = Map::new();

		profile.insert("id".into(), Value::from("org_12345678"));

		let owner = provider().create_resource_owner(profile, &AccessToken::new("tok"));

		assert_eq!(owner.id().expect("Owner should have an id."), "org_12345678");
	}
}

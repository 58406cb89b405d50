//! OAuth client credentials shared by every request a provider issues.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Client identifier, client secret, and redirect URI registered with a provider.
///
/// Every field is optional: absent values are simply left out of the requests built from them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	/// OAuth client identifier.
	pub client_id: Option<String>,
	/// Client secret; redacted in `Debug` output.
	pub client_secret: Option<TokenSecret>,
	/// Redirect URI registered for the client.
	pub redirect_uri: Option<String>,
}
impl Credentials {
	/// Creates credentials with every field populated.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self {
			client_id: Some(client_id.into()),
			client_secret: Some(TokenSecret::new(client_secret)),
			redirect_uri: Some(redirect_uri.into()),
		}
	}

	/// Form parameters identifying the client (`client_id`, `client_secret`, `redirect_uri`).
	pub fn form_params(&self) -> BTreeMap<String, String> {
		let mut params = BTreeMap::new();

		if let Some(client_id) = &self.client_id {
			params.insert("client_id".into(), client_id.clone());
		}
		if let Some(secret) = &self.client_secret {
			params.insert("client_secret".into(), secret.expose().to_owned());
		}
		if let Some(redirect_uri) = &self.redirect_uri {
			params.insert("redirect_uri".into(), redirect_uri.clone());
		}

		params
	}
}

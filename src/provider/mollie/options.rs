//! Construction options for the Mollie adapter.

// self
use crate::{_prelude::*, auth::Credentials, provider::PkceMethod};

/// Options bag accepted by [`Mollie::new`](crate::provider::Mollie::new).
///
/// Deserializes from camelCase keys (`clientId`, `clientSecret`, `redirectUri`, `pkceMethod`) so
/// configuration files shared with other Mollie SDKs can be loaded directly.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MollieOptions {
	/// OAuth client identifier; must start with `app_` when present.
	pub client_id: Option<String>,
	/// OAuth client secret.
	pub client_secret: Option<String>,
	/// Redirect URI registered for the app.
	pub redirect_uri: Option<String>,
	/// PKCE challenge method; PKCE is skipped when absent.
	pub pkce_method: Option<PkceMethod>,
}
impl MollieOptions {
	/// Sets the client identifier.
	pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
		self.client_id = Some(client_id.into());

		self
	}

	/// Sets the client secret.
	pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
		self.client_secret = Some(client_secret.into());

		self
	}

	/// Sets the redirect URI.
	pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}

	/// Enables PKCE with the provided challenge method.
	pub fn with_pkce_method(mut self, method: PkceMethod) -> Self {
		self.pkce_method = Some(method);

		self
	}

	pub(crate) fn into_credentials(self) -> (Credentials, Option<PkceMethod>) {
		let credentials = Credentials {
			client_id: self.client_id,
			client_secret: self.client_secret.map(Into::into),
			redirect_uri: self.redirect_uri,
		};

		(credentials, self.pkce_method)
	}
}
impl Debug for MollieOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MollieOptions")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("redirect_uri", &self.redirect_uri)
			.field("pkce_method", &self.pkce_method)
			.finish()
	}
}

//! OAuth 2.0 grant types and their request-parameter rules.

// self
use crate::{_prelude::*, error::ConfigError};

/// OAuth 2.0 grant types understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Authorization Code grant; requires `code`.
	AuthorizationCode,
	/// Refresh Token grant; requires `refresh_token`.
	RefreshToken,
	/// Client Credentials grant.
	ClientCredentials,
	/// Resource Owner Password Credentials grant; requires `username` and `password`.
	Password,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::RefreshToken => "refresh_token",
			GrantType::ClientCredentials => "client_credentials",
			GrantType::Password => "password",
		}
	}

	/// Parameters the caller must supply for this grant.
	pub const fn required_parameters(self) -> &'static [&'static str] {
		match self {
			GrantType::AuthorizationCode => &["code"],
			GrantType::RefreshToken => &["refresh_token"],
			GrantType::ClientCredentials => &[],
			GrantType::Password => &["username", "password"],
		}
	}

	/// Merges `defaults`, `grant_type`, and caller `options` into the token request form.
	///
	/// Caller options win over defaults. Fails when a required parameter is absent.
	pub fn prepare_request_parameters(
		self,
		mut defaults: BTreeMap<String, String>,
		options: BTreeMap<String, String>,
	) -> Result<BTreeMap<String, String>, ConfigError> {
		defaults.insert("grant_type".into(), self.as_str().into());
		defaults.extend(options);

		if let Some(parameter) =
			self.required_parameters().iter().copied().find(|parameter| !defaults.contains_key(*parameter))
		{
			return Err(ConfigError::MissingGrantParameter { grant: self.as_str(), parameter });
		}

		Ok(defaults)
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for GrantType {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"authorization_code" => Ok(GrantType::AuthorizationCode),
			"refresh_token" => Ok(GrantType::RefreshToken),
			"client_credentials" => Ok(GrantType::ClientCredentials),
			"password" => Ok(GrantType::Password),
			other => Err(ConfigError::UnsupportedGrant { grant: other.to_owned() }),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
		pairs.iter().map(|(key, value)| ((*key).to_owned(), (*value).to_owned())).collect()
	}

	#[test]
	fn grant_names_round_trip_through_from_str() {
		for grant in [
			GrantType::AuthorizationCode,
			GrantType::RefreshToken,
			GrantType::ClientCredentials,
			GrantType::Password,
		] {
			assert_eq!(grant.as_str().parse::<GrantType>().expect("Grant name should parse."), grant);
		}

		let err = "implicit".parse::<GrantType>().expect_err("Unknown grants must be rejected.");

		assert!(matches!(err, ConfigError::UnsupportedGrant { grant } if grant == "implicit"));
	}

	#[test]
	fn caller_options_override_defaults() {
		let form = GrantType::AuthorizationCode
			.prepare_request_parameters(
				params(&[("client_id", "app_default"), ("redirect_uri", "https://a.test")]),
				params(&[("code", "mock_code"), ("redirect_uri", "https://b.test")]),
			)
			.expect("Form should be assembled.");

		assert_eq!(form.get("grant_type").map(String::as_str), Some("authorization_code"));
		assert_eq!(form.get("client_id").map(String::as_str), Some("app_default"));
		assert_eq!(form.get("redirect_uri").map(String::as_str), Some("https://b.test"));
		assert_eq!(form.get("code").map(String::as_str), Some("mock_code"));
	}

	#[test]
	fn missing_required_parameters_are_reported() {
		let err = GrantType::Password
			.prepare_request_parameters(BTreeMap::new(), params(&[("username", "mock")]))
			.expect_err("Password grant without password must fail.");

		assert_eq!(err.to_string(), "Required parameter not passed: password.");

		let form = GrantType::ClientCredentials
			.prepare_request_parameters(BTreeMap::new(), BTreeMap::new())
			.expect("Client credentials need no parameters.");

		assert_eq!(form.len(), 1);
	}
}

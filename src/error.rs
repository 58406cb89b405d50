//! Crate-level error types shared by the engine, the Mollie provider, and resource owners.

// self
use crate::{_prelude::*, http::RawResponse};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; never retried.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Provider answered with an HTTP status of 400 or above.
	#[error(transparent)]
	IdentityProvider(#[from] IdentityProviderError),
	/// Provider answered with a body the engine cannot use.
	#[error(transparent)]
	UnexpectedResponse(#[from] UnexpectedResponseError),
	/// Transport failure (DNS, TCP, TLS, IO).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// A required resource-owner field is absent from an otherwise valid profile.
	#[error("Resource owner profile is missing the `{field}` field.")]
	MissingField {
		/// Name of the absent field.
		field: &'static str,
	},
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Client identifier does not carry the provider's mandatory prefix.
	#[error("Mollie needs the client ID to be prefixed with {prefix}.")]
	InvalidClientId {
		/// Required prefix.
		prefix: &'static str,
	},
	/// Base URL is not an absolute HTTP(S) URL.
	#[error("The {endpoint} base URL is invalid: {url}.")]
	InvalidBaseUrl {
		/// Which base URL failed validation.
		endpoint: &'static str,
		/// Offending value.
		url: String,
	},
	/// Base URL could not be parsed.
	#[error("The {endpoint} base URL cannot be parsed.")]
	UnparsableBaseUrl {
		/// Which base URL failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Grant name is not one the engine knows.
	#[error("Grant `{grant}` is not supported.")]
	UnsupportedGrant {
		/// Grant name supplied by the caller.
		grant: String,
	},
	/// A grant was requested without one of its required parameters.
	#[error("Required parameter not passed: {parameter}.")]
	MissingGrantParameter {
		/// Grant label.
		grant: &'static str,
		/// Missing parameter name.
		parameter: &'static str,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Error raised when the provider answers with an HTTP status of 400 or above.
///
/// The message follows the provider's error-body conventions; the raw response is kept so callers
/// can inspect headers and the original body.
#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct IdentityProviderError {
	/// Best-effort human-readable message.
	pub message: String,
	/// HTTP status code returned by the provider.
	pub status: u16,
	/// Raw response that triggered the error.
	pub response: Box<RawResponse>,
}
impl IdentityProviderError {
	/// Creates an error from a message and the offending response.
	pub fn new(message: impl Into<String>, response: &RawResponse) -> Self {
		Self {
			message: message.into(),
			status: response.status.as_u16(),
			response: Box::new(response.clone()),
		}
	}
}

/// Provider responses that parsed but cannot be used.
#[derive(Debug, ThisError)]
pub enum UnexpectedResponseError {
	/// Body is not a key-value mapping (plain text, array, scalar).
	#[error("Invalid response received from Authorization Server. Expected JSON.")]
	NotAMapping {
		/// HTTP status code of the response.
		status: u16,
	},
	/// Server failed with a body that is not JSON.
	#[error("An OAuth server error was encountered that did not contain a JSON body.")]
	ServerErrorWithoutJson {
		/// Raw response for inspection.
		response: Box<RawResponse>,
	},
	/// Token endpoint returned fields of the wrong shape.
	#[error("Token endpoint returned a malformed token.")]
	TokenParse {
		/// Structured parsing failure including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Token expiry lies outside the representable date range.
	#[error("Token endpoint returned an expiry outside the supported date range.")]
	ExpiryOutOfRange,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
	/// Transport reported a failure without a structured error.
	#[error("HTTP client error occurred while calling the provider: {message}.")]
	Other {
		/// Transport-supplied message.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn client_id_error_names_the_prefix() {
		let err: Error = ConfigError::InvalidClientId { prefix: "app_" }.into();

		assert_eq!(err.to_string(), "Mollie needs the client ID to be prefixed with app_.");
	}

	#[test]
	fn identity_provider_error_displays_message_only() {
		let response = RawResponse::new(
			oauth2::http::StatusCode::UNPROCESSABLE_ENTITY,
			Default::default(),
			b"{}".to_vec(),
		);
		let err = IdentityProviderError::new("[request] Nope", &response);

		assert_eq!(err.to_string(), "[request] Nope");
		assert_eq!(err.status, 422);
		assert_eq!(err.response.body, b"{}");
	}
}

//! Access tokens issued by a provider's token endpoint.

// crates.io
use serde::{Deserializer, de::Error as DeError};
// self
use crate::{_prelude::*, auth::TokenSecret, error::UnexpectedResponseError};

/// `expires` values above this instant are absolute UNIX timestamps; smaller ones are relative
/// seconds. The instant is the publication date of the original OAuth 2.0 draft.
const EXPIRATION_TIMESTAMP_FLOOR: i64 = 1_349_067_600;

/// Access token returned by a token exchange.
///
/// Besides the well-known fields, every other member of the token response (`token_type`,
/// `scope`, provider extensions) is kept verbatim in [`values`](Self::values).
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
	/// Access token secret; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Expiry instant, when the provider declared one.
	pub expires: Option<OffsetDateTime>,
	/// Refresh token secret, if the provider issued one.
	pub refresh_token: Option<TokenSecret>,
	/// Identifier of the resource owner, if the provider returned one.
	pub resource_owner_id: Option<String>,
	/// Remaining response fields.
	pub values: Map<String, Value>,
}
impl AccessToken {
	/// Creates a token carrying only an access token value.
	pub fn new(access_token: impl Into<String>) -> Self {
		Self {
			access_token: TokenSecret::new(access_token),
			expires: None,
			refresh_token: None,
			resource_owner_id: None,
			values: Map::new(),
		}
	}

	/// Builds a token from a parsed token-endpoint response, measuring relative expiry from now.
	pub fn from_response(response: Map<String, Value>) -> Result<Self, UnexpectedResponseError> {
		Self::from_response_at(response, OffsetDateTime::now_utc())
	}

	/// Builds a token from a parsed token-endpoint response, measuring relative expiry from `now`.
	///
	/// `expires_in` takes precedence over `expires`. An `expires_in` of zero means no expiry.
	pub fn from_response_at(
		response: Map<String, Value>,
		now: OffsetDateTime,
	) -> Result<Self, UnexpectedResponseError> {
		let raw: RawAccessToken = serde_path_to_error::deserialize(Value::Object(response))
			.map_err(|source| UnexpectedResponseError::TokenParse { source })?;
		let expires = match (raw.expires_in, raw.expires) {
			(Some(0), _) => None,
			(Some(relative), _) => Some(offset(now, relative)?),
			(None, Some(absolute)) if absolute > EXPIRATION_TIMESTAMP_FLOOR => Some(
				OffsetDateTime::from_unix_timestamp(absolute)
					.map_err(|_| UnexpectedResponseError::ExpiryOutOfRange)?,
			),
			(None, Some(relative)) => Some(offset(now, relative)?),
			(None, None) => None,
		};

		Ok(Self {
			access_token: TokenSecret::new(raw.access_token),
			expires,
			refresh_token: raw.refresh_token.map(TokenSecret::new),
			resource_owner_id: raw.resource_owner_id,
			values: raw.values,
		})
	}

	/// Sets the refresh token.
	pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
		self.refresh_token = Some(TokenSecret::new(token));

		self
	}

	/// Sets the expiry instant.
	pub fn with_expires(mut self, instant: OffsetDateTime) -> Self {
		self.expires = Some(instant);

		self
	}

	/// Sets the resource owner identifier.
	pub fn with_resource_owner_id(mut self, id: impl Into<String>) -> Self {
		self.resource_owner_id = Some(id.into());

		self
	}

	/// Returns the access token value. Callers must avoid logging this string.
	pub fn token(&self) -> &str {
		self.access_token.expose()
	}

	/// Returns whether the token is expired at `instant`, or `None` when no expiry is known.
	pub fn has_expired_at(&self, instant: OffsetDateTime) -> Option<bool> {
		self.expires.map(|expires| expires <= instant)
	}

	/// Returns whether the token is expired now, or `None` when no expiry is known.
	pub fn has_expired(&self) -> Option<bool> {
		self.has_expired_at(OffsetDateTime::now_utc())
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("access_token", &"<redacted>")
			.field("expires", &self.expires)
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.field("resource_owner_id", &self.resource_owner_id)
			.field("values", &self.values)
			.finish()
	}
}

#[derive(Deserialize)]
struct RawAccessToken {
	access_token: String,
	#[serde(default)]
	refresh_token: Option<String>,
	#[serde(default, deserialize_with = "string_or_integer")]
	resource_owner_id: Option<String>,
	#[serde(default, deserialize_with = "integer_seconds")]
	expires_in: Option<i64>,
	#[serde(default, deserialize_with = "integer_seconds")]
	expires: Option<i64>,
	#[serde(flatten)]
	values: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
	Integer(i64),
	Text(String),
}

fn integer_seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
	D: Deserializer<'de>,
{
	match <Option<Scalar>>::deserialize(deserializer)? {
		None => Ok(None),
		Some(Scalar::Integer(value)) => Ok(Some(value)),
		Some(Scalar::Text(text)) => text
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| DeError::custom(format!("expected an integer, found `{text}`"))),
	}
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(<Option<Scalar>>::deserialize(deserializer)?.map(|value| match value {
		Scalar::Integer(value) => value.to_string(),
		Scalar::Text(text) => text,
	}))
}

fn offset(now: OffsetDateTime, seconds: i64) -> Result<OffsetDateTime, UnexpectedResponseError> {
	now.checked_add(Duration::seconds(seconds)).ok_or(UnexpectedResponseError::ExpiryOutOfRange)
}

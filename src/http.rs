//! Transport primitives shared by every provider call.
//!
//! The module exposes [`ProviderHttpClient`], the engine's only dependency on an HTTP stack,
//! together with [`RawResponse`] (an owned, cloneable snapshot of a provider response) and
//! [`ResponseBody`] (the parsed view the provider's response checks operate on).

// std
use std::borrow::Cow;
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use oauth2::{
	AsyncHttpClient, HttpClientError,
	http::{HeaderMap, HeaderValue, Method, StatusCode, header::CONTENT_TYPE},
};
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	error::{ConfigError, UnexpectedResponseError},
};

/// Content type of every request body the engine sends.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Abstraction over HTTP transports capable of executing provider requests.
///
/// Callers provide an implementation (typically behind `Arc<T>`) and the engine requests a
/// short-lived [`AsyncHttpClient`] handle per call. Implementations must be
/// `Send + Sync + 'static` so one transport can be shared across clients, and the handles they
/// return must own whatever state is required so their request futures remain `Send`.
pub trait ProviderHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// [`AsyncHttpClient`] handle used for a single request.
	type Handle: for<'c> AsyncHttpClient<
			'c,
			Error = HttpClientError<Self::TransportError>,
			Future: 'c + Send,
		>
		+ 'static
		+ Send
		+ Sync;

	/// Builds a handle for the next request.
	fn handle(&self) -> Self::Handle;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Provider endpoints answer directly, so configure any custom [`ReqwestClient`] to disable
/// redirect following before handing it to the engine.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a reqwest client that never follows redirects.
	pub fn without_redirects() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ProviderHttpClient for ReqwestHttpClient {
	type Handle = ReqwestHandle;
	type TransportError = ReqwestError;

	fn handle(&self) -> Self::Handle {
		ReqwestHandle(Arc::new(self.0.clone()))
	}
}

/// Handle returned by [`ReqwestHttpClient`] that satisfies [`ProviderHttpClient`].
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestHandle(Arc<ReqwestClient>);
#[cfg(feature = "reqwest")]
impl<'c> AsyncHttpClient<'c> for ReqwestHandle {
	type Error = HttpClientError<ReqwestError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let client = Arc::clone(&self.0);

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

/// Builds a request with `headers` and, when `form` is non-empty, a form-encoded body.
pub fn form_request<'a, I>(
	method: Method,
	url: &Url,
	headers: HeaderMap,
	form: I,
) -> Result<HttpRequest, ConfigError>
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	let mut serializer = form_urlencoded::Serializer::new(String::new());
	let mut has_body = false;

	for (key, value) in form {
		serializer.append_pair(key, value);

		has_body = true;
	}

	let mut builder = oauth2::http::Request::builder().method(method).uri(url.as_str());

	if let Some(request_headers) = builder.headers_mut() {
		request_headers.extend(headers);

		if has_body {
			request_headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
		}
	}

	let body = if has_body { serializer.finish().into_bytes() } else { Vec::new() };

	Ok(builder.body(body)?)
}

/// Owned snapshot of a provider response, kept on errors for caller inspection.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: StatusCode,
	/// Response headers.
	pub headers: HeaderMap,
	/// Unmodified response body.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Creates a snapshot from its parts.
	pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
		Self { status, headers, body }
	}

	/// Canonical reason phrase for the status code, or an empty string for unknown codes.
	pub fn reason_phrase(&self) -> &'static str {
		self.status.canonical_reason().unwrap_or_default()
	}

	/// Returns the `Content-Type` header when present and valid UTF-8.
	pub fn content_type(&self) -> Option<&str> {
		self.headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok())
	}

	/// Lossy UTF-8 view of the body.
	pub fn text(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.body)
	}
}
impl From<HttpResponse> for RawResponse {
	fn from(response: HttpResponse) -> Self {
		let (parts, body) = response.into_parts();

		Self { status: parts.status, headers: parts.headers, body }
	}
}

/// Parsed provider response body.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
	/// JSON (or form-encoded, mapped to string values) payload.
	Json(Value),
	/// Payload that is neither JSON nor form-encoded.
	Text(String),
}
impl ResponseBody {
	/// Parses the body according to its content type.
	///
	/// Form-encoded bodies become a mapping of string values. Anything else is parsed as JSON; a
	/// non-JSON body is kept as text unless the status is 500, which fails with
	/// [`UnexpectedResponseError::ServerErrorWithoutJson`].
	pub fn parse(response: &RawResponse) -> Result<Self, UnexpectedResponseError> {
		if response.content_type().is_some_and(|value| value.contains("urlencoded")) {
			let map = form_urlencoded::parse(&response.body)
				.map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
				.collect::<Map<_, _>>();

			return Ok(Self::Json(Value::Object(map)));
		}

		match serde_json::from_slice(&response.body) {
			Ok(value) => Ok(Self::Json(value)),
			Err(_) if response.status == StatusCode::INTERNAL_SERVER_ERROR =>
				Err(UnexpectedResponseError::ServerErrorWithoutJson {
					response: Box::new(response.clone()),
				}),
			Err(_) => Ok(Self::Text(response.text().into_owned())),
		}
	}

	/// Borrows the body as a key-value mapping, if it is one.
	pub fn as_object(&self) -> Option<&Map<String, Value>> {
		match self {
			Self::Json(Value::Object(map)) => Some(map),
			_ => None,
		}
	}

	/// Consumes the body, returning the key-value mapping, if it is one.
	pub fn into_object(self) -> Option<Map<String, Value>> {
		match self {
			Self::Json(Value::Object(map)) => Some(map),
			_ => None,
		}
	}
}

//! Shared plumbing for client operations: transport calls and response handling.

// crates.io
use oauth2::{AsyncHttpClient, HttpClientError};
// self
use crate::{
	_prelude::*,
	error::{ConfigError, TransportError, UnexpectedResponseError},
	flows::Client,
	http::{ProviderHttpClient, RawResponse, ResponseBody},
	provider::ProviderStrategy,
};

impl<P, C> Client<P, C>
where
	P: ProviderStrategy,
	C: ?Sized + ProviderHttpClient,
{
	/// Sends a request through the client's transport and returns the raw response.
	///
	/// No status handling happens here: a 4xx/5xx response is still `Ok`.
	pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
		let handle = self.http_client.handle();

		handle.call(request).await.map_err(map_transport_error)
	}

	/// Sends a request, runs the provider's response check, and returns the body mapping.
	pub(crate) async fn fetch_mapping(&self, request: HttpRequest) -> Result<Map<String, Value>> {
		let response = RawResponse::from(self.send(request).await?);
		let body = ResponseBody::parse(&response)?;

		self.provider.check_response(&response, &body)?;

		body.into_object()
			.ok_or_else(|| UnexpectedResponseError::NotAMapping { status: response.status.as_u16() })
			.map_err(Error::from)
	}
}

/// Maps [`HttpClientError`] values emitted by any transport into crate errors.
pub fn map_transport_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		_ => TransportError::Other { message: "unrecognized transport failure".into() }.into(),
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::io;
	// self
	use super::*;

	#[test]
	fn transport_errors_map_to_crate_taxonomy() {
		let io = map_transport_error::<io::Error>(HttpClientError::Io(io::Error::other("reset")));

		assert!(matches!(io, Error::Transport(TransportError::Io(_))));

		let other = map_transport_error::<io::Error>(HttpClientError::Other("closed".into()));

		assert!(matches!(
			other,
			Error::Transport(TransportError::Other { message }) if message == "closed"
		));

		let network = map_transport_error(HttpClientError::Reqwest(Box::new(io::Error::other("dns"))));

		assert!(matches!(network, Error::Transport(TransportError::Network { .. })));
	}
}

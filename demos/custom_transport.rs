//! Runs the token exchange and profile lookup against an in-memory transport.
//!
//! 1. Implement [`ProviderHttpClient`] so the client asks for a fresh handle per request.
//! 2. Implement [`AsyncHttpClient`] on the handle; its error type is mapped into the crate's
//!    [`Error`](oauth2_mollie::error::Error) taxonomy by the client.
//! 3. Pass the transport to [`MollieClient::with_http_client`].

// std
use std::{
	fmt::{Display, Formatter, Result as FmtResult},
	future::Future,
	pin::Pin,
};
// crates.io
use color_eyre::Result;
// self
use oauth2_mollie::{
	error::{Error, TransportError},
	flows::{MollieClient, TokenOptions},
	http::ProviderHttpClient,
	oauth2::{
		AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse,
		http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
	},
	provider::{GrantType, Mollie, MollieOptions},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let options = MollieOptions::default()
		.with_client_id("app_demo")
		.with_client_secret("demo-secret")
		.with_redirect_uri("https://shop.example.com/callback");
	let client: MollieClient<CannedTransport> =
		MollieClient::with_http_client(Mollie::new(options.clone())?, CannedTransport);
	let token = client
		.get_access_token(GrantType::AuthorizationCode, TokenOptions::authorization_code("demo"))
		.await?;
	let organization = client.get_resource_owner(&token).await?;

	println!("Organization served by the canned transport: {}.", organization.id()?);

	let offline: MollieClient<OfflineTransport> =
		MollieClient::with_http_client(Mollie::new(options)?, OfflineTransport);

	match offline.revoke_access_token(token.token()).await {
		Err(Error::Transport(TransportError::Network { source })) =>
			println!("Offline transport failed as expected: {source}."),
		other => println!("Unexpected outcome: {other:?}."),
	}

	Ok(())
}

#[derive(Clone, Copy, Debug)]
struct CannedTransport;
impl ProviderHttpClient for CannedTransport {
	type Handle = CannedTransport;
	type TransportError = OfflineError;

	fn handle(&self) -> Self::Handle {
		*self
	}
}
impl<'c> AsyncHttpClient<'c> for CannedTransport {
	type Error = HttpClientError<OfflineError>;
	type Future = Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		Box::pin(async move {
			let body = match request.uri().path() {
				"/oauth2/tokens" => r#"{"access_token":"access_demo","expires_in":3600}"#,
				"/v2/organizations/me" => r#"{"resource":"organization","id":"org_demo"}"#,
				_ => r#"{"error":{"type":"not_found","message":"Unknown endpoint"}}"#,
			};
			let mut response = HttpResponse::new(body.as_bytes().to_vec());

			if body.contains("not_found") {
				*response.status_mut() = StatusCode::NOT_FOUND;
			}

			response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

			Ok(response)
		})
	}
}

#[derive(Clone, Copy, Debug)]
struct OfflineTransport;
impl ProviderHttpClient for OfflineTransport {
	type Handle = OfflineTransport;
	type TransportError = OfflineError;

	fn handle(&self) -> Self::Handle {
		*self
	}
}
impl<'c> AsyncHttpClient<'c> for OfflineTransport {
	type Error = HttpClientError<OfflineError>;
	type Future = Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let host = request.uri().host().unwrap_or("unknown").to_owned();

		Box::pin(async move { Err(HttpClientError::Reqwest(Box::new(OfflineError { host }))) })
	}
}

#[derive(Debug)]
struct OfflineError {
	host: String,
}
impl Display for OfflineError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "DNS lookup for {} failed", self.host)
	}
}
impl std::error::Error for OfflineError {}

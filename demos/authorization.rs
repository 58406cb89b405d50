//! Walks through the Mollie authorization code flow against the live API.
//!
//! 1. Export `MOLLIE_CLIENT_ID`, `MOLLIE_CLIENT_SECRET`, and `MOLLIE_REDIRECT_URI`.
//! 2. Run the demo once to print the authorization URL and open it in a browser.
//! 3. Re-run with `MOLLIE_AUTH_CODE` set to the `code` from the redirect to exchange it and print
//!    the organization profile.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use oauth2_mollie::{
	auth::ScopeList,
	flows::{AuthorizationOptions, ReqwestMollieClient, TokenOptions},
	provider::{GrantType, Mollie, MollieOptions, MollieScope, PkceMethod},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let provider = Mollie::new(
		MollieOptions::default()
			.with_client_id(env::var("MOLLIE_CLIENT_ID")?)
			.with_client_secret(env::var("MOLLIE_CLIENT_SECRET")?)
			.with_redirect_uri(env::var("MOLLIE_REDIRECT_URI")?)
			.with_pkce_method(PkceMethod::S256),
	)?;
	let client = ReqwestMollieClient::new(provider);

	let Ok(code) = env::var("MOLLIE_AUTH_CODE") else {
		let request = client.authorization_url(AuthorizationOptions::default().with_scope(
			ScopeList::new([MollieScope::OrganizationsRead, MollieScope::PaymentsRead]),
		))?;

		println!("Open this URL to authorize the app: {}", request.url);
		println!("Expected state: {}", request.state);

		if let Some(verifier) = &request.pkce_code {
			println!("Re-run with MOLLIE_PKCE_VERIFIER={verifier} and MOLLIE_AUTH_CODE=<code>.");
		}

		return Ok(());
	};

	if let Ok(verifier) = env::var("MOLLIE_PKCE_VERIFIER") {
		client.set_pkce_code(verifier);
	}

	let token = client
		.get_access_token(GrantType::AuthorizationCode, TokenOptions::authorization_code(code))
		.await?;

	println!("Token expires at: {:?}.", token.expires);

	let organization = client.get_resource_owner(&token).await?;

	println!("Authorized organization: {}.", organization.id()?);

	if let Some(email) = organization.email() {
		println!("Contact email: {email}.");
	}

	Ok(())
}

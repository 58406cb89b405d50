//! Revokes a Mollie access token (`MOLLIE_ACCESS_TOKEN`) or refresh token
//! (`MOLLIE_REFRESH_TOKEN`) with the app credentials from `MOLLIE_CLIENT_ID` and
//! `MOLLIE_CLIENT_SECRET`.

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre};
// self
use oauth2_mollie::{
	flows::ReqwestMollieClient,
	provider::{Mollie, MollieOptions},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let provider = Mollie::new(
		MollieOptions::default()
			.with_client_id(env::var("MOLLIE_CLIENT_ID")?)
			.with_client_secret(env::var("MOLLIE_CLIENT_SECRET")?),
	)?;
	let client = ReqwestMollieClient::new(provider);
	let response = if let Ok(token) = env::var("MOLLIE_REFRESH_TOKEN") {
		client.revoke_refresh_token(&token).await?
	} else if let Ok(token) = env::var("MOLLIE_ACCESS_TOKEN") {
		client.revoke_access_token(&token).await?
	} else {
		return Err(eyre::eyre!("Set MOLLIE_ACCESS_TOKEN or MOLLIE_REFRESH_TOKEN."));
	};

	// Mollie answers 204 No Content when the token was revoked.
	println!("Revocation answered with {}.", response.status());

	Ok(())
}

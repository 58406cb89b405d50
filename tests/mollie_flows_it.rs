#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
// self
use oauth2_mollie::{
	auth::ScopeList,
	error::{Error, UnexpectedResponseError},
	flows::{ReqwestMollieClient, TokenOptions},
	provider::{GrantType, Mollie, MollieOptions, MollieScope},
};

const CLIENT_ID: &str = "app_mock_client_id";
const CLIENT_SECRET: &str = "mock_secret";
const REDIRECT_URI: &str = "none";
const PROFILE: &str = r#"{
	"resource": "organization",
	"id": "org_12345678",
	"name": "Mollie B.V.",
	"email": "info@mollie.com",
	"address": {
		"streetAndNumber": "Keizersgracht 126",
		"postalCode": "1015 CW",
		"city": "Amsterdam",
		"country": "NL"
	},
	"registrationNumber": "30204462",
	"vatNumber": "NL815839091B01",
	"_links": {
		"self": {
			"href": "https://api.mollie.com/v2/organizations/org_12345678",
			"type": "application/hal+json"
		}
	}
}"#;

fn build_client(server: &MockServer) -> ReqwestMollieClient {
	let mut provider = Mollie::new(
		MollieOptions::default()
			.with_client_id(CLIENT_ID)
			.with_client_secret(CLIENT_SECRET)
			.with_redirect_uri(REDIRECT_URI),
	)
	.expect("Mock options should be accepted.");

	provider.set_api_url(server.base_url()).expect("Mock server URL should be a valid base.");

	ReqwestMollieClient::new(provider)
}

#[tokio::test]
async fn access_token_exchange_parses_json_tokens() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth2/tokens")
				.header("content-type", "application/x-www-form-urlencoded")
				.header_exists("user-agent");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"access_token":"mock_access_token", "token_type":"bearer"}"#);
		})
		.await;
	let token = client
		.get_access_token(
			GrantType::AuthorizationCode,
			TokenOptions::authorization_code("mock_authorization_code"),
		)
		.await
		.expect("Token exchange should succeed.");

	mock.assert_async().await;

	assert_eq!(token.token(), "mock_access_token");
	assert!(token.expires.is_none());
	assert!(token.refresh_token.is_none());
	assert!(token.resource_owner_id.is_none());
}

#[tokio::test]
async fn form_encoded_token_unlocks_organization_profile() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/tokens");
			then.status(200)
				.header("content-type", "application/x-www-form-urlencoded")
				.body("access_token=mock_access_token&expires=3600&refresh_token=mock_refresh_token");
		})
		.await;
	let profile_mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v2/organizations/me")
				.header("authorization", "Bearer mock_access_token");
			then.status(200).header("content-type", "application/hal+json").body(PROFILE);
		})
		.await;
	let token = client
		.get_access_token(
			GrantType::AuthorizationCode,
			TokenOptions::authorization_code("mock_authorization_code")
				.with_scope(ScopeList::new([MollieScope::OrganizationsRead])),
		)
		.await
		.expect("Token exchange should succeed.");

	assert_eq!(token.refresh_token.as_ref().map(|secret| secret.expose()), Some("mock_refresh_token"));
	assert_eq!(token.has_expired(), Some(false));

	let owner = client.get_resource_owner(&token).await.expect("Profile lookup should succeed.");

	token_mock.assert_async().await;
	profile_mock.assert_async().await;

	assert_eq!(owner.id().expect("Profile should carry an id."), "org_12345678");
	assert_eq!(owner.email(), Some("info@mollie.com"));
	assert_eq!(owner.registration_number(), Some("30204462"));
	assert_eq!(owner.vat_number(), Some("NL815839091B01"));
	assert_eq!(
		owner.to_raw_map().get("name").and_then(|value| value.as_str()),
		Some("Mollie B.V.")
	);
	assert!(owner.to_raw_map().contains_key("_links"));
}

#[tokio::test]
async fn error_objects_become_identity_provider_errors() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);

	server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/tokens");
			then.status(422).header("content-type", "application/json").body(
				r#"{"error":{"type":"request","message":"The code is invalid","field":"code"}}"#,
			);
		})
		.await;

	let err = client
		.get_access_token(
			GrantType::AuthorizationCode,
			TokenOptions::authorization_code("mock_authorization_code"),
		)
		.await
		.expect_err("Error bodies must fail the exchange.");

	match err {
		Error::IdentityProvider(err) => {
			assert_eq!(err.message, "[request] The code is invalid (field: code)");
			assert_eq!(err.status, 422);
			assert!(err.response.text().contains("The code is invalid"));
		},
		other => panic!("Unexpected error: {other:?}."),
	}
}

#[tokio::test]
async fn unusable_bodies_are_unexpected_responses() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let html = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/tokens");
			then.status(500).header("content-type", "text/html").body("<h1>Oops</h1>");
		})
		.await;
	let err = client
		.get_access_token(GrantType::ClientCredentials, TokenOptions::default())
		.await
		.expect_err("Non-JSON server errors must fail.");

	assert!(matches!(
		err,
		Error::UnexpectedResponse(UnexpectedResponseError::ServerErrorWithoutJson { .. })
	));

	html.delete_async().await;
	server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth2/tokens");
			then.status(200).header("content-type", "text/plain").body("not a token");
		})
		.await;

	let err = client
		.get_access_token(GrantType::ClientCredentials, TokenOptions::default())
		.await
		.expect_err("Plain-text bodies must fail.");

	assert!(matches!(
		err,
		Error::UnexpectedResponse(UnexpectedResponseError::NotAMapping { status: 200 })
	));
}

#[tokio::test]
async fn revocation_returns_raw_responses() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE)
				.path("/oauth2/tokens")
				.header("content-type", "application/x-www-form-urlencoded");
			then.status(204);
		})
		.await;
	let access = client
		.revoke_access_token("mock_access_token")
		.await
		.expect("Revocation should reach the server.");
	let refresh = client
		.revoke_refresh_token("mock_refresh_token")
		.await
		.expect("Revocation should reach the server.");

	assert_eq!(access.status().as_u16(), 204);
	assert_eq!(refresh.status().as_u16(), 204);

	mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn revocation_never_inspects_error_statuses() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);

	server
		.mock_async(|when, then| {
			when.method(DELETE).path("/oauth2/tokens");
			then.status(401)
				.header("content-type", "application/json")
				.body(r#"{"error":{"type":"auth","message":"Invalid client"}}"#);
		})
		.await;

	let response = client
		.revoke_access_token("mock_access_token")
		.await
		.expect("Error statuses must be returned untouched.");

	assert_eq!(response.status().as_u16(), 401);
	assert!(String::from_utf8_lossy(response.body()).contains("Invalid client"));
}

#[tokio::test]
async fn profile_errors_fall_back_to_reason_phrase() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);

	server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/organizations/me");
			then.status(404).header("content-type", "application/json").body("{}");
		})
		.await;

	let err = client
		.get_resource_owner(&oauth2_mollie::auth::AccessToken::new("mock_access_token"))
		.await
		.expect_err("Missing profiles must fail.");

	assert!(matches!(err, Error::IdentityProvider(ref err) if err.message == "Not Found"));
}

//! Organization profile returned by `GET /v2/organizations/me`.

// self
use crate::{_prelude::*, provider::ResourceOwner};

/// Mollie organization that authorized the app.
///
/// The wrapped mapping is the source of truth: accessors read from it and
/// [`to_raw_map`](Self::to_raw_map) returns it untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MollieResourceOwner {
	response: Map<String, Value>,
}
impl MollieResourceOwner {
	/// Wraps a parsed profile response.
	pub fn new(response: Map<String, Value>) -> Self {
		Self { response }
	}

	/// Organization identifier (`org_…`).
	pub fn id(&self) -> Result<&str> {
		self.string("id").ok_or(Error::MissingField { field: "id" })
	}

	/// Organization email address.
	pub fn email(&self) -> Option<&str> {
		self.string("email")
	}

	/// Chamber of commerce registration number.
	pub fn registration_number(&self) -> Option<&str> {
		self.string("registrationNumber")
	}

	/// VAT number.
	pub fn vat_number(&self) -> Option<&str> {
		self.string("vatNumber")
	}

	/// Full profile mapping, including fields without a typed accessor.
	pub fn to_raw_map(&self) -> &Map<String, Value> {
		&self.response
	}

	/// Consumes the owner, returning the profile mapping.
	pub fn into_raw_map(self) -> Map<String, Value> {
		self.response
	}

	fn string(&self, key: &str) -> Option<&str> {
		self.response.get(key).and_then(Value::as_str)
	}
}
impl ResourceOwner for MollieResourceOwner {
	fn id(&self) -> Result<&str> {
		MollieResourceOwner::id(self)
	}

	fn to_raw_map(&self) -> &Map<String, Value> {
		MollieResourceOwner::to_raw_map(self)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn owner(value: Value) -> MollieResourceOwner {
		match value {
			Value::Object(map) => MollieResourceOwner::new(map),
			other => panic!("Fixture must be a JSON object, found {other}."),
		}
	}

	#[test]
	fn accessors_read_the_profile() {
		let owner = owner(serde_json::json!({
			"resource": "organization",
			"id": "org_12345678",
			"name": "Mollie B.V.",
			"email": "info@mollie.com",
			"address": { "city": "Amsterdam", "country": "NL" },
			"registrationNumber": "30204462",
			"vatNumber": "NL815839091B01",
		}));

		assert_eq!(owner.id().expect("Profile should carry an id."), "org_12345678");
		assert_eq!(owner.email(), Some("info@mollie.com"));
		assert_eq!(owner.registration_number(), Some("30204462"));
		assert_eq!(owner.vat_number(), Some("NL815839091B01"));
		assert_eq!(owner.to_raw_map().get("name"), Some(&Value::from("Mollie B.V.")));
		assert_eq!(owner.to_raw_map().len(), 7);
	}

	#[test]
	fn absent_fields_stay_absent() {
		let owner = owner(serde_json::json!({ "name": "No id" }));

		assert!(owner.email().is_none());
		assert!(owner.vat_number().is_none());
		assert!(matches!(owner.id(), Err(Error::MissingField { field: "id" })));
	}

	#[test]
	fn serializes_as_the_raw_profile() {
		let raw = serde_json::json!({ "id": "org_1", "_links": { "self": { "href": "x" } } });
		let owner = owner(raw.clone());

		assert_eq!(serde_json::to_value(&owner).expect("Owner should serialize."), raw);
	}
}

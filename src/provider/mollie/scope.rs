//! Permission scopes published by Mollie Connect.

// self
use crate::{_prelude::*, auth::ScopeList};

/// Known Mollie Connect scopes.
///
/// The engine treats scopes as opaque strings; this enum only saves callers from typos. Unknown
/// scope strings can still be requested through [`ScopeList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MollieScope {
	/// `payments.read`
	#[serde(rename = "payments.read")]
	PaymentsRead,
	/// `payments.write`
	#[serde(rename = "payments.write")]
	PaymentsWrite,
	/// `refunds.read`
	#[serde(rename = "refunds.read")]
	RefundsRead,
	/// `refunds.write`
	#[serde(rename = "refunds.write")]
	RefundsWrite,
	/// `customers.read`
	#[serde(rename = "customers.read")]
	CustomersRead,
	/// `customers.write`
	#[serde(rename = "customers.write")]
	CustomersWrite,
	/// `mandates.read`
	#[serde(rename = "mandates.read")]
	MandatesRead,
	/// `mandates.write`
	#[serde(rename = "mandates.write")]
	MandatesWrite,
	/// `subscriptions.read`
	#[serde(rename = "subscriptions.read")]
	SubscriptionsRead,
	/// `subscriptions.write`
	#[serde(rename = "subscriptions.write")]
	SubscriptionsWrite,
	/// `profiles.read`
	#[serde(rename = "profiles.read")]
	ProfilesRead,
	/// `profiles.write`
	#[serde(rename = "profiles.write")]
	ProfilesWrite,
	/// `invoices.read`
	#[serde(rename = "invoices.read")]
	InvoicesRead,
	/// `settlements.read`
	#[serde(rename = "settlements.read")]
	SettlementsRead,
	/// `orders.read`
	#[serde(rename = "orders.read")]
	OrdersRead,
	/// `orders.write`
	#[serde(rename = "orders.write")]
	OrdersWrite,
	/// `shipments.read`
	#[serde(rename = "shipments.read")]
	ShipmentsRead,
	/// `shipments.write`
	#[serde(rename = "shipments.write")]
	ShipmentsWrite,
	/// `organizations.read`
	#[serde(rename = "organizations.read")]
	OrganizationsRead,
	/// `organizations.write`
	#[serde(rename = "organizations.write")]
	OrganizationsWrite,
	/// `onboarding.read`
	#[serde(rename = "onboarding.read")]
	OnboardingRead,
	/// `onboarding.write`
	#[serde(rename = "onboarding.write")]
	OnboardingWrite,
	/// `payment-links.read`
	#[serde(rename = "payment-links.read")]
	PaymentLinksRead,
	/// `payment-links.write`
	#[serde(rename = "payment-links.write")]
	PaymentLinksWrite,
	/// `balances.read`
	#[serde(rename = "balances.read")]
	BalancesRead,
	/// `terminals.read`
	#[serde(rename = "terminals.read")]
	TerminalsRead,
	/// `terminals.write`
	#[serde(rename = "terminals.write")]
	TerminalsWrite,
}
impl MollieScope {
	/// Every known scope, in Mollie's documentation order.
	pub const ALL: [MollieScope; 27] = [
		MollieScope::PaymentsRead,
		MollieScope::PaymentsWrite,
		MollieScope::RefundsRead,
		MollieScope::RefundsWrite,
		MollieScope::CustomersRead,
		MollieScope::CustomersWrite,
		MollieScope::MandatesRead,
		MollieScope::MandatesWrite,
		MollieScope::SubscriptionsRead,
		MollieScope::SubscriptionsWrite,
		MollieScope::ProfilesRead,
		MollieScope::ProfilesWrite,
		MollieScope::InvoicesRead,
		MollieScope::SettlementsRead,
		MollieScope::OrdersRead,
		MollieScope::OrdersWrite,
		MollieScope::ShipmentsRead,
		MollieScope::ShipmentsWrite,
		MollieScope::OrganizationsRead,
		MollieScope::OrganizationsWrite,
		MollieScope::OnboardingRead,
		MollieScope::OnboardingWrite,
		MollieScope::PaymentLinksRead,
		MollieScope::PaymentLinksWrite,
		MollieScope::BalancesRead,
		MollieScope::TerminalsRead,
		MollieScope::TerminalsWrite,
	];

	/// Returns the scope string sent to Mollie.
	pub const fn as_str(self) -> &'static str {
		match self {
			MollieScope::PaymentsRead => "payments.read",
			MollieScope::PaymentsWrite => "payments.write",
			MollieScope::RefundsRead => "refunds.read",
			MollieScope::RefundsWrite => "refunds.write",
			MollieScope::CustomersRead => "customers.read",
			MollieScope::CustomersWrite => "customers.write",
			MollieScope::MandatesRead => "mandates.read",
			MollieScope::MandatesWrite => "mandates.write",
			MollieScope::SubscriptionsRead => "subscriptions.read",
			MollieScope::SubscriptionsWrite => "subscriptions.write",
			MollieScope::ProfilesRead => "profiles.read",
			MollieScope::ProfilesWrite => "profiles.write",
			MollieScope::InvoicesRead => "invoices.read",
			MollieScope::SettlementsRead => "settlements.read",
			MollieScope::OrdersRead => "orders.read",
			MollieScope::OrdersWrite => "orders.write",
			MollieScope::ShipmentsRead => "shipments.read",
			MollieScope::ShipmentsWrite => "shipments.write",
			MollieScope::OrganizationsRead => "organizations.read",
			MollieScope::OrganizationsWrite => "organizations.write",
			MollieScope::OnboardingRead => "onboarding.read",
			MollieScope::OnboardingWrite => "onboarding.write",
			MollieScope::PaymentLinksRead => "payment-links.read",
			MollieScope::PaymentLinksWrite => "payment-links.write",
			MollieScope::BalancesRead => "balances.read",
			MollieScope::TerminalsRead => "terminals.read",
			MollieScope::TerminalsWrite => "terminals.write",
		}
	}
}
impl Display for MollieScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<MollieScope> for String {
	fn from(value: MollieScope) -> Self {
		value.as_str().to_owned()
	}
}
impl From<MollieScope> for ScopeList {
	fn from(value: MollieScope) -> Self {
		ScopeList::from(value.as_str())
	}
}

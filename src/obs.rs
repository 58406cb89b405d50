//! Optional observability helpers for provider calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth2_mollie.flow` with the `flow`
//!   (operation), `stage` (call site), and `outcome` fields. Failures also emit a `WARN` event
//!   carrying the error message.
//! - Enable `metrics` to increment the `oauth2_mollie_flow_total` counter for every
//!   attempt/success/failure, labeled by `flow` + `outcome`.

mod metrics;
mod tracing;

pub use self::metrics::*;
pub use self::tracing::*;

// self
use crate::_prelude::*;

/// Engine operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Authorization URL construction.
	Authorization,
	/// Token exchange against the token endpoint.
	AccessToken,
	/// Resource-owner profile lookup.
	ResourceOwner,
	/// Token revocation.
	Revocation,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Authorization => "authorization",
			FlowKind::AccessToken => "access_token",
			FlowKind::ResourceOwner => "resource_owner",
			FlowKind::Revocation => "revocation",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs an async operation inside a flow span, recording its attempt and outcome.
pub(crate) async fn observe<Fut, T>(kind: FlowKind, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = FlowSpan::new(kind, stage);

	record_flow_outcome(kind, FlowOutcome::Attempt);

	let result = span.instrument(fut).await;

	finish(kind, &span, &result);

	result
}

/// Synchronous counterpart of [`observe`].
pub(crate) fn observe_sync<F, T>(kind: FlowKind, stage: &'static str, f: F) -> Result<T>
where
	F: FnOnce() -> Result<T>,
{
	let span = FlowSpan::new(kind, stage);

	record_flow_outcome(kind, FlowOutcome::Attempt);

	let result = span.in_scope(f);

	finish(kind, &span, &result);

	result
}

fn finish<T>(kind: FlowKind, span: &FlowSpan, result: &Result<T>) {
	match result {
		Ok(_) => span.record_outcome(FlowOutcome::Success, None),
		Err(e) => span.record_outcome(FlowOutcome::Failure, Some(e)),
	}

	record_flow_result(kind, result);
}

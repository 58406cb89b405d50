// self
use crate::{
	_prelude::*,
	obs::{FlowKind, FlowOutcome},
};

/// Future returned by [`FlowSpan::instrument`]; instrumented only with the `tracing` feature.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`FlowSpan::instrument`]; instrumented only with the `tracing` feature.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// `oauth2_mollie.flow` span opened around one client operation.
///
/// The span carries `flow` and `stage` from creation; `outcome` stays empty until
/// [`FlowSpan::record_outcome`] fills it.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Opens a span for `kind` at call site `stage`.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			Self {
				span: tracing::info_span!(
					"oauth2_mollie.flow",
					flow = kind.as_str(),
					stage,
					outcome = tracing::field::Empty,
				),
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Runs a synchronous section inside the span.
	pub fn in_scope<F, T>(&self, f: F) -> T
	where
		F: FnOnce() -> T,
	{
		#[cfg(feature = "tracing")]
		{
			self.span.in_scope(f)
		}
		#[cfg(not(feature = "tracing"))]
		{
			f()
		}
	}

	/// Attaches the span to a future so every poll runs inside it.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}

	/// Fills the `outcome` field; failures also emit a `WARN` event with the error's `Display`
	/// output, which never contains secrets.
	pub fn record_outcome(&self, outcome: FlowOutcome, error: Option<&dyn Display>) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", outcome.as_str());

			if let Some(error) = error {
				tracing::warn!(parent: &self.span, error = %error, "Provider call failed.");
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (outcome, error);
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn in_scope_returns_the_closure_value() {
		let span = FlowSpan::new(FlowKind::Authorization, "authorization_url");

		assert_eq!(span.in_scope(|| 42), 42);
	}

	#[test]
	fn record_outcome_accepts_any_display() {
		let span = FlowSpan::new(FlowKind::Revocation, "revoke_token");

		span.record_outcome(FlowOutcome::Failure, Some(&"boom"));
		span.record_outcome(FlowOutcome::Success, None);
	}

	#[tokio::test]
	async fn instrument_keeps_the_output() {
		let span = FlowSpan::new(FlowKind::AccessToken, "get_access_token");

		assert_eq!(span.instrument(async { "token" }).await, "token");
	}
}

use crate::client::ApiFailure;
use crate::types::{Outcome, Probe, Verdict};

/// Turns the recorded outcome of a list probe into a verdict.
///
/// Success is Granted even when the list came back empty: being able to list
/// proves the permission regardless of what exists. Every failure is Denied;
/// the detail string separates a real authorization denial from failures the
/// audit cannot interpret, which are collapsed into Denied on the
/// conservative assumption of insufficient access. One attempt is
/// definitive, there are no retries here.
pub fn classify(probe: Probe, result: &Result<usize, ApiFailure>) -> Verdict {
    match result {
        Ok(count) => Verdict {
            probe,
            outcome: Outcome::Granted,
            detail: Some(format!("{count} item(s)")),
        },
        Err(failure) => Verdict {
            probe,
            outcome: Outcome::Denied,
            detail: Some(describe(failure)),
        },
    }
}

/// Failure description with a tag distinguishing an authorization denial
/// from a failure of any other kind.
pub fn describe(failure: &ApiFailure) -> String {
    match failure {
        ApiFailure::Forbidden(msg) => format!("access denied: {msg}"),
        failure => format!("transient failure: {failure}"),
    }
}

//! Sequential execution of a request plan.

use futures::stream::{self, Stream, StreamExt};
use suimon_types::DownloadRequest;
use tracing::warn;

use crate::{FetchError, PortalClient};

/// What one request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// UTF-8 payload ready to be written.
    Payload(Vec<u8>),
    /// The portal returned no download link for this span.
    NoData,
    /// A round trip failed; the plan continues with the next step.
    Failed(String),
}

/// A request paired with its outcome.
#[derive(Debug, Clone)]
pub struct StepResult {
    /// The request that was executed.
    pub request: DownloadRequest,
    /// What it produced.
    pub outcome: StepOutcome,
}

/// Runs `requests` one at a time, in order.
///
/// Each step finishes both round trips before the next begins. Failures
/// are reported as [`StepOutcome::Failed`] and never end the stream.
pub fn plan_stream(
    client: &PortalClient,
    requests: Vec<DownloadRequest>,
) -> impl Stream<Item = StepResult> + '_ {
    stream::iter(requests).then(move |request| async move {
        let result = client.execute_request(&request).await;
        process_step_result(request, result)
    })
}

fn process_step_result(
    request: DownloadRequest,
    result: Result<Option<Vec<u8>>, FetchError>,
) -> StepResult {
    let outcome = match result {
        Ok(Some(payload)) => StepOutcome::Payload(payload),
        Ok(None) => StepOutcome::NoData,
        Err(e) => {
            warn!(span = %request.span, error = %e, "request failed");
            StepOutcome::Failed(e.to_string())
        }
    };
    StepResult { request, outcome }
}

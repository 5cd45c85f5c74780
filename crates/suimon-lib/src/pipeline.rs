//! End-to-end download: validate, plan, exchange, write.

use std::path::PathBuf;
use std::pin::pin;

use futures::StreamExt;
use serde::Serialize;
use suimon_fetch::{PortalClient, StationSession, StepOutcome, plan_stream};
use suimon_plan::{KindRegistry, Planner};
use suimon_store::Materializer;
use suimon_types::{
    DataCategory, DownloadRequest, KindCode, PlanBounds, RequestSpan, Result, StationId,
    StationIdentity, Strategy, SuimonError,
};
use tracing::{info, warn};

/// A validated plan, ready to execute.
#[derive(Debug, Clone)]
pub struct PreparedPlan {
    /// Data family.
    pub category: DataCategory,
    /// Kind code.
    pub kind: KindCode,
    /// Strategy the kind dispatched to.
    pub strategy: Strategy,
    /// Bounds as entered and validated.
    pub bounds: PlanBounds,
    /// Identity used to name the output directory.
    pub identity: StationIdentity,
    /// Requests in execution order.
    pub requests: Vec<DownloadRequest>,
}

impl PreparedPlan {
    /// Returns the number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns true if the plan has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// What happened to one step once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum StepStatus {
    /// The payload was written to this path.
    Written(PathBuf),
    /// The portal had no file for the span.
    NoData,
    /// The exchange or the write failed.
    Failed(String),
}

/// Progress report for one executed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Span the step covered.
    pub span: RequestSpan,
    /// Outcome.
    pub status: StepStatus,
}

impl std::fmt::Display for StepReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.status {
            StepStatus::Written(path) => write!(f, "{}: wrote {}", self.span, path.display()),
            StepStatus::NoData => write!(f, "{}: no data", self.span),
            StepStatus::Failed(e) => write!(f, "{}: failed ({e})", self.span),
        }
    }
}

/// Totals for an executed plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    /// Files written, in plan order.
    pub written: Vec<PathBuf>,
    /// Steps the portal had no data for.
    pub no_data: usize,
    /// Steps that failed.
    pub failed: usize,
}

impl PlanSummary {
    fn record(&mut self, status: &StepStatus) {
        match status {
            StepStatus::Written(path) => self.written.push(path.clone()),
            StepStatus::NoData => self.no_data += 1,
            StepStatus::Failed(_) => self.failed += 1,
        }
    }

    /// Returns the number of steps executed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.written.len() + self.no_data + self.failed
    }
}

impl std::fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} written, {} no data, {} failed",
            self.written.len(),
            self.no_data,
            self.failed
        )
    }
}

/// Runs downloads against one portal into one output root.
#[derive(Debug, Clone)]
pub struct DownloadPipeline {
    client: PortalClient,
    store: Materializer,
}

impl DownloadPipeline {
    /// Creates a pipeline.
    #[must_use]
    pub const fn new(client: PortalClient, store: Materializer) -> Self {
        Self { client, store }
    }

    /// Returns the portal client.
    #[must_use]
    pub const fn client(&self) -> &PortalClient {
        &self.client
    }

    /// Returns the materializer.
    #[must_use]
    pub const fn store(&self) -> &Materializer {
        &self.store
    }

    /// Looks up the strategy for a category and kind.
    ///
    /// # Errors
    ///
    /// Returns [`SuimonError::Unsupported`] if the pair is not in the table.
    pub fn strategy(category: DataCategory, kind: KindCode) -> Result<Strategy> {
        KindRegistry::global()
            .get(category, kind)
            .ok_or(SuimonError::Unsupported { category, kind })
    }

    /// Parses the entered bounds, checks the station has data for every
    /// year they cover, and plans the requests.
    ///
    /// Input and dispatch errors are raised before any network call.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind is unsupported, the input is malformed,
    /// or the range is not fully available.
    pub async fn prepare(
        &self,
        category: DataCategory,
        station_id: StationId,
        kind: KindCode,
        start: &str,
        end: &str,
    ) -> Result<PreparedPlan> {
        let strategy = Self::strategy(category, kind)?;
        let bounds = PlanBounds::parse(strategy.axis, start, end)?;

        let session = StationSession::new(self.client.clone(), category, station_id, kind);
        self.prepare_with(&session, strategy, bounds).await
    }

    /// Like [`prepare`](Self::prepare), reusing an existing session.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is not fully available or the bounds
    /// do not fit the strategy.
    pub async fn prepare_with(
        &self,
        session: &StationSession,
        strategy: Strategy,
        bounds: PlanBounds,
    ) -> Result<PreparedPlan> {
        let (start, end) = (bounds.start_year(), bounds.end_year());
        if !session.validate_range(start, end).await {
            return Err(SuimonError::RangeUnavailable { start, end });
        }

        let identity = session.fetch_station_data().await;
        let requests = Planner::new(session.category(), session.station_id().clone(), session.kind())
            .plan(strategy, bounds)?;

        info!(
            station = %session.station_id(),
            %strategy,
            %bounds,
            steps = requests.len(),
            "prepared plan"
        );
        Ok(PreparedPlan {
            category: session.category(),
            kind: session.kind(),
            strategy,
            bounds,
            identity,
            requests,
        })
    }

    /// Executes a plan one step at a time, writing each payload.
    ///
    /// `on_step` is called after every step. Failed steps are counted and
    /// skipped; the plan always runs to the end.
    pub async fn execute<F>(&self, plan: PreparedPlan, mut on_step: F) -> PlanSummary
    where
        F: FnMut(&StepReport) + Send,
    {
        let PreparedPlan {
            category,
            kind,
            identity,
            requests,
            ..
        } = plan;

        let mut summary = PlanSummary::default();
        let mut steps = pin!(plan_stream(&self.client, requests));

        while let Some(step) = steps.next().await {
            let span = step.request.span;
            let status = match step.outcome {
                StepOutcome::Payload(payload) => {
                    self.write(payload, &identity, category, kind, span).await
                }
                StepOutcome::NoData => StepStatus::NoData,
                StepOutcome::Failed(e) => StepStatus::Failed(e),
            };

            summary.record(&status);
            on_step(&StepReport { span, status });
        }

        info!(%summary, "plan finished");
        summary
    }

    /// Prepares and executes in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if [`prepare`](Self::prepare) fails.
    pub async fn run<F>(
        &self,
        category: DataCategory,
        station_id: StationId,
        kind: KindCode,
        start: &str,
        end: &str,
        on_step: F,
    ) -> Result<PlanSummary>
    where
        F: FnMut(&StepReport) + Send,
    {
        let plan = self.prepare(category, station_id, kind, start, end).await?;
        Ok(self.execute(plan, on_step).await)
    }

    async fn write(
        &self,
        payload: Vec<u8>,
        identity: &StationIdentity,
        category: DataCategory,
        kind: KindCode,
        span: RequestSpan,
    ) -> StepStatus {
        let store = self.store.clone();
        let identity = identity.clone();
        let result = tokio::task::spawn_blocking(move || {
            store.write(&payload, &identity, category, kind, &span)
        })
        .await;

        match result {
            Ok(Ok(path)) => StepStatus::Written(path),
            Ok(Err(e)) => {
                warn!(%span, error = %e, "write failed");
                StepStatus::Failed(e.to_string())
            }
            Err(e) => StepStatus::Failed(format!("write task failed: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_lookup() {
        assert_eq!(
            DownloadPipeline::strategy(DataCategory::Rain, KindCode::new(2)).unwrap(),
            Strategy::MONTHLY_PADDED
        );
        assert!(matches!(
            DownloadPipeline::strategy(DataCategory::Dam, KindCode::new(1)),
            Err(SuimonError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = PlanSummary::default();
        summary.record(&StepStatus::Written(PathBuf::from("a.dat")));
        summary.record(&StepStatus::NoData);
        summary.record(&StepStatus::Failed("timeout".into()));
        summary.record(&StepStatus::NoData);

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.to_string(), "1 written, 2 no data, 1 failed");
    }

    #[tokio::test]
    async fn test_rejects_before_network() {
        // Port 9 is never contacted: both errors are raised first.
        let config = suimon_fetch::ClientConfig::default().with_host("http://127.0.0.1:9");
        let pipeline = DownloadPipeline::new(
            PortalClient::new(config).unwrap(),
            Materializer::new("unused"),
        );

        let err = pipeline
            .prepare(DataCategory::Snow, StationId::new("1"), KindCode::new(1), "2019", "2019")
            .await
            .unwrap_err();
        assert!(matches!(err, SuimonError::Unsupported { .. }));

        let err = pipeline
            .prepare(DataCategory::Rain, StationId::new("1"), KindCode::new(1), "2019", "2020/01")
            .await
            .unwrap_err();
        assert!(matches!(err, SuimonError::Input(_)));
    }
}

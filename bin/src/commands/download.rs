//! Download command implementation.
//!
//! This module validates the requested range, then runs the plan on a
//! background task while the progress bar follows it over a channel.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use suimon_lib::prelude::*;
use tokio::sync::mpsc;

use crate::display::step_progress;

/// Download a station's data files for the entered range.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn download(
    config: ClientConfig,
    station: &str,
    category: DataCategory,
    kind: KindCode,
    start: &str,
    end: &str,
    output_dir: PathBuf,
    timeout: u64,
    quiet: bool,
) -> Result<()> {
    let client = PortalClient::new(config.with_timeout(Duration::from_secs(timeout)))
        .context("Failed to create HTTP client")?;
    let pipeline = DownloadPipeline::new(client, Materializer::new(&output_dir));

    let plan = pipeline
        .prepare(category, StationId::new(station), kind, start, end)
        .await
        .with_context(|| format!("Cannot download {category} kind {kind} for station {station}"))?;

    if !quiet {
        println!("{} ({})", plan.identity, plan.strategy);
        println!("{} requests, {}", plan.len(), plan.bounds);
    }

    let progress = step_progress(plan.len(), quiet);
    let (tx, mut rx) = mpsc::unbounded_channel::<StepReport>();
    let task = tokio::spawn(async move {
        pipeline
            .execute(plan, move |step| {
                let _ = tx.send(step.clone());
            })
            .await
    });

    while let Some(step) = rx.recv().await {
        if let StepStatus::Failed(_) = step.status {
            progress.println(step.to_string());
        }
        progress.set_message(step.span.to_string());
        progress.inc(1);
    }

    let summary = task.await.context("Download task failed")?;
    progress.finish_with_message(summary.to_string());

    if !quiet {
        println!("{summary}");
        println!("Output directory: {}", output_dir.display());
    }

    Ok(())
}

//! Wall-clock driver

use std::time::Duration;

use anyhow::{Context, Result};
use qtrotator::{Capabilities, RotatorHandle, RotatorOptions};
use tokio::time::{sleep_until, Instant};

use crate::scene::{demo_page, panel_label};

/// Drive a rotator on the real clock for `duration_ms`, logging every change
pub async fn run(
    options: RotatorOptions,
    capabilities: Capabilities,
    panels: usize,
    duration_ms: u64,
) -> Result<()> {
    let (mut doc, container) = demo_page(panels);
    let mut handle = RotatorHandle::new(container);
    let started = Instant::now();

    let rotator = handle
        .initialize(&mut doc, options, capabilities, 0)
        .context("Failed to initialize rotator")?;
    tracing::info!(
        panel = %panel_label(&doc, rotator.current_panel()),
        interval = rotator.options().interval,
        "rotator running"
    );
    let mut shown = rotator.current_index();

    loop {
        let deadline = handle
            .rotator()
            .and_then(|r| r.next_deadline())
            .unwrap_or(duration_ms)
            .min(duration_ms);
        sleep_until(started + Duration::from_millis(deadline)).await;

        let now = started.elapsed().as_millis() as u64;
        handle.tick(&mut doc, now);

        if let Some(rotator) = handle.rotator() {
            if rotator.current_index() != shown {
                shown = rotator.current_index();
                tracing::info!(
                    at = now,
                    panel = %panel_label(&doc, rotator.current_panel()),
                    "rotated"
                );
            }
        }

        if now >= duration_ms {
            break;
        }
    }

    handle.dispatch(&mut doc, qtrotator::Command::Destroy, duration_ms)?;
    tracing::info!("rotator stopped");
    Ok(())
}

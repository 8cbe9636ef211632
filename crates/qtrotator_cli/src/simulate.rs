//! Virtual-clock simulation

use anyhow::{Context, Result};
use qtrotator::{Capabilities, RotatorHandle, RotatorOptions};
use serde::Serialize;

use crate::scene::{demo_page, panel_label, DragScript};

pub struct SimulateArgs {
    pub options: RotatorOptions,
    pub capabilities: Capabilities,
    pub panels: usize,
    pub duration_ms: u64,
    pub step_ms: u64,
    pub drags: Vec<DragScript>,
    pub json: bool,
}

#[derive(Serialize)]
struct Frame<'a> {
    at: u64,
    panel: &'a str,
    #[serde(flatten)]
    state: qtrotator::RotatorSnapshot,
}

/// Step a rotator through `duration_ms`, printing its state after each step
pub fn simulate(args: SimulateArgs) -> Result<()> {
    let (mut doc, container) = demo_page(args.panels);
    let mut handle = RotatorHandle::new(container);
    handle
        .initialize(&mut doc, args.options, args.capabilities, 0)
        .context("Failed to initialize rotator")?;

    let mut drags = args.drags;
    drags.sort_by_key(|d| d.at);
    let mut drags = drags.into_iter().peekable();

    let step = args.step_ms.max(1);
    let mut now = 0;
    while now <= args.duration_ms {
        while let Some(drag) = drags.next_if(|d| d.at <= now) {
            handle.tick(&mut doc, drag.at);
            for event in drag.events() {
                handle.handle_event(&mut doc, &event);
            }
            tracing::info!(at = drag.at, from = drag.from, to = drag.to, "drag");
        }

        handle.tick(&mut doc, now);

        let Some(rotator) = handle.rotator() else {
            break;
        };
        let label = panel_label(&doc, rotator.current_panel());
        if args.json {
            let frame = Frame {
                at: now,
                panel: &label,
                state: rotator.snapshot(now),
            };
            println!("{}", serde_json::to_string(&frame)?);
        } else {
            let progress = rotator
                .progress(now)
                .map(|p| format!("{:>3.0}%", p * 100.0))
                .unwrap_or_else(|| "  - ".to_string());
            println!(
                "{:>8}ms  [{}/{}] {}  progress {}",
                now,
                rotator.current_index() + 1,
                rotator.panel_count(),
                label,
                progress
            );
        }
        now += step;
    }

    handle.dispatch(&mut doc, qtrotator::Command::Destroy, args.duration_ms)?;
    Ok(())
}

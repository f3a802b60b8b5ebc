/// Observer implementations for selection progress
use super::traits::{SelectionObserver, SelectionStep};
use crate::core::diversity_selector::SelectionOutcome;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::info;

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SelectionObserver for NoopObserver {
    fn on_step(&mut self, _step: &SelectionStep<'_>) {}
}

fn describe(step: &SelectionStep<'_>) -> String {
    if step.step == 1 {
        format!("Selected sequence {}: {}", step.step, step.id)
    } else {
        format!(
            "Selected sequence {}: {} (max identity to set: {:.3})",
            step.step, step.id, step.max_identity
        )
    }
}

/// Logs each pick through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SelectionObserver for TracingObserver {
    fn on_start(&mut self, total: usize, target: usize) {
        info!(
            "Selecting {} diverse sequences from {} candidates",
            target.min(total),
            total
        );
    }

    fn on_step(&mut self, step: &SelectionStep<'_>) {
        info!("{}", describe(step));
    }

    fn on_finish(&mut self, outcome: &SelectionOutcome) {
        if outcome.trivial {
            info!("Kept all {} candidates (no selection needed)", outcome.len());
        }
    }
}

/// Drives an `indicatif` bar, one tick per pick.
pub struct ProgressBarObserver {
    pb: ProgressBar,
    echo_steps: bool,
}

impl ProgressBarObserver {
    pub fn new() -> Self {
        Self {
            pb: ProgressBar::new(0),
            echo_steps: true,
        }
    }

    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden()),
            echo_steps: false,
        }
    }

    pub fn position(&self) -> u64 {
        self.pb.position()
    }
}

impl Default for ProgressBarObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionObserver for ProgressBarObserver {
    fn on_start(&mut self, total: usize, target: usize) {
        self.pb.set_length(target.min(total) as u64);
        self.pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-"),
        );
        self.pb.set_message("Selecting diverse sequences");
    }

    fn on_step(&mut self, step: &SelectionStep<'_>) {
        if self.echo_steps {
            self.pb.println(describe(step));
        }
        self.pb.inc(1);
    }

    fn on_finish(&mut self, outcome: &SelectionOutcome) {
        self.pb.set_position(outcome.len() as u64);
        self.pb
            .finish_with_message(format!("Selected {} sequences", outcome.len()));
    }
}

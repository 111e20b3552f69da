//! Asset load tracking and the one-time readiness edge.

use crate::config::Timings;
use crate::error::{Failure, FailureKind};
use crate::host::Page;
use crate::session::Task;
use crate::timer::TimerQueue;
use std::time::Duration;

/// Index of a declared asset, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AssetId(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    pub total_assets: usize,
    pub loaded_assets: usize,
    pub ready: bool,
}

/// `floor(loaded / total * 100)`. A page without declared assets reports 100.
#[inline]
pub fn progress_percent(loaded: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (loaded.min(total) * 100 / total) as u8
}

pub struct LoadTracker {
    state: LoadState,
    fatal: Option<String>,
    settle_delay: Duration,
    overlay_remove_delay: Duration,
}

impl LoadTracker {
    pub fn new(total_assets: usize, timings: &Timings) -> Self {
        Self {
            state: LoadState {
                total_assets,
                ..Default::default()
            },
            fatal: None,
            settle_delay: timings.settle_delay,
            overlay_remove_delay: timings.overlay_remove_delay,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state.ready
    }

    pub fn progress(&self) -> u8 {
        progress_percent(self.state.loaded_assets, self.state.total_assets)
    }

    /// Detail of the model load failure, if one was reported.
    pub fn fatal_error(&self) -> Option<&str> {
        self.fatal.as_deref()
    }

    /// Count one completion and publish the new progress.
    ///
    /// The engine guarantees one completion per asset; extra deliveries are
    /// clamped so the counter never passes the total.
    pub fn asset_loaded<P: Page + ?Sized>(&mut self, page: &mut P, asset: AssetId) -> u8 {
        if self.state.loaded_assets < self.state.total_assets {
            self.state.loaded_assets += 1;
        } else {
            log::warn!(
                "[load] completion for {:?} after all {} assets loaded",
                asset,
                self.state.total_assets
            );
        }
        let percent = self.progress();
        page.show_progress(percent);
        log::debug!(
            "[load] {:?} done ({}/{}) {}%",
            asset,
            self.state.loaded_assets,
            self.state.total_assets,
            percent
        );
        percent
    }

    /// Latch readiness. Returns `true` only on the first delivery.
    pub fn scene_loaded(&mut self, timers: &mut TimerQueue<Task>, now: Duration) -> bool {
        if self.state.ready {
            log::warn!("[load] duplicate scene loaded signal ignored");
            return false;
        }
        self.state.ready = true;
        timers.schedule(now, self.settle_delay, Task::RevealScene);
        log::info!("[load] scene loaded");
        true
    }

    /// Start the overlay fade; removal follows after the remove delay.
    pub(crate) fn reveal<P: Page + ?Sized>(
        &mut self,
        page: &mut P,
        timers: &mut TimerQueue<Task>,
        now: Duration,
    ) {
        page.set_overlay_opacity(0.0);
        timers.schedule(now, self.overlay_remove_delay, Task::RemoveOverlay);
    }

    pub(crate) fn remove_overlay<P: Page + ?Sized>(&mut self, page: &mut P) {
        page.remove_overlay();
        log::debug!("[load] overlay removed");
    }

    /// The model failed to load. Terminal for the session: nothing retries.
    pub fn model_error(&mut self, detail: impl Into<String>, message: &str) -> Failure {
        let detail = detail.into();
        log::error!("[load] model error: {}", detail);
        self.fatal.get_or_insert_with(|| detail.clone());
        Failure::new(FailureKind::FatalLoad, message).with_detail(detail)
    }
}

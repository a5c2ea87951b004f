use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use super::{DisplaySurface, ImageOf, RenderView, RenderedFrame, TransferImage};
use crate::options::RenderOptions;
use crate::search::CancellationToken;
use crate::util::frame_timing::FrameTiming;

/// What one iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// An image was transferred to the display and released.
    Presented,
    /// The engine produced nothing displayable.
    Skipped,
    /// The frame request failed.
    Failed,
}

/// Running counters over all iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Iterations completed.
    pub iterations: u64,
    /// Iterations that presented an image.
    pub presented: u64,
    /// Iterations with no image.
    pub skipped: u64,
    /// Iterations whose frame request failed.
    pub failed: u64,
}

/// Drives one view/surface pair: size → frame → image → present.
///
/// Iterations run strictly in sequence. [`run`](Self::run) repeats until
/// its stop token fires and yields to the executor between iterations so
/// searches and bookmark actions can interleave; [`tick`](Self::tick) runs
/// exactly one iteration.
pub struct RenderLoop<V, D> {
    view: V,
    surface: D,
    stats: FrameStats,
    timing: FrameTiming,
    stats_log_interval: u32,
}

impl<V, D> RenderLoop<V, D>
where
    V: RenderView,
    D: DisplaySurface<ImageOf<V>>,
{
    /// Bind a loop to a view and its display surface.
    pub fn new(view: V, surface: D, options: &RenderOptions) -> Self {
        Self {
            view,
            surface,
            stats: FrameStats::default(),
            timing: FrameTiming::new(),
            stats_log_interval: options.stats_log_interval,
        }
    }

    /// Counters so far.
    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Borrow the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Borrow the display surface.
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Run iterations until `stop` fires. Returns the final counters.
    pub async fn run(&mut self, stop: &CancellationToken) -> FrameStats {
        log::info!("render loop started");
        while !stop.is_cancelled() {
            let _ = self.tick().await;
            YieldNow::default().await;
        }
        log::info!(
            "render loop stopped after {} iteration(s)",
            self.stats.iterations
        );
        self.stats
    }

    /// Run a single iteration.
    pub async fn tick(&mut self) -> FrameOutcome {
        let size = self.surface.size();
        self.view.apply_size(size);

        let outcome = match self.view.render_frame().await {
            Err(e) => {
                log::warn!("frame request failed: {e}");
                FrameOutcome::Failed
            }
            Ok(mut frame) => match frame.image().await {
                None => FrameOutcome::Skipped,
                Some(image) => {
                    self.surface.present(&image).await;
                    image.release();
                    FrameOutcome::Presented
                }
            },
        };

        self.record(outcome, size);
        outcome
    }

    fn record(&mut self, outcome: FrameOutcome, size: super::DisplaySize) {
        self.timing.end_frame();
        let stats = &mut self.stats;
        stats.iterations += 1;
        match outcome {
            FrameOutcome::Presented => stats.presented += 1,
            FrameOutcome::Skipped => stats.skipped += 1,
            FrameOutcome::Failed => stats.failed += 1,
        }
        let interval = u64::from(self.stats_log_interval);
        if interval > 0 && stats.iterations % interval == 0 {
            log::debug!(
                "frames: {} presented, {} skipped, {} failed at {size}, {:.1} fps",
                stats.presented,
                stats.skipped,
                stats.failed,
                self.timing.fps()
            );
        }
    }
}

/// Returns `Pending` once (after waking itself) so other tasks on the same
/// executor get polled.
#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

//! Render loop and the engine/display interfaces it drives.
//!
//! The rendering engine and the display surface are external. The loop only
//! needs the handful of operations below; everything else (geometry
//! streaming, culling, GPU submission) stays behind [`RenderView`].

mod render_loop;

use std::fmt;
use std::future::Future;

pub use render_loop::{FrameOutcome, FrameStats, RenderLoop};

/// Display size in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplaySize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl DisplaySize {
    /// Build a size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for DisplaySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Failure to produce a frame. Recovery is the engine's business; the loop
/// logs it and moves on to the next iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The engine reported an error.
    Engine(String),
    /// The render target was lost (e.g. context loss).
    SurfaceLost,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engine(msg) => write!(f, "engine error: {msg}"),
            Self::SurfaceLost => write!(f, "render surface lost"),
        }
    }
}

impl std::error::Error for FrameError {}

/// An engine-side image handle. Single use: must be released right after
/// it has been presented.
pub trait TransferImage {
    /// Give the handle back to the engine.
    fn release(self);
}

/// A completed frame.
pub trait RenderedFrame {
    /// Image handle type.
    type Image: TransferImage;

    /// The rendered image, or `None` if the frame has nothing displayable.
    fn image(&mut self) -> impl Future<Output = Option<Self::Image>>;
}

/// The rendering engine's view.
pub trait RenderView {
    /// Frame type produced by [`render_frame`](Self::render_frame).
    type Frame: RenderedFrame;

    /// Apply the display size. The engine treats an unchanged size as a
    /// no-op.
    fn apply_size(&mut self, size: DisplaySize);

    /// Render a frame; resolves once the engine has produced it.
    fn render_frame(
        &mut self,
    ) -> impl Future<Output = Result<Self::Frame, FrameError>>;
}

/// The surface rendered images are shown on.
pub trait DisplaySurface<I> {
    /// Current size; the surface is the source of truth every iteration.
    fn size(&self) -> DisplaySize;

    /// Transfer `image` to the screen.
    fn present(&mut self, image: &I) -> impl Future<Output = ()>;
}

/// Image type produced by a view.
pub type ImageOf<V> = <<V as RenderView>::Frame as RenderedFrame>::Image;

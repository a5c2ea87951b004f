// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Orchestration core for an interactive 3D scene viewer.
//!
//! Vantage sits between the user, a continuous render loop, and a rendering
//! engine's query and highlight facilities. The engine itself (geometry
//! streaming, culling, GPU submission) and the scene data service are
//! external collaborators, consumed through the traits in [`render`],
//! [`scene`], [`highlight`], and [`camera`].
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - loads a scene and wires the core together
//! - [`render::RenderLoop`] - the size → frame → present cycle
//! - [`search::SearchIsolationController`] - cancellable search that hides
//!   everything except the matches
//! - [`bookmark::BookmarkBar`] - capture/recall camera pose slots
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Concurrency
//!
//! Everything runs cooperatively on one thread. The render loop and search
//! submissions are independent futures (typically spawned on a
//! [`futures::executor::LocalPool`]) that interleave at their suspension
//! points. The highlight index is the only state shared with the renderer
//! and is published as whole snapshots through a lock-free triple buffer, so
//! a frame never observes a half-applied isolation.

pub mod bookmark;
pub mod camera;
pub mod error;
pub mod highlight;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod search;
pub mod util;
pub mod viewer;

pub use bookmark::{BookmarkBar, PoseBookmark};
pub use camera::{CameraController, CameraPose, OrbitCamera};
pub use error::VantageError;
pub use highlight::{HighlightIndex, HighlightIndexState, HighlightReader};
pub use input::{Activation, BookmarkAction, Modifiers, MouseButton};
pub use options::Options;
pub use render::{DisplaySize, RenderLoop};
pub use scene::{ObjectDatabase, ObjectId, SceneLoader};
pub use search::{
    CancellationToken, SearchIsolationController, SearchOutcome, SearchQuery,
};
pub use viewer::{Viewer, ViewerSession};

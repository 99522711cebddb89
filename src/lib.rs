//! Gridgif turns a pluggable per-cell color source (a [`Painter`]) into an
//! animated GIF on disk.
//!
//! # Pipeline overview
//!
//! 1. **Fill**: [`Frame::fill`] walks a coarse cell grid over the canvas,
//!    queries the painter once per cell, and writes that color into every
//!    physical pixel of the cell.
//! 2. **Sequence**: [`FrameSequence`] keeps frames on a dense `1..=N` index
//!    and drives bulk fill with one shared painter instance.
//! 3. **Export**: each frame is persisted as a PNG still inside a fresh,
//!    collision-free output directory, then the stills are read back and
//!    composed into a single GIF.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Strict total order**: painters carry cross-frame state, so cells,
//!   frames, and stills are always processed sequentially, never reordered.
//! - **RGB8 end-to-end**: a frame owns a plain 3-channel byte buffer.
#![forbid(unsafe_code)]

pub mod core;
pub mod encode;
pub mod error;
pub mod export;
pub mod frame;
pub mod model;
pub mod painter;
pub mod painters;
pub mod sequence;

pub use self::core::{CellPos, Rgb8};
pub use encode::encode_gif;
pub use error::{GridgifError, GridgifResult};
pub use export::{render_gif, resolve_output_dir, save_sequence};
pub use frame::Frame;
pub use model::{Canvas, CellSize, GifConfig, PainterChoice};
pub use painter::Painter;
pub use painters::{HypnoPainter, ScramblePainter};
pub use sequence::FrameSequence;

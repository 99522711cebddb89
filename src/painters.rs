//! Bundled painters.
//!
//! These are illustrations, not the point of the crate: anything
//! implementing [`Painter`] works, including plain closures. Both painters
//! here are deterministic for a given seed.

use crate::core::{CellPos, Rgb8};
use crate::error::GridgifResult;
use crate::painter::Painter;

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn color_from_hash(h: u64) -> Rgb8 {
    Rgb8::new((h >> 16) as u8, (h >> 8) as u8, h as u8)
}

/// Per-query color noise.
///
/// Every query advances an internal counter that is mixed with the seed and
/// the cell coordinate, so repeated fills of the same sequence with the same
/// seed reproduce the same animation, while no two queries share a color
/// bucket.
#[derive(Clone, Debug)]
pub struct ScramblePainter {
    seed: u64,
    queries: u64,
}

impl ScramblePainter {
    pub fn new(seed: u64) -> Self {
        Self { seed, queries: 0 }
    }
}

impl Painter for ScramblePainter {
    fn color_at(&mut self, cell: CellPos) -> GridgifResult<Rgb8> {
        self.queries += 1;
        let coord = (u64::from(cell.col) << 32) | u64::from(cell.row);
        Ok(color_from_hash(mix64(
            self.seed ^ mix64(self.queries) ^ coord,
        )))
    }
}

/// Concentric square rings that shift by one cell every frame.
///
/// The ring offset alternates with an internal frame counter. The counter
/// advances when the sentinel cell `(cols - 1, rows)` is queried, which the
/// column-major fill pass reaches near the end of each frame; a single
/// instance shared across a sequence fill therefore animates. In colorized
/// mode the ring color steps every channel by 20 (wrapping) per frame
/// instead of staying black.
#[derive(Clone, Debug)]
pub struct HypnoPainter {
    cols: u32,
    rows: u32,
    frame: u64,
    ring_color: Option<Rgb8>,
}

impl HypnoPainter {
    /// `cols`/`rows` is the canvas size in cells
    /// (`width / cell_width`, `height / cell_height`).
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            frame: 0,
            ring_color: None,
        }
    }

    /// Rings in a seeded color that cycles each frame.
    pub fn colorized(cols: u32, rows: u32, seed: u64) -> Self {
        Self {
            cols,
            rows,
            frame: 0,
            ring_color: Some(color_from_hash(mix64(seed))),
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn in_ring(&self, cell: CellPos) -> bool {
        let offset = u32::from(self.frame % 2 == 0);
        let last_col = self.cols.saturating_sub(1);
        let last_row = self.rows.saturating_sub(1);

        let mut ring = offset;
        while ring < self.cols / 2 + offset {
            if cell.col == ring || cell.col + ring == last_col {
                return cell.row >= ring && cell.row + ring <= last_row;
            }
            if cell.row == ring || cell.row + ring == last_row {
                return cell.col >= ring && cell.col + ring <= last_row;
            }
            ring += 2;
        }
        false
    }
}

impl Painter for HypnoPainter {
    fn color_at(&mut self, cell: CellPos) -> GridgifResult<Rgb8> {
        if cell == CellPos::new(self.cols.saturating_sub(1), self.rows) {
            self.frame += 1;
            if let Some(color) = self.ring_color.as_mut() {
                *color = cycle(*color);
            }
        }

        if self.in_ring(cell) {
            Ok(self.ring_color.unwrap_or(Rgb8::BLACK))
        } else {
            Ok(Rgb8::WHITE)
        }
    }
}

fn cycle(color: Rgb8) -> Rgb8 {
    fn step(v: u8) -> u8 {
        let v = u16::from(v) + 20;
        if v > 255 { (v - 255) as u8 } else { v as u8 }
    }
    Rgb8::new(step(color.r), step(color.g), step(color.b))
}

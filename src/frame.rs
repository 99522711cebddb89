use crate::core::{CellPos, Rgb8};
use crate::error::{GridgifError, GridgifResult};
use crate::painter::Painter;

/// One still canvas plus its position in an animation sequence.
///
/// `index` 0 means "not yet owned by a sequence"; positive indices are
/// assigned and reassigned exclusively by
/// [`FrameSequence`](crate::FrameSequence). Size is fixed at construction;
/// the buffer is always exactly `width * height * 3` bytes of RGB8.
#[derive(Clone, Debug)]
pub struct Frame {
    index: u32,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// A black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 3;
        Self {
            index: 0,
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Wrap a pre-existing RGB8 buffer.
    pub fn from_buffer(width: u32, height: u32, data: Vec<u8>) -> GridgifResult<Self> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(GridgifError::validation(format!(
                "frame buffer is {} bytes, expected {expected} for {width}x{height} rgb8",
                data.len()
            )));
        }
        Ok(Self {
            index: 0,
            width,
            height,
            data,
        })
    }

    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: u32) {
        self.index = index;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB8 pixels, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = 3 * (y as usize * self.width as usize + x as usize);
        Some(Rgb8::new(self.data[at], self.data[at + 1], self.data[at + 2]))
    }

    /// Writes are clipped at the canvas edge: trailing cells overhang the
    /// canvas whenever the size is not an exact cell multiple, and their
    /// out-of-bounds pixels are dropped without error.
    fn put_pixel(&mut self, x: u32, y: u32, color: Rgb8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let at = 3 * (y as usize * self.width as usize + x as usize);
        self.data[at..at + 3].copy_from_slice(&color.channels());
    }

    /// Fill the canvas cell by cell.
    ///
    /// The grid has `width / cell_width + 1` columns and
    /// `height / cell_height + 1` rows: one column and row past the exact
    /// tiling boundary, so a canvas that is not an exact multiple of the cell
    /// size ends in partially visible cells. The painter is queried exactly
    /// once per cell, never once per pixel, walking columns outer and rows
    /// inner.
    ///
    /// Returns the nominal pixel count `width * height` regardless of how
    /// many writes were clipped.
    #[tracing::instrument(level = "debug", skip(self, painter), fields(index = self.index))]
    pub fn fill(
        &mut self,
        cell_width: u32,
        cell_height: u32,
        painter: &mut dyn Painter,
    ) -> GridgifResult<u64> {
        if cell_width == 0 || cell_height == 0 {
            return Err(GridgifError::validation(
                "cell width and height must be >= 1",
            ));
        }

        let cols = self.width / cell_width;
        let rows = self.height / cell_height;
        let total_cells = u64::from(cols + 1) * u64::from(rows + 1);

        let mut filled = 0u64;
        for col in 0..=cols {
            for row in 0..=rows {
                let color = painter.color_at(CellPos::new(col, row))?;
                for dx in 0..cell_width {
                    for dy in 0..cell_height {
                        self.put_pixel(cell_width * col + dx, cell_height * row + dy, color);
                    }
                }
                filled += 1;
                tracing::trace!(
                    percent = 100.0 * filled as f64 / total_cells as f64,
                    "filled cell"
                );
            }
        }

        Ok(u64::from(self.width) * u64::from(self.height))
    }
}

use crate::error::{GridgifError, GridgifResult};
use crate::painter::Painter;
use crate::painters::{HypnoPainter, ScramblePainter};

/// Canvas size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

/// Cell size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

/// Which bundled painter to run, with its parameters.
///
/// Library users supply their own [`Painter`] implementations directly;
/// this enum only covers the painters the CLI can build from JSON.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PainterChoice {
    Scramble {
        #[serde(default)]
        seed: u64,
    },
    Hypno {
        #[serde(default)]
        colorized: bool,
        #[serde(default)]
        seed: u64,
    },
}

/// Everything needed to render one animation, loadable from JSON.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GifConfig {
    pub canvas: Canvas,
    pub cell: CellSize,
    /// Number of frames in the animation.
    pub frames: u32,
    /// Base name: output directory `<name>-gif`, stills `<name><i>.png`,
    /// animation `<name>.gif`.
    pub name: String,
    pub painter: PainterChoice,
}

impl GifConfig {
    pub fn validate(&self) -> GridgifResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(GridgifError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        if self.cell.width == 0 || self.cell.height == 0 {
            return Err(GridgifError::validation(
                "cell width/height must be non-zero",
            ));
        }
        if self.frames == 0 {
            return Err(GridgifError::validation("frame count must be non-zero"));
        }
        if self.name.is_empty() {
            return Err(GridgifError::validation("name must be non-empty"));
        }
        // The name is a bare file stem; paths come from the export root.
        if self.name.contains(['/', '\\']) {
            return Err(GridgifError::validation(
                "name must not contain path separators",
            ));
        }
        Ok(())
    }

    /// Canvas size in cells, as seen by painters that track the grid.
    pub fn grid_cols(&self) -> u32 {
        self.canvas.width / self.cell.width
    }

    pub fn grid_rows(&self) -> u32 {
        self.canvas.height / self.cell.height
    }

    /// Construct the configured painter.
    pub fn build_painter(&self) -> Box<dyn Painter> {
        match &self.painter {
            PainterChoice::Scramble { seed } => Box::new(ScramblePainter::new(*seed)),
            PainterChoice::Hypno { colorized, seed } => {
                let painter = if *colorized {
                    HypnoPainter::colorized(self.grid_cols(), self.grid_rows(), *seed)
                } else {
                    HypnoPainter::new(self.grid_cols(), self.grid_rows())
                };
                Box::new(painter)
            }
        }
    }
}

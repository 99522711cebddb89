//! The classic: 30 frames of colorized hypnotic squares on a 500x500
//! canvas with 8x8 cells. Run with `cargo run --example hypno`.

use gridgif::{Canvas, CellSize, GifConfig, PainterChoice, render_gif};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = GifConfig {
        canvas: Canvas {
            width: 500,
            height: 500,
        },
        cell: CellSize {
            width: 8,
            height: 8,
        },
        frames: 30,
        name: "hypno".to_string(),
        painter: PainterChoice::Hypno {
            colorized: true,
            seed: 7,
        },
    };

    let mut painter = config.build_painter();
    let dir = render_gif(&config, painter.as_mut(), std::path::Path::new("."))?;

    eprintln!("wrote {}", dir.display());
    Ok(())
}

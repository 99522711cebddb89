use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::encode::encode_gif;
use crate::error::GridgifResult;
use crate::frame::Frame;
use crate::model::GifConfig;
use crate::painter::Painter;
use crate::sequence::FrameSequence;

/// Create a fresh `<name>-gif[<n>]` directory under `root`.
///
/// An existing directory is never reused or overwritten: on collision the
/// numeric suffix is incremented and creation retried until it succeeds.
/// Any filesystem failure other than the collision itself propagates.
pub fn resolve_output_dir(root: &Path, name: &str) -> GridgifResult<PathBuf> {
    let base = format!("{name}-gif");
    let mut suffix = 0u32;
    loop {
        let candidate = if suffix == 0 {
            base.clone()
        } else {
            format!("{base}{suffix}")
        };
        let dir = root.join(candidate);
        match fs::create_dir(&dir) {
            Ok(()) => return Ok(dir),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                suffix += 1;
                tracing::debug!(
                    taken = %dir.display(),
                    "output directory exists, trying next suffix"
                );
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Persist every frame of `seq` as `<name><position>.png` inside a fresh
/// output directory under `root`, then encode `<name>.gif` in the same
/// directory from the ordered stills.
///
/// Returns the resolved output directory.
#[tracing::instrument(level = "debug", skip(seq))]
pub fn save_sequence(seq: &FrameSequence, root: &Path, name: &str) -> GridgifResult<PathBuf> {
    if !root.as_os_str().is_empty() {
        fs::create_dir_all(root)?;
    }
    let dir = resolve_output_dir(root, name)?;

    let total = seq.len();
    let mut stills = Vec::with_capacity(total);
    for (at, frame) in seq.iter().enumerate() {
        let still = dir.join(format!("{name}{}.png", at + 1));
        image::save_buffer(
            &still,
            frame.data(),
            frame.width(),
            frame.height(),
            image::ExtendedColorType::Rgb8,
        )?;
        tracing::debug!(saved = at + 1, total, "saved still");
        stills.push(still);
    }

    let gif_path = dir.join(gif_file_name(&dir, name));
    encode_gif(&stills, &gif_path)?;
    tracing::info!(out = %gif_path.display(), "animation written");

    Ok(dir)
}

/// The animation is named after the output directory with the `-gif[<n>]`
/// suffix stripped: `hypno-gif3` holds `hypno.gif`.
fn gif_file_name(dir: &Path, fallback: &str) -> String {
    let dir_name = dir.file_name().and_then(|n| n.to_str()).unwrap_or(fallback);
    let base = match dir_name.find("-gif") {
        Some(at) => &dir_name[..at],
        None => fallback,
    };
    format!("{base}.gif")
}

/// Build, fill, and save a whole animation in one call.
///
/// `config.frames` blank canvases are sequenced, bulk-filled with `painter`,
/// and exported under `root`. Returns the output directory.
pub fn render_gif(
    config: &GifConfig,
    painter: &mut dyn Painter,
    root: &Path,
) -> GridgifResult<PathBuf> {
    config.validate()?;

    let frames = (0..config.frames)
        .map(|_| Frame::new(config.canvas.width, config.canvas.height))
        .collect();
    let mut seq = FrameSequence::from_frames(frames);
    seq.fill(config.cell.width, config.cell.height, painter, &[])?;
    seq.save_in(root, &config.name)
}

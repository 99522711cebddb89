use std::{fs::File, io::BufWriter, path::Path};

use image::codecs::gif::{GifEncoder, Repeat};

use crate::error::GridgifResult;

/// Compose previously written still images into one animated GIF.
///
/// Stills are read back from disk one at a time; frame order in the output
/// equals input order. Frame timing is left at the encoder default, and the
/// animation loops forever.
#[tracing::instrument(level = "debug", skip(stills))]
pub fn encode_gif<P: AsRef<Path>>(stills: &[P], out_path: &Path) -> GridgifResult<()> {
    let file = File::create(out_path)?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;

    let total = stills.len();
    for (at, still) in stills.iter().enumerate() {
        let rgba = image::open(still.as_ref())?.to_rgba8();
        encoder.encode_frame(image::Frame::new(rgba))?;
        tracing::debug!(collected = at + 1, total, "collected still");
    }

    Ok(())
}

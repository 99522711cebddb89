use std::path::{Path, PathBuf};

use crate::error::GridgifResult;
use crate::frame::Frame;
use crate::painter::Painter;

/// Ordered, re-indexable collection of [`Frame`]s.
///
/// Indices are kept dense on `1..=N`. At construction, frames carrying a
/// positive index are treated as pre-ordered anchors and placed first in
/// index order; unindexed frames (index 0) are appended after them in the
/// order supplied; then the combined sequence is re-indexed from 1. This
/// lets a caller interleave manually ordered anchor frames with freely
/// appended ones.
#[derive(Clone, Debug, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    last_index: u32,
}

impl FrameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames(frames: Vec<Frame>) -> Self {
        let mut seq = Self::new();

        let (indexed, unindexed): (Vec<_>, Vec<_>) =
            frames.into_iter().partition(|frame| frame.index() > 0);

        if !indexed.is_empty() {
            seq.frames = indexed;
            seq.frames.sort_by_key(Frame::index);
            seq.last_index = seq.frames.last().map(Frame::index).unwrap_or(0);
        }

        for frame in unindexed {
            seq.add(frame);
        }

        let mut n = 0;
        for frame in &mut seq.frames {
            n += 1;
            frame.set_index(n);
        }
        seq.last_index = n;

        seq
    }

    /// Append a frame under the next index.
    ///
    /// The sort key is the index alone; a stable sort keeps insertion order
    /// between equal indices, which never occur when indices come from this
    /// counter. The very first frame needs no sort pass.
    pub fn add(&mut self, mut frame: Frame) {
        self.last_index += 1;
        frame.set_index(self.last_index);
        let index = frame.index();
        self.frames.push(frame);

        if index != 1 {
            self.frames.sort_by_key(Frame::index);
        }
    }

    /// Fill every frame in index order with one shared painter.
    ///
    /// `ignore` lists 1-based sequence positions to skip; skipped frames
    /// keep their prior pixel content. The same painter instance is queried
    /// across all frames in strict order, so painters can advance
    /// cross-frame animation state as a side effect of being queried.
    #[tracing::instrument(level = "debug", skip(self, painter))]
    pub fn fill(
        &mut self,
        cell_width: u32,
        cell_height: u32,
        painter: &mut dyn Painter,
        ignore: &[usize],
    ) -> GridgifResult<()> {
        let total = self.frames.len();
        for (at, frame) in self.frames.iter_mut().enumerate() {
            let position = at + 1;
            if ignore.contains(&position) {
                tracing::debug!(position, total, "ignored frame");
                continue;
            }
            tracing::debug!(position, total, "filling frame");
            frame.fill(cell_width, cell_height, painter)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Highest index assigned so far.
    pub fn last_index(&self) -> u32 {
        self.last_index
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn get(&self, at: usize) -> Option<&Frame> {
        self.frames.get(at)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Export under the current directory. See [`save_sequence`](crate::save_sequence).
    pub fn save(&self, name: &str) -> GridgifResult<PathBuf> {
        crate::export::save_sequence(self, Path::new("."), name)
    }

    /// Export under `root`, returning the resolved output directory.
    pub fn save_in(&self, root: &Path, name: &str) -> GridgifResult<PathBuf> {
        crate::export::save_sequence(self, root, name)
    }
}

impl std::ops::Index<usize> for FrameSequence {
    type Output = Frame;

    fn index(&self, at: usize) -> &Frame {
        &self.frames[at]
    }
}

impl<'s> IntoIterator for &'s FrameSequence {
    type Item = &'s Frame;
    type IntoIter = std::slice::Iter<'s, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellPos, Rgb8};
    use crate::error::GridgifResult;

    // Frames tagged by width so tests can tell them apart after reordering.
    fn tagged(width: u32, index: u32) -> Frame {
        Frame::new(width, 1).with_index(index)
    }

    #[test]
    fn construction_orders_anchors_then_appends_unindexed() {
        let frames = vec![tagged(50, 5), tagged(30, 3), tagged(70, 0), tagged(80, 0)];
        let seq = FrameSequence::from_frames(frames);

        let widths: Vec<u32> = seq.iter().map(Frame::width).collect();
        assert_eq!(widths, vec![30, 50, 70, 80]);

        let indices: Vec<u32> = seq.iter().map(Frame::index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4]);
        assert_eq!(seq.last_index(), 4);
    }

    #[test]
    fn construction_from_empty_is_empty() {
        let seq = FrameSequence::from_frames(Vec::new());
        assert!(seq.is_empty());
        assert_eq!(seq.last_index(), 0);
    }

    #[test]
    fn add_assigns_dense_indices() {
        let mut seq = FrameSequence::new();
        seq.add(Frame::new(2, 2));
        assert_eq!(seq[0].index(), 1);
        assert_eq!(seq.last_index(), 1);

        seq.add(Frame::new(2, 2));
        assert_eq!(seq[1].index(), 2);
        assert_eq!(seq.last_index(), 2);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn fill_skips_ignored_positions() {
        let frames = (0..3).map(|_| Frame::new(4, 4)).collect();
        let mut seq = FrameSequence::from_frames(frames);

        let mut white = |_: CellPos| -> GridgifResult<Rgb8> { Ok(Rgb8::WHITE) };
        seq.fill(2, 2, &mut white, &[2]).unwrap();

        assert_eq!(seq[0].pixel(0, 0), Some(Rgb8::WHITE));
        assert_eq!(seq[1].pixel(0, 0), Some(Rgb8::BLACK));
        assert_eq!(seq[2].pixel(0, 0), Some(Rgb8::WHITE));
    }

    #[test]
    fn shared_painter_state_spans_frames() {
        let frames = (0..2).map(|_| Frame::new(2, 2)).collect();
        let mut seq = FrameSequence::from_frames(frames);

        // One gray level per fill pass: every cell of a 2x2 canvas with
        // 2x2 cells sees the same query ordinal bucket.
        let mut queries = 0u32;
        let mut painter = |_: CellPos| -> GridgifResult<Rgb8> {
            queries += 1;
            let shade = if queries <= 4 { 10 } else { 200 };
            Ok(Rgb8::new(shade, shade, shade))
        };
        seq.fill(2, 2, &mut painter, &[]).unwrap();

        assert_eq!(seq[0].pixel(0, 0), Some(Rgb8::new(10, 10, 10)));
        assert_eq!(seq[1].pixel(0, 0), Some(Rgb8::new(200, 200, 200)));
    }

    #[test]
    fn get_is_zero_based() {
        let mut seq = FrameSequence::new();
        seq.add(Frame::new(3, 1));
        seq.add(Frame::new(5, 1));
        assert_eq!(seq.get(0).map(Frame::width), Some(3));
        assert_eq!(seq.get(1).map(Frame::width), Some(5));
        assert!(seq.get(2).is_none());
    }
}

//! # Chunk
//!
//! The 16x16x16 voxel container: an unordered `Vec<Span>` maintained under
//! point and range writes by the split/merge algebra in [`crate::span`].
//! See the crate-level docs for the invariants held at rest and the ones
//! deliberately left unenforced (canonical minimality of the span set).

use log::{debug, trace};

use crate::error::ChunkError;
use crate::point::Point;
use crate::quad::Quad;
use crate::span::{Face, Span};

/// A 16x16x16 grid of block ids, stored as cuboid spans.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Chunk {
    spans: Vec<Span>,
}

impl Clone for Chunk {
    /// An independent chunk with the same logical contents. Rebuilds the
    /// span set through the normal write path span-by-span rather than
    /// copying the backing vector directly, so the clone's representation
    /// (span count, shapes) is free to differ from the source even though
    /// every cell reads the same id (see crate docs on canonicality).
    fn clone(&self) -> Self {
        let mut out = Chunk::new();
        for span in &self.spans {
            out.set_block_span(span.start(), span.end(), span.id);
        }
        out
    }
}

impl Chunk {
    /// An empty chunk: every cell reads 0 (air).
    pub fn new() -> Self {
        Self::default()
    }

    /// The id stored at `p`, or 0 if no span covers it. Relies on the
    /// non-overlap invariant: at most one span can contain any cell.
    pub fn get_block(&self, p: Point) -> u16 {
        self.spans.iter().find(|s| s.contains(p)).map_or(0, |s| s.id)
    }

    /// Write a single cell. Equivalent to `set_block_span(p, p, id)`.
    pub fn set_block(&mut self, p: Point, id: u16) {
        self.set_block_span(p, p, id);
    }

    /// Write 0 to a single cell. Equivalent to `set_block_span(p, p, 0)`.
    pub fn remove_block(&mut self, p: Point) {
        self.set_block_span(p, p, 0);
    }

    /// Write `id` over the inclusive region `[start,end]`. The canonical
    /// write: split every overlapping span around the writer, then (for a
    /// nonzero id) insert the writer and fuse it with any mergeable
    /// neighbors.
    pub fn set_block_span(&mut self, start: Point, end: Point, id: u16) {
        debug_assert!(start.x <= end.x && start.y <= end.y && start.z <= end.z,
            "inverted write region: {start:?}..{end:?}");
        let writer = Span::new(id, start, end);
        self.split_pass(&writer);
        if id == 0 {
            return;
        }
        self.insert_and_merge(writer);
    }

    /// Checked sibling of `set_block_span`: returns `ChunkError` instead of
    /// asserting on out-of-range coordinates or an inverted region.
    pub fn try_set_block_span(&mut self, start: Point, end: Point, id: u16) -> Result<(), ChunkError> {
        if start.x > end.x || start.y > end.y || start.z > end.z {
            return Err(ChunkError::InvertedSpan);
        }
        self.set_block_span(start, end, id);
        Ok(())
    }

    /// Write 0 over the inclusive region `[start,end]`. Equivalent to
    /// `set_block_span(start, end, 0)`.
    pub fn remove_block_span(&mut self, start: Point, end: Point) {
        self.set_block_span(start, end, 0);
    }

    /// Drop every span; the chunk is left empty.
    pub fn remove_all_blocks(&mut self) {
        debug!("clearing chunk ({} spans dropped)", self.spans.len());
        self.spans.clear();
    }

    /// Current number of stored spans (testing and diagnostics only).
    pub fn debug_total_spans(&self) -> usize {
        self.spans.len()
    }

    fn split_pass(&mut self, writer: &Span) {
        let before = std::mem::take(&mut self.spans);
        self.spans.reserve(before.len());
        for span in before {
            if span.intersects(writer) {
                let remainders = span.split(writer);
                trace!(
                    "split span id={} into {} remainder(s) around writer {:?}..{:?}",
                    span.id, remainders.len(), writer.start(), writer.end()
                );
                self.spans.extend(remainders);
            } else {
                self.spans.push(span);
            }
        }
    }

    fn insert_and_merge(&mut self, mut writer: Span) {
        let mut rounds = 0u32;
        loop {
            let found = self.spans.iter().position(|s| writer.can_merge(s));
            match found {
                Some(idx) => {
                    let neighbor = self.spans.swap_remove(idx);
                    writer.merge(&neighbor);
                    rounds += 1;
                }
                None => break,
            }
        }
        trace!("merge pass fused {rounds} neighbor(s) into writer id={}", writer.id);
        self.spans.push(writer);
    }

    /// The visible-face quads implied by the current span set: six quads
    /// per span for any face whose adjacent layer is not entirely covered
    /// by another non-air span, recomputed on demand (see crate docs on
    /// why visibility is not maintained incrementally by split/merge).
    pub fn generate_quads(&self) -> Vec<Quad> {
        let mut quads = Vec::new();
        for span in &self.spans {
            for face in Face::ALL {
                if self.face_visible(span, face) {
                    quads.push(Quad::of_face(span, face));
                }
            }
        }
        quads
    }

    fn face_visible(&self, span: &Span, face: Face) -> bool {
        use crate::span::Axis;
        let (start, end) = (span.start(), span.end());
        let boundary = match face.outward() {
            1 => match face.axis() {
                Axis::X => end.x == 15,
                Axis::Y => end.y == 15,
                Axis::Z => end.z == 15,
            },
            _ => match face.axis() {
                Axis::X => start.x == 0,
                Axis::Y => start.y == 0,
                Axis::Z => start.z == 0,
            },
        };
        if boundary {
            return true;
        }
        let neighbor_coord = match face.axis() {
            Axis::X if face.outward() == 1 => end.x + 1,
            Axis::X => start.x - 1,
            Axis::Y if face.outward() == 1 => end.y + 1,
            Axis::Y => start.y - 1,
            Axis::Z if face.outward() == 1 => end.z + 1,
            Axis::Z => start.z - 1,
        };
        match face.axis() {
            Axis::X => (start.y..=end.y).any(|y| {
                (start.z..=end.z).any(|z| self.get_block(Point::new(neighbor_coord, y, z)) == 0)
            }),
            Axis::Y => (start.x..=end.x).any(|x| {
                (start.z..=end.z).any(|z| self.get_block(Point::new(x, neighbor_coord, z)) == 0)
            }),
            Axis::Z => (start.x..=end.x).any(|x| {
                (start.y..=end.y).any(|y| self.get_block(Point::new(x, y, neighbor_coord)) == 0)
            }),
        }
    }
}

#[cfg(test)]
mod chunk_test;

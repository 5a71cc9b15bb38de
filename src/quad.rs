//! # Quad
//!
//! The record type handed to an external mesher by `Chunk::generate_quads`.
//! Carries the originating block id as a `u16` — the source this crate is
//! modeled on stores a `Point` there, which reads as a typo rather than an
//! intentional design; see the crate-level docs for that call.

use crate::point::Point;
use crate::span::{Face, Span};

/// One rectangular, axis-aligned face of a span, in chunk-local
/// coordinates. Corners are wound counter-clockwise as seen from outside
/// the solid volume (looking against the face's outward normal), held
/// consistent across every call in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Quad {
    pub id: u16,
    pub corners: [Point; 4],
}

impl Quad {
    pub(crate) fn of_face(span: &Span, face: Face) -> Quad {
        let (s, e) = (span.start(), span.end());
        let corners = match face {
            Face::East => [
                Point::new(e.x, s.y, s.z),
                Point::new(e.x, e.y, s.z),
                Point::new(e.x, e.y, e.z),
                Point::new(e.x, s.y, e.z),
            ],
            Face::West => [
                Point::new(s.x, s.y, e.z),
                Point::new(s.x, e.y, e.z),
                Point::new(s.x, e.y, s.z),
                Point::new(s.x, s.y, s.z),
            ],
            Face::Up => [
                Point::new(s.x, e.y, s.z),
                Point::new(s.x, e.y, e.z),
                Point::new(e.x, e.y, e.z),
                Point::new(e.x, e.y, s.z),
            ],
            Face::Down => [
                Point::new(s.x, s.y, e.z),
                Point::new(s.x, s.y, s.z),
                Point::new(e.x, s.y, s.z),
                Point::new(e.x, s.y, e.z),
            ],
            Face::North => [
                Point::new(e.x, s.y, e.z),
                Point::new(e.x, e.y, e.z),
                Point::new(s.x, e.y, e.z),
                Point::new(s.x, s.y, e.z),
            ],
            Face::South => [
                Point::new(s.x, s.y, s.z),
                Point::new(s.x, e.y, s.z),
                Point::new(e.x, e.y, s.z),
                Point::new(e.x, s.y, s.z),
            ],
        };
        Quad { id: span.id, corners }
    }
}

//! # Span
//!
//! A `Span` is the chunk's unit of storage: an axis-aligned inclusive
//! cuboid tagged with a block id, packed into a 32-bit coordinate/visibility
//! word plus a separate 16-bit id. Bit layout (bit 31 highest):
//!
//! | bits  | field         |
//! |-------|---------------|
//! | 31-30 | reserved      |
//! | 29-26 | start.x       |
//! | 25-22 | start.y       |
//! | 21-18 | start.z       |
//! | 17-14 | end.x         |
//! | 13-10 | end.y         |
//! | 9-6   | end.z         |
//! | 5     | up visible    |
//! | 4     | down visible  |
//! | 3     | north visible |
//! | 2     | south visible |
//! | 1     | west visible  |
//! | 0     | east visible  |
//!
//! Fields are reached only through the getter/setter functions below, using
//! the named shift/mask constants rather than bitfield sugar.

use crate::error::ChunkError;
use crate::point::{Point, MAX_COORD};

const SHIFT_START_X: u32 = 26;
const SHIFT_START_Y: u32 = 22;
const SHIFT_START_Z: u32 = 18;
const SHIFT_END_X: u32 = 14;
const SHIFT_END_Y: u32 = 10;
const SHIFT_END_Z: u32 = 6;
const FIELD_MASK: u32 = 0xf;

const BIT_UP: u32 = 5;
const BIT_DOWN: u32 = 4;
const BIT_NORTH: u32 = 3;
const BIT_SOUTH: u32 = 2;
const BIT_WEST: u32 = 1;
const BIT_EAST: u32 = 0;

const ALL_VISIBLE: u32 = (1 << BIT_UP) | (1 << BIT_DOWN) | (1 << BIT_NORTH)
    | (1 << BIT_SOUTH) | (1 << BIT_WEST) | (1 << BIT_EAST);

fn get_field(packed: u32, shift: u32) -> u8 {
    ((packed >> shift) & FIELD_MASK) as u8
}

fn set_field(packed: u32, shift: u32, value: u8) -> u32 {
    let cleared = packed & !(FIELD_MASK << shift);
    cleared | (((value as u32) & FIELD_MASK) << shift)
}

/// One of the three lattice axes, used by `Span::can_merge` and the split
/// decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One of the six cuboid faces, named per the coordinate conventions in the
/// crate docs (+Y = up, +Z = north, +X = east).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Up,
    Down,
    North,
    South,
    West,
    East,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::North,
        Face::South,
        Face::West,
        Face::East,
    ];

    fn bit(self) -> u32 {
        match self {
            Face::Up => BIT_UP,
            Face::Down => BIT_DOWN,
            Face::North => BIT_NORTH,
            Face::South => BIT_SOUTH,
            Face::West => BIT_WEST,
            Face::East => BIT_EAST,
        }
    }

    /// The axis this face's normal points along.
    pub fn axis(self) -> Axis {
        match self {
            Face::Up | Face::Down => Axis::Y,
            Face::North | Face::South => Axis::Z,
            Face::West | Face::East => Axis::X,
        }
    }

    /// +1 if the face sits at the cuboid's max corner on its axis, -1 if at
    /// the min corner.
    pub fn outward(self) -> i8 {
        match self {
            Face::Up | Face::North | Face::East => 1,
            Face::Down | Face::South | Face::West => -1,
        }
    }
}

/// Result of `Span::compare`: a total order over span `start` points using
/// axis order (x, z, y), kept separate from `PartialOrd`/`Ord` because it is
/// not presently used to enforce any chunk invariant (see crate docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering3 {
    Before,
    Overlap,
    After,
}

/// A single axis-aligned inclusive cuboid tagged with a block id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub id: u16,
    packed: u32,
}

impl Span {
    /// Construct a span with all six visibility bits set. Panics via
    /// `debug_assert!` in debug builds if `start > end` on any axis or any
    /// coordinate is out of range; undefined in release builds. Prefer
    /// `try_new` for untrusted inputs.
    pub fn new(id: u16, start: Point, end: Point) -> Self {
        debug_assert!(start.x <= end.x && start.y <= end.y && start.z <= end.z,
            "inverted span: {start:?}..{end:?}");
        let mut packed = 0u32;
        packed = set_field(packed, SHIFT_START_X, start.x);
        packed = set_field(packed, SHIFT_START_Y, start.y);
        packed = set_field(packed, SHIFT_START_Z, start.z);
        packed = set_field(packed, SHIFT_END_X, end.x);
        packed = set_field(packed, SHIFT_END_Y, end.y);
        packed = set_field(packed, SHIFT_END_Z, end.z);
        packed |= ALL_VISIBLE;
        Self { id, packed }
    }

    /// Checked constructor: returns `Err` instead of asserting.
    pub fn try_new(id: u16, start: Point, end: Point) -> Result<Self, ChunkError> {
        if start.x > end.x || start.y > end.y || start.z > end.z {
            return Err(ChunkError::InvertedSpan);
        }
        Ok(Self::new(id, start, end))
    }

    pub fn start(&self) -> Point {
        Point::new(
            get_field(self.packed, SHIFT_START_X),
            get_field(self.packed, SHIFT_START_Y),
            get_field(self.packed, SHIFT_START_Z),
        )
    }

    pub fn end(&self) -> Point {
        Point::new(
            get_field(self.packed, SHIFT_END_X),
            get_field(self.packed, SHIFT_END_Y),
            get_field(self.packed, SHIFT_END_Z),
        )
    }

    pub fn visible(&self, face: Face) -> bool {
        (self.packed >> face.bit()) & 1 == 1
    }

    pub fn set_visible(&mut self, face: Face, value: bool) {
        if value {
            self.packed |= 1 << face.bit();
        } else {
            self.packed &= !(1 << face.bit());
        }
    }

    fn set_bounds(&mut self, start: Point, end: Point) {
        self.packed = set_field(self.packed, SHIFT_START_X, start.x);
        self.packed = set_field(self.packed, SHIFT_START_Y, start.y);
        self.packed = set_field(self.packed, SHIFT_START_Z, start.z);
        self.packed = set_field(self.packed, SHIFT_END_X, end.x);
        self.packed = set_field(self.packed, SHIFT_END_Y, end.y);
        self.packed = set_field(self.packed, SHIFT_END_Z, end.z);
    }

    /// True iff `p` lies within `[start,end]` componentwise.
    pub fn contains(&self, p: Point) -> bool {
        let (s, e) = (self.start(), self.end());
        s.x <= p.x && p.x <= e.x && s.y <= p.y && p.y <= e.y && s.z <= p.z && p.z <= e.z
    }

    /// True iff the two cuboids share at least one cell.
    pub fn intersects(&self, other: &Span) -> bool {
        let (s1, e1) = (self.start(), self.end());
        let (s2, e2) = (other.start(), other.end());
        s1.x <= e2.x && s2.x <= e1.x
            && s1.y <= e2.y && s2.y <= e1.y
            && s1.z <= e2.z && s2.z <= e1.z
    }

    fn axis_component(axis: Axis, s: Point, e: Point) -> (u8, u8) {
        match axis {
            Axis::X => (s.x, e.x),
            Axis::Y => (s.y, e.y),
            Axis::Z => (s.z, e.z),
        }
    }

    /// The axis on which `self` and `other` are face-adjacent with matching
    /// extent on the remaining two axes, if any. `can_merge` is
    /// `merge_axis(..).is_some()`.
    fn merge_axis(&self, other: &Span) -> Option<Axis> {
        if self.id != other.id {
            return None;
        }
        let (s1, e1) = (self.start(), self.end());
        let (s2, e2) = (other.start(), other.end());
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let (sa, ea) = Self::axis_component(axis, s1, e1);
            let (sb, eb) = Self::axis_component(axis, s2, e2);
            let adjacent = ea as u16 + 1 == sb as u16 || eb as u16 + 1 == sa as u16;
            if !adjacent {
                continue;
            }
            let others_match = [Axis::X, Axis::Y, Axis::Z].into_iter().filter(|a| *a != axis).all(|a| {
                let (os, oe) = Self::axis_component(a, s1, e1);
                let (ts, te) = Self::axis_component(a, s2, e2);
                os == ts && oe == te
            });
            if others_match {
                return Some(axis);
            }
        }
        None
    }

    /// True iff same id, face-adjacent on exactly one axis, and coincident
    /// on the other two.
    pub fn can_merge(&self, other: &Span) -> bool {
        self.merge_axis(other).is_some()
    }

    /// Lexicographic comparison of `start` using axis order (x, z, y).
    pub fn compare(&self, other: &Span) -> Ordering3 {
        let (s1, s2) = (self.start(), other.start());
        let a = (s1.x, s1.z, s1.y);
        let b = (s2.x, s2.z, s2.y);
        if a < b {
            Ordering3::Before
        } else if a > b {
            Ordering3::After
        } else {
            Ordering3::Overlap
        }
    }

    /// Fuse `other` into `self` in place. Precondition: `can_merge(other)`.
    /// Visibility bits are left as in `self` — recomputed by the mesher,
    /// not maintained incrementally (see crate docs).
    pub fn merge(&mut self, other: &Span) {
        debug_assert!(self.can_merge(other), "merge precondition violated");
        let start = self.start().min(&other.start());
        let end = self.end().max(&other.end());
        self.set_bounds(start, end);
    }

    /// A new span grown by one cell on every axis, clamped to `[0,15]`.
    /// Used to probe for merge neighbors.
    pub fn expand(&self) -> Span {
        let (s, e) = (self.start(), self.end());
        let ns = Point::new(
            s.x.saturating_sub(1),
            s.y.saturating_sub(1),
            s.z.saturating_sub(1),
        );
        let ne = Point::new(
            (e.x + 1).min(MAX_COORD),
            (e.y + 1).min(MAX_COORD),
            (e.z + 1).min(MAX_COORD),
        );
        Span::new(self.id, ns, ne)
    }

    /// Decompose `self \ exclude` into at most six axis-aligned remainder
    /// cuboids. Precondition: `self.intersects(exclude)`.
    pub fn split(&self, exclude: &Span) -> Vec<Span> {
        debug_assert!(self.intersects(exclude), "split requires intersection");
        let (a_s, a_e) = (self.start(), self.end());
        let (e_s, e_e) = (exclude.start(), exclude.end());
        let mut out = Vec::with_capacity(6);

        if a_s.x < e_s.x {
            out.push(Span::new(self.id, a_s, Point::new(e_s.x - 1, a_e.y, a_e.z)));
        }
        if a_e.x > e_e.x {
            out.push(Span::new(self.id, Point::new(e_e.x + 1, a_s.y, a_s.z), a_e));
        }
        if a_e.z > e_e.z {
            out.push(Span::new(
                self.id,
                Point::new(e_s.x, a_s.y, e_e.z + 1),
                Point::new(e_e.x, a_e.y, a_e.z),
            ));
        }
        if a_s.z < e_s.z {
            out.push(Span::new(
                self.id,
                Point::new(e_s.x, a_s.y, a_s.z),
                Point::new(e_e.x, a_e.y, e_s.z - 1),
            ));
        }
        if a_e.y > e_e.y {
            out.push(Span::new(
                self.id,
                Point::new(e_s.x, e_e.y + 1, e_s.z),
                Point::new(e_e.x, a_e.y, e_e.z),
            ));
        }
        if a_s.y < e_s.y {
            out.push(Span::new(
                self.id,
                Point::new(e_s.x, a_s.y, e_s.z),
                Point::new(e_e.x, e_s.y - 1, e_e.z),
            ));
        }
        out
    }
}

#[cfg(test)]
mod span_test;

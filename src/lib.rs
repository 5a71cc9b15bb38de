//! # `cuboid-chunk`
//!
//! A compact, mutable 16x16x16 voxel chunk represented as an unordered
//! collection of axis-aligned cuboid "spans". Pointwise and rectangular
//! writes are maintained through a split/merge algebra rather than a dense
//! per-cell array, so memory stays small when the content is spatially
//! coherent, and visible-face extraction falls out of the span layout.
//!
//! ## Architecture
//!
//! Three layers, built leaves-first:
//! * [`point`] — a lattice coordinate in `[0,15]^3`, packable into 12 bits.
//! * [`span`] — one bit-packed cuboid region tagged with a block id; owns
//!   the containment, intersection, merge-adjacency, and split algorithms.
//! * [`chunk`] — the unordered `Vec<Span>` container, exposing the public
//!   read/write/clone/mesh surface.
//!
//! [`quad`] is the mesher-facing record `generate_quads` emits; it has no
//! behavior of its own beyond face-corner geometry.
//!
//! ## Error Handling
//!
//! Out-of-range coordinates and inverted regions are programmer errors: the
//! unchecked constructors (`Point::new`, `Span::new`, `Chunk::set_block_span`)
//! catch them with `debug_assert!` and are undefined in release builds. The
//! checked siblings (`Point::try_new`, `Span::try_new`,
//! `Chunk::try_set_block_span`) return [`error::ChunkError`] instead, for
//! hosts that cannot pre-validate their inputs.
//!
//! ## Logging
//!
//! The crate narrates split/merge passes through the `log` facade at
//! `trace`/`debug` level. No logger is installed by the library; a host
//! binary (see `demos/`) installs one, e.g. with `env_logger`, and controls
//! verbosity via `RUST_LOG`.
//!
//! ## Scope
//!
//! Single chunk, single thread, synchronous. Clipping writes to a
//! multi-chunk world, timing/report harnesses, and renderable vertex-buffer
//! generation from quads are the concern of collaborators outside this
//! crate.

pub mod chunk;
pub mod error;
pub mod point;
pub mod quad;
pub mod span;

pub use chunk::Chunk;
pub use error::ChunkError;
pub use point::Point;
pub use quad::Quad;
pub use span::{Axis, Face, Ordering3, Span};

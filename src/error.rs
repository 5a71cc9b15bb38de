//! # Error types
//!
//! The unchecked core API (`Point::new`, `Span::new`, `Chunk::set_block_span`)
//! never returns a `Result` — out-of-range coordinates and inverted spans are
//! programmer errors, caught by `debug_assert!` in debug builds and left
//! undefined in release (see the crate-level docs). `ChunkError` exists for
//! the checked siblings (`Point::try_new`, `Chunk::try_set_block_span`) that
//! hosts parsing untrusted coordinates can use instead of pre-validating.

/// Domain violations surfaced by the checked constructor API.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkError {
    #[error("coordinate component {0} is outside [0,15]")]
    OutOfRange(u8),
    #[error("span start exceeds end on some axis")]
    InvertedSpan,
}

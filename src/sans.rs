//! Internal finite-state machine for walking characteristic schemas.
//!
//! This module is intended for applications that need fine control over how
//! bytes reach the decoder. See [`crate::avec`] for implementations covering
//! common decoding patterns.
//!
//! # Architecture
//!
//! A characteristic value is a flags field followed by the fields its bits
//! announce, in the order its [`Schema`](schema::Schema) declares them. The
//! walk over such a value is represented by non-copy state tokens. Each token
//! reports how many bytes it needs through its `size` method; once these are
//! ready, transition to the next state by calling the token's `advance`
//! method. This returns a successor state token, along with any extracted
//! data.
//!
//! Fields the flags mark as absent are never visited, so every byte handed to
//! a token belongs to it. Fields holding their 'unavailable' marker value are
//! visited, but produce no reading.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed.
//!
//! Some areas of the decoding process are not represented in the
//! finite-state machine and must be carefully written:
//!
//! - Reading exactly `size` bytes for each token, in order.
//!
//! - Reporting buffers too short for the field a token is waiting on.
//!
//! The [`cursor`] module provides the little-endian byte primitives used by
//! the decoders in [`crate::avec`].

pub mod cursor;
pub mod field;
pub mod header;
pub mod schema;

/// Entrypoint to the finite-state machine.
pub type Decoder<'s> = header::Header<'s>;

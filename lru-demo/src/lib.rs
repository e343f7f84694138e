//! Interactive front-end for the `lru-ring` cache.
//!
//! The binary reads commands line by line, applies them to a cache owned by a
//! [`Session`](session::Session) and prints the recency order after every
//! read or write.

pub mod command;
pub mod render;
pub mod session;

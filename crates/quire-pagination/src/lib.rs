// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursor-based pagination over time-ordered posts.
//!
//! [`get_cursor`] pages through any [`quire_core::PostCollection`];
//! [`MemoryPostCollection`] is an in-process collection for tests and for
//! running without an external document store.

pub mod cursor;
pub mod memory;

pub use cursor::{Cursor, CursorQuery, DEFAULT_LIMIT, get_cursor, parse_limit};
pub use memory::{MemoryCollectionError, MemoryPostCollection};

// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Quire integration tests.
//!
//! Provides in-memory plugins so registry, publication and gateway tests run
//! without GitHub or any other remote service.
//!
//! # Components
//!
//! - [`MockStore`] - In-memory store with version tokens and conflict checks
//! - [`MockSyndicator`] - Syndication target that records what it was sent
//! - [`MockPreset`] - Preset with caller-supplied defaults

pub mod mock_preset;
pub mod mock_store;
pub mod mock_syndicator;

pub use mock_preset::MockPreset;
pub use mock_store::MockStore;
pub use mock_syndicator::MockSyndicator;

// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for the Quire plugin architecture.
//!
//! All plugins extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod collection;
pub mod preset;
pub mod store;
pub mod syndicator;

pub use adapter::PluginAdapter;
pub use collection::PostCollection;
pub use preset::PresetAdapter;
pub use store::StoreAdapter;
pub use syndicator::SyndicatorAdapter;

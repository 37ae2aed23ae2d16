// SPDX-FileCopyrightText: 2026 Quotly Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Quotly integration tests.
//!
//! Mock implementations of the channel, provider, and storage seams so the
//! dispatcher and bot loop can be exercised without Telegram, the quote
//! API, or a real database.

pub mod memory_store;
pub mod mock_channel;
pub mod mock_provider;

pub use memory_store::MemoryFavorites;
pub use mock_channel::MockChannel;
pub use mock_provider::MockQuoteProvider;

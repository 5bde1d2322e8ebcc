// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Database layer for the Greenroom server.
//!
//! SQLite-backed storage for the two tables this slice reads:
//! `blobs` (key-addressed stored files) and `roles` (provider-namespaced
//! role names). Request handling only ever reads; the insert helpers exist
//! for seeding and tests because blob and role lifecycle is owned outside
//! this service.

pub mod blob;
pub mod error;
pub mod pool;
pub mod role;
pub mod testing;

pub use blob::{BlobRepository, StoredBlob};
pub use error::{DbError, Result};
pub use pool::{create_pool, run_migrations};
pub use role::{RoleRepository, RoleRow};

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sign-in payload normalization and role resolution for Greenroom.
//!
//! This crate maps the heterogeneous payload shapes delivered by the
//! supported identity providers onto a canonical user profile:
//!
//! - [`Provider`] - closed enumeration of identity providers
//! - [`AuthPayload`] - the upstream callback payload and its per-field
//!   normalizers (display name, username, email, avatar image)
//! - [`User`] / [`Role`] - canonical profile value types
//! - [`resolve_role`] - pure single-slot role resolution
//!
//! Everything here is a pure transformation; persistence and the outbound
//! directory lookup live elsewhere.

pub mod payload;
pub mod role;
pub mod user;

pub use payload::{AuthInfo, AuthPayload, Provider};
pub use role::{requested_roles, resolve_role, role_namespace, DEFAULT_ROLE_PROVIDER};
pub use user::{Role, User};

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Greenroom.
//!
//! This crate provides a pre-configured HTTP client with a consistent
//! User-Agent header. Every outbound call in Greenroom is made exactly
//! once; there is deliberately no retry layer here.

mod client;

pub use client::{builder, user_agent};

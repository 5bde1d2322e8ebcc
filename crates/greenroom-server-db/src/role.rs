// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role table access.
//!
//! Roles are provisioned out of band; request handling only looks them up
//! by (provider namespace, name).

use sqlx::sqlite::SqlitePool;

use crate::error::DbError;

/// A role row: a name inside a provider namespace.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct RoleRow {
	pub provider: String,
	pub name: String,
}

/// Repository for the `roles` table.
#[derive(Debug, Clone)]
pub struct RoleRepository {
	pool: SqlitePool,
}

impl RoleRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Look a role up by namespace and name.
	#[tracing::instrument(skip(self))]
	pub async fn find_by(&self, provider: &str, name: &str) -> Result<Option<RoleRow>, DbError> {
		let role = sqlx::query_as::<_, RoleRow>(
			"SELECT provider, name FROM roles WHERE provider = ? AND name = ?",
		)
		.bind(provider)
		.bind(name)
		.fetch_optional(&self.pool)
		.await?;

		Ok(role)
	}

	/// Insert a role. Seeding/tests only; request handling never creates
	/// roles.
	#[tracing::instrument(skip(self))]
	pub async fn insert(&self, provider: &str, name: &str) -> Result<(), DbError> {
		sqlx::query("INSERT INTO roles (provider, name) VALUES (?, ?)")
			.bind(provider)
			.bind(name)
			.execute(&self.pool)
			.await?;

		Ok(())
	}
}

// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Key-addressed stored file access.
//!
//! Blob lifecycle (upload, expiry, deletion) is owned by the surrounding
//! system; request handling in this service only reads by key.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;

use crate::error::DbError;

/// A stored file row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoredBlob {
	/// Opaque storage key.
	pub key: String,
	/// Original filename, served back as the attachment name.
	pub filename: String,
	pub content: Vec<u8>,
	pub created_at: DateTime<Utc>,
}

/// Repository for the `blobs` table.
#[derive(Debug, Clone)]
pub struct BlobRepository {
	pool: SqlitePool,
}

impl BlobRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Find a stored file by its storage key.
	#[tracing::instrument(skip(self))]
	pub async fn find_by_key(&self, key: &str) -> Result<Option<StoredBlob>, DbError> {
		let blob = sqlx::query_as::<_, StoredBlob>(
			"SELECT key, filename, content, created_at FROM blobs WHERE key = ?",
		)
		.bind(key)
		.fetch_optional(&self.pool)
		.await?;

		Ok(blob)
	}

	/// Insert a stored file. Seeding/tests only; request handling never
	/// writes blobs.
	#[tracing::instrument(skip(self, blob), fields(key = %blob.key))]
	pub async fn insert(&self, blob: &StoredBlob) -> Result<(), DbError> {
		sqlx::query("INSERT INTO blobs (key, filename, content, created_at) VALUES (?, ?, ?, ?)")
			.bind(&blob.key)
			.bind(&blob.filename)
			.bind(&blob.content)
			.bind(blob.created_at)
			.execute(&self.pool)
			.await?;

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::create_test_pool;

	fn sample_blob(key: &str) -> StoredBlob {
		StoredBlob {
			key: key.to_string(),
			filename: "slides.pdf".to_string(),
			content: vec![0x25, 0x50, 0x44, 0x46],
			created_at: Utc::now(),
		}
	}

	#[tokio::test]
	async fn find_by_key_round_trips_content_and_filename() {
		let pool = create_test_pool().await;
		let repo = BlobRepository::new(pool);

		let blob = sample_blob("abc123");
		repo.insert(&blob).await.unwrap();

		let found = repo.find_by_key("abc123").await.unwrap().unwrap();
		assert_eq!(found.filename, "slides.pdf");
		assert_eq!(found.content, vec![0x25, 0x50, 0x44, 0x46]);
	}

	#[tokio::test]
	async fn find_by_key_misses_cleanly() {
		let pool = create_test_pool().await;
		let repo = BlobRepository::new(pool);

		let found = repo.find_by_key("no-such-key").await.unwrap();
		assert!(found.is_none());
	}
}

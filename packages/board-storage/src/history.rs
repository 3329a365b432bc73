use time::OffsetDateTime;

use crate::{Result, db::Db, models::SearchTerm};

/// Record a searched keyword. A keyword already on file gets its timestamp
/// refreshed in place; the UNIQUE constraint arbitrates concurrent inserts
/// of the same new keyword, so the loser lands in the UPDATE arm instead of
/// erroring.
pub async fn upsert(db: &Db, keyword: &str, now: OffsetDateTime) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO search_terms (keyword, searched_at)
VALUES ($1, $2)
ON CONFLICT (keyword) DO UPDATE
SET searched_at = EXCLUDED.searched_at",
	)
	.bind(keyword)
	.bind(now)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn recent(db: &Db, limit: i64) -> Result<Vec<SearchTerm>> {
	let terms = sqlx::query_as::<_, SearchTerm>(
		"\
SELECT id, keyword, searched_at
FROM search_terms
ORDER BY searched_at DESC
LIMIT $1",
	)
	.bind(limit)
	.fetch_all(&db.pool)
	.await?;

	Ok(terms)
}

pub async fn delete(db: &Db, id: i64) -> Result<bool> {
	let result =
		sqlx::query("DELETE FROM search_terms WHERE id = $1").bind(id).execute(&db.pool).await?;

	Ok(result.rows_affected() > 0)
}

pub async fn clear(db: &Db) -> Result<()> {
	sqlx::query("DELETE FROM search_terms").execute(&db.pool).await?;

	Ok(())
}

use sqlx::{Postgres, QueryBuilder};
use time::OffsetDateTime;

use crate::{Result, db::Db, models::Post};

const POST_COLUMNS: &str = "id, title, content, author, view_count, created_at, updated_at";

pub async fn insert(
	db: &Db,
	title: &str,
	content: &str,
	author: Option<&str>,
	now: OffsetDateTime,
) -> Result<Post> {
	let post = sqlx::query_as::<_, Post>(
		"\
INSERT INTO posts (title, content, author, created_at, updated_at)
VALUES ($1, $2, COALESCE($3, 'anonymous'), $4, $4)
RETURNING id, title, content, author, view_count, created_at, updated_at",
	)
	.bind(title)
	.bind(content)
	.bind(author)
	.bind(now)
	.fetch_one(&db.pool)
	.await?;

	Ok(post)
}

/// Fetch a post and bump its view counter in one statement. The increment is
/// atomic under concurrent readers and leaves `updated_at` untouched: view
/// traffic is not a content mutation.
pub async fn fetch_and_touch_view(db: &Db, id: i64) -> Result<Option<Post>> {
	let post = sqlx::query_as::<_, Post>(
		"\
UPDATE posts
SET view_count = view_count + 1
WHERE id = $1
RETURNING id, title, content, author, view_count, created_at, updated_at",
	)
	.bind(id)
	.fetch_optional(&db.pool)
	.await?;

	Ok(post)
}

pub async fn update(
	db: &Db,
	id: i64,
	title: &str,
	content: &str,
	now: OffsetDateTime,
) -> Result<Option<Post>> {
	let post = sqlx::query_as::<_, Post>(
		"\
UPDATE posts
SET
	title = $2,
	content = $3,
	updated_at = $4
WHERE id = $1
RETURNING id, title, content, author, view_count, created_at, updated_at",
	)
	.bind(id)
	.bind(title)
	.bind(content)
	.bind(now)
	.fetch_optional(&db.pool)
	.await?;

	Ok(post)
}

pub async fn delete(db: &Db, id: i64) -> Result<bool> {
	let result = sqlx::query("DELETE FROM posts WHERE id = $1").bind(id).execute(&db.pool).await?;

	Ok(result.rows_affected() > 0)
}

pub async fn count(db: &Db, keyword: Option<&str>) -> Result<i64> {
	let mut builder = QueryBuilder::<Postgres>::new("SELECT count(*) FROM posts");

	if let Some(keyword) = keyword {
		builder.push(" WHERE ");
		push_keyword_match(&mut builder, keyword);
	}

	let total: i64 = builder.build_query_scalar().fetch_one(&db.pool).await?;

	Ok(total)
}

/// Offset window in canonical order, for page-numbered clients.
pub async fn page(
	db: &Db,
	keyword: Option<&str>,
	offset: i64,
	limit: i64,
) -> Result<Vec<Post>> {
	let mut builder = select_posts();

	if let Some(keyword) = keyword {
		builder.push(" WHERE ");
		push_keyword_match(&mut builder, keyword);
	}

	builder.push(" ORDER BY created_at DESC, id DESC OFFSET ");
	builder.push_bind(offset);
	builder.push(" LIMIT ");
	builder.push_bind(limit);

	let posts = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(posts)
}

/// Keyset window in canonical order. With a cursor, selects only rows
/// strictly older than the cursor point:
/// `(created_at < T) OR (created_at = T AND id < I)`. This predicate is the
/// sole resumption mechanism; under the (created_at, id) total order it is
/// exact, with no gaps or overlaps between consecutive windows.
pub async fn window_after(
	db: &Db,
	keyword: Option<&str>,
	cursor: Option<(OffsetDateTime, i64)>,
	fetch: i64,
) -> Result<Vec<Post>> {
	let mut builder = select_posts();
	let mut prefix = " WHERE ";

	if let Some(keyword) = keyword {
		builder.push(prefix);
		push_keyword_match(&mut builder, keyword);

		prefix = " AND ";
	}
	if let Some((created_at, id)) = cursor {
		builder.push(prefix);
		builder.push("(created_at < ");
		builder.push_bind(created_at);
		builder.push(" OR (created_at = ");
		builder.push_bind(created_at);
		builder.push(" AND id < ");
		builder.push_bind(id);
		builder.push("))");
	}

	builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
	builder.push_bind(fetch);

	let posts = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(posts)
}

pub async fn prev_id(db: &Db, id: i64) -> Result<Option<i64>> {
	let prev =
		sqlx::query_scalar::<_, i64>("SELECT id FROM posts WHERE id < $1 ORDER BY id DESC LIMIT 1")
			.bind(id)
			.fetch_optional(&db.pool)
			.await?;

	Ok(prev)
}

pub async fn next_id(db: &Db, id: i64) -> Result<Option<i64>> {
	let next =
		sqlx::query_scalar::<_, i64>("SELECT id FROM posts WHERE id > $1 ORDER BY id ASC LIMIT 1")
			.bind(id)
			.fetch_optional(&db.pool)
			.await?;

	Ok(next)
}

fn select_posts() -> QueryBuilder<'static, Postgres> {
	QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"))
}

fn push_keyword_match(builder: &mut QueryBuilder<'_, Postgres>, keyword: &str) {
	let pattern = like_pattern(keyword);

	builder.push("(title ILIKE ");
	builder.push_bind(pattern.clone());
	builder.push(" ESCAPE '\\' OR content ILIKE ");
	builder.push_bind(pattern);
	builder.push(" ESCAPE '\\')");
}

/// `%keyword%` with LIKE metacharacters escaped, so a keyword like `100%`
/// matches literally.
pub fn like_pattern(keyword: &str) -> String {
	let mut escaped = String::with_capacity(keyword.len());

	for ch in keyword.chars() {
		if matches!(ch, '\\' | '%' | '_') {
			escaped.push('\\');
		}

		escaped.push(ch);
	}

	format!("%{escaped}%")
}

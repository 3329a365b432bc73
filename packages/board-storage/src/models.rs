use time::OffsetDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
	pub id: i64,
	pub title: String,
	pub content: String,
	pub author: String,
	pub view_count: i64,
	pub created_at: OffsetDateTime,
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SearchTerm {
	pub id: i64,
	pub keyword: String,
	pub searched_at: OffsetDateTime,
}

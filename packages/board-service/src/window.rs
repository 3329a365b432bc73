use serde::Serialize;
use time::OffsetDateTime;

use crate::{BoardService, Cursor, Result, paging::Paging};
use board_storage::{models::Post, posts};

/// The two result shapes every listing path produces, selected by the
/// request's paging mode and serialized without a tag.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Window {
	Page(PageWindow),
	Cursor(CursorWindow),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
	pub items: Vec<PostBody>,
	pub page: i64,
	pub limit: i64,
	pub total: i64,
	pub total_pages: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CursorWindow {
	pub items: Vec<PostBody>,
	pub next_cursor: Option<Cursor>,
	pub has_more: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostBody {
	pub id: i64,
	pub title: String,
	pub content: String,
	pub author: String,
	pub view_count: i64,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde")]
	pub updated_at: OffsetDateTime,
}

impl From<Post> for PostBody {
	fn from(post: Post) -> Self {
		Self {
			id: post.id,
			title: post.title,
			content: post.content,
			author: post.author,
			view_count: post.view_count,
			created_at: post.created_at,
			updated_at: post.updated_at,
		}
	}
}

impl Window {
	/// The zero-item window of the requested shape, used when a search
	/// keyword normalizes to nothing.
	pub(crate) fn empty(paging: Paging) -> Self {
		match paging {
			Paging::Page { page, limit } =>
				Self::Page(PageWindow { items: Vec::new(), page, limit, total: 0, total_pages: 0 }),
			Paging::Cursor { .. } =>
				Self::Cursor(CursorWindow { items: Vec::new(), next_cursor: None, has_more: false }),
		}
	}
}

impl BoardService {
	/// The windowing engine. Both modes run through here so a listing and a
	/// search can never disagree on ordering; the optional keyword predicate
	/// is the only difference between them.
	pub(crate) async fn window(&self, paging: Paging, keyword: Option<&str>) -> Result<Window> {
		match paging {
			Paging::Page { page, limit } => {
				let total = posts::count(&self.db, keyword).await?;
				let items = posts::page(&self.db, keyword, (page - 1) * limit, limit).await?;

				Ok(Window::Page(PageWindow {
					items: items.into_iter().map(PostBody::from).collect(),
					page,
					limit,
					total,
					total_pages: (total as u64).div_ceil(limit as u64) as i64,
				}))
			},
			Paging::Cursor { limit, after } => {
				// Over-fetch by one: has_more comes from the same scan as the
				// items, so it stays correct under concurrent inserts, which
				// a separate count query could not guarantee.
				let mut items = posts::window_after(
					&self.db,
					keyword,
					after.map(|cursor| (cursor.created_at, cursor.id)),
					limit + 1,
				)
				.await?;
				let has_more = items.len() as i64 > limit;

				if has_more {
					items.truncate(limit as usize);
				}

				let next_cursor = if has_more {
					items.last().map(|post| Cursor { created_at: post.created_at, id: post.id })
				} else {
					None
				};

				Ok(Window::Cursor(CursorWindow {
					items: items.into_iter().map(PostBody::from).collect(),
					next_cursor,
					has_more,
				}))
			},
		}
	}
}

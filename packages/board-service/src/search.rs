use serde::Deserialize;
use time::OffsetDateTime;

use crate::{BoardService, PageQuery, Result, Window, paging::Paging};
use board_domain::keyword;
use board_storage::{db::Db, history};

/// `q` plus the same paging inputs as the listing surface. Spelled out
/// rather than flattened so the query-string extractor can parse the
/// numeric fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
	pub q: String,
	pub page: Option<i64>,
	pub limit: Option<i64>,
	pub cursor_created_at: Option<String>,
	pub cursor_id: Option<i64>,
}

impl SearchQuery {
	fn paging(&self) -> PageQuery {
		PageQuery {
			page: self.page,
			limit: self.limit,
			cursor_created_at: self.cursor_created_at.clone(),
			cursor_id: self.cursor_id,
		}
	}
}

impl BoardService {
	/// Search posts whose title or content contains the keyword, windowed
	/// exactly like a plain listing.
	pub async fn search(&self, query: SearchQuery) -> Result<Window> {
		let now = OffsetDateTime::now_utc();
		let paging = Paging::from_query(&query.paging(), &self.cfg.pagination);
		let Some(keyword) = keyword::normalize(&query.q) else {
			// Normalized-empty input means an explicitly empty result set,
			// not an unfiltered listing, and nothing is recorded.
			return Ok(Window::empty(paging));
		};

		self.record_keyword(keyword.clone(), now);

		self.window(paging, Some(&keyword)).await
	}

	/// Best-effort history recording, off the result path. A failure is
	/// logged and dropped; the enclosing search still succeeds.
	fn record_keyword(&self, keyword: String, now: OffsetDateTime) {
		let db = Db { pool: self.db.pool.clone() };

		tokio::spawn(async move {
			if let Err(err) = history::upsert(&db, &keyword, now).await {
				tracing::warn!(%keyword, %err, "Failed to record search keyword.");
			}
		});
	}
}

use serde::Serialize;
use time::OffsetDateTime;

use crate::{BoardService, Error, Result};
use board_storage::{history, models::SearchTerm};

/// How many recently-searched keywords the history surface returns.
pub const RECENT_TERMS_LIMIT: i64 = 10;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
	pub history: Vec<SearchTermBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTermBody {
	pub id: i64,
	pub keyword: String,
	#[serde(with = "crate::time_serde")]
	pub searched_at: OffsetDateTime,
}

impl From<SearchTerm> for SearchTermBody {
	fn from(term: SearchTerm) -> Self {
		Self { id: term.id, keyword: term.keyword, searched_at: term.searched_at }
	}
}

impl BoardService {
	pub async fn recent_terms(&self) -> Result<HistoryResponse> {
		let terms = history::recent(&self.db, RECENT_TERMS_LIMIT).await?;

		Ok(HistoryResponse { history: terms.into_iter().map(SearchTermBody::from).collect() })
	}

	pub async fn delete_term(&self, id: i64) -> Result<()> {
		if !history::delete(&self.db, id).await? {
			return Err(Error::NotFound { message: format!("No search term with id {id}.") });
		}

		Ok(())
	}

	pub async fn clear_terms(&self) -> Result<()> {
		history::clear(&self.db).await?;

		Ok(())
	}
}

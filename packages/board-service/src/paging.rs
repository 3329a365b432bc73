use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Paging inputs shared by the listing and search surfaces. A present
/// `page` selects page mode; otherwise the request is cursor mode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
	pub page: Option<i64>,
	pub limit: Option<i64>,
	pub cursor_created_at: Option<String>,
	pub cursor_id: Option<i64>,
}

/// Resume point for cursor-mode windows: the (created_at, id) of the last
/// item the client has seen. Minted only when more data remains, consumed
/// by the next request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	pub id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Paging {
	Page { page: i64, limit: i64 },
	Cursor { limit: i64, after: Option<Cursor> },
}

impl Paging {
	pub(crate) fn from_query(query: &PageQuery, cfg: &board_config::Pagination) -> Self {
		match query.page {
			Some(page) => Self::Page {
				page: if page < 1 { cfg.default_page } else { page },
				limit: clamp_limit(query.limit, cfg.page_default_limit, cfg.max_limit),
			},
			None => Self::Cursor {
				limit: clamp_limit(query.limit, cfg.cursor_default_limit, cfg.max_limit),
				after: decode_cursor(query.cursor_created_at.as_deref(), query.cursor_id),
			},
		}
	}
}

fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
	match limit {
		Some(limit) if limit > max => max,
		Some(limit) if limit > 0 => limit,
		_ => default,
	}
}

/// Lenient by policy: a half-supplied or unparsable cursor restarts the
/// scan from the newest item instead of erroring.
fn decode_cursor(created_at: Option<&str>, id: Option<i64>) -> Option<Cursor> {
	let created_at = OffsetDateTime::parse(created_at?, &Rfc3339).ok()?;

	Some(Cursor { created_at, id: id? })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cfg() -> board_config::Pagination {
		board_config::Pagination::default()
	}

	fn query(
		page: Option<i64>,
		limit: Option<i64>,
		cursor_created_at: Option<&str>,
		cursor_id: Option<i64>,
	) -> PageQuery {
		PageQuery {
			page,
			limit,
			cursor_created_at: cursor_created_at.map(str::to_string),
			cursor_id,
		}
	}

	#[test]
	fn page_param_selects_page_mode() {
		let paging = Paging::from_query(&query(Some(3), Some(10), None, None), &cfg());

		assert_eq!(paging, Paging::Page { page: 3, limit: 10 });
	}

	#[test]
	fn absent_page_selects_cursor_mode() {
		let paging = Paging::from_query(&query(None, None, None, None), &cfg());

		assert_eq!(paging, Paging::Cursor { limit: 20, after: None });
	}

	#[test]
	fn nonpositive_page_normalizes_to_first() {
		let paging = Paging::from_query(&query(Some(0), None, None, None), &cfg());

		assert_eq!(paging, Paging::Page { page: 1, limit: 5 });

		let paging = Paging::from_query(&query(Some(-7), None, None, None), &cfg());

		assert_eq!(paging, Paging::Page { page: 1, limit: 5 });
	}

	#[test]
	fn limit_is_defaulted_and_capped() {
		let paging = Paging::from_query(&query(Some(1), Some(0), None, None), &cfg());

		assert_eq!(paging, Paging::Page { page: 1, limit: 5 });

		let paging = Paging::from_query(&query(Some(1), Some(1_000), None, None), &cfg());

		assert_eq!(paging, Paging::Page { page: 1, limit: 100 });

		let paging = Paging::from_query(&query(None, Some(-3), None, None), &cfg());

		assert_eq!(paging, Paging::Cursor { limit: 20, after: None });
	}

	#[test]
	fn well_formed_cursor_decodes() {
		let paging = Paging::from_query(
			&query(None, None, Some("2024-05-01T12:00:00Z"), Some(42)),
			&cfg(),
		);
		let Paging::Cursor { after: Some(cursor), .. } = paging else {
			panic!("expected a decoded cursor");
		};

		assert_eq!(cursor.id, 42);
	}

	#[test]
	fn half_supplied_cursor_is_ignored() {
		let paging =
			Paging::from_query(&query(None, None, Some("2024-05-01T12:00:00Z"), None), &cfg());

		assert_eq!(paging, Paging::Cursor { limit: 20, after: None });

		let paging = Paging::from_query(&query(None, None, None, Some(42)), &cfg());

		assert_eq!(paging, Paging::Cursor { limit: 20, after: None });
	}

	#[test]
	fn malformed_cursor_timestamp_is_ignored() {
		let paging =
			Paging::from_query(&query(None, None, Some("yesterday-ish"), Some(42)), &cfg());

		assert_eq!(paging, Paging::Cursor { limit: 20, after: None });
	}
}

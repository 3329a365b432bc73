use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

/// Window sizing shared by every listing path. The numbers the original
/// clients were built against: page-mode windows of 5, cursor-mode windows
/// of 20, everything capped at 100.
#[derive(Debug, Deserialize)]
pub struct Pagination {
	#[serde(default = "default_page")]
	pub default_page: i64,
	#[serde(default = "default_page_limit")]
	pub page_default_limit: i64,
	#[serde(default = "default_cursor_limit")]
	pub cursor_default_limit: i64,
	#[serde(default = "default_max_limit")]
	pub max_limit: i64,
}

impl Default for Pagination {
	fn default() -> Self {
		Self {
			default_page: default_page(),
			page_default_limit: default_page_limit(),
			cursor_default_limit: default_cursor_limit(),
			max_limit: default_max_limit(),
		}
	}
}

fn default_page() -> i64 {
	1
}

fn default_page_limit() -> i64 {
	5
}

fn default_cursor_limit() -> i64 {
	20
}

fn default_max_limit() -> i64 {
	100
}

pub mod create;
pub mod delete;
pub mod get;
pub mod history;
pub mod list;
pub mod paging;
pub mod search;
pub mod time_serde;
pub mod update;
pub mod window;

mod error;

pub use create::CreateRequest;
pub use error::{Error, Result};
pub use get::PostDetail;
pub use history::HistoryResponse;
pub use paging::{Cursor, PageQuery};
pub use search::SearchQuery;
pub use update::UpdateRequest;
pub use window::{CursorWindow, PageWindow, PostBody, Window};

use board_config::Config;
use board_storage::db::Db;

pub struct BoardService {
	pub cfg: Config,
	pub db: Db,
}
impl BoardService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, db }
	}
}

use std::sync::Arc;

use board_service::BoardService;
use board_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<BoardService>,
}
impl AppState {
	pub async fn new(config: board_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let service = BoardService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}

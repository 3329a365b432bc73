use crate::{BoardService, Error, Result};
use board_storage::posts;

impl BoardService {
	pub async fn delete(&self, id: i64) -> Result<()> {
		if !posts::delete(&self.db, id).await? {
			return Err(Error::NotFound { message: format!("No post with id {id}.") });
		}

		Ok(())
	}
}

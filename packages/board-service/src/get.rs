use serde::Serialize;

use crate::{BoardService, Error, PostBody, Result};
use board_storage::posts;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
	pub post: PostBody,
	pub prev_id: Option<i64>,
	pub next_id: Option<i64>,
}

impl BoardService {
	pub async fn get(&self, id: i64) -> Result<PostDetail> {
		let post = posts::fetch_and_touch_view(&self.db, id)
			.await?
			.ok_or_else(|| Error::NotFound { message: format!("No post with id {id}.") })?;
		// Neighbor ids are auxiliary; a failed lookup leaves the field
		// absent instead of failing the fetch.
		let prev_id = posts::prev_id(&self.db, id).await.unwrap_or_else(|err| {
			tracing::warn!(id, %err, "Failed to resolve previous post id.");

			None
		});
		let next_id = posts::next_id(&self.db, id).await.unwrap_or_else(|err| {
			tracing::warn!(id, %err, "Failed to resolve next post id.");

			None
		});

		Ok(PostDetail { post: post.into(), prev_id, next_id })
	}
}

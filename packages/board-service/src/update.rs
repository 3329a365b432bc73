use serde::Deserialize;
use time::OffsetDateTime;

use crate::{BoardService, Error, PostBody, Result};
use board_domain::admission::{self, PostInput};
use board_storage::posts;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
	pub title: String,
	pub content: String,
}

impl BoardService {
	pub async fn update(&self, id: i64, req: UpdateRequest) -> Result<PostBody> {
		let now = OffsetDateTime::now_utc();
		let title = req.title.trim();
		let content = req.content.trim();

		admission::admit(&PostInput { title, content }).map_err(|code| Error::InvalidRequest {
			message: admission::reject_message(code).to_string(),
		})?;

		let post = posts::update(&self.db, id, title, content, now)
			.await?
			.ok_or_else(|| Error::NotFound { message: format!("No post with id {id}.") })?;

		Ok(post.into())
	}
}

use serde::Deserialize;
use time::OffsetDateTime;

use crate::{BoardService, Error, PostBody, Result};
use board_domain::admission::{self, PostInput};
use board_storage::posts;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
	pub title: String,
	pub content: String,
	pub author: Option<String>,
}

impl BoardService {
	pub async fn create(&self, req: CreateRequest) -> Result<PostBody> {
		let now = OffsetDateTime::now_utc();
		let title = req.title.trim();
		let content = req.content.trim();

		admission::admit(&PostInput { title, content }).map_err(|code| Error::InvalidRequest {
			message: admission::reject_message(code).to_string(),
		})?;

		let author = req.author.as_deref().map(str::trim).filter(|author| !author.is_empty());
		let post = posts::insert(&self.db, title, content, author, now).await?;

		Ok(post.into())
	}
}

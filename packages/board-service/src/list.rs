use crate::{BoardService, PageQuery, Result, Window, paging::Paging};

impl BoardService {
	/// List posts in canonical order, page mode or cursor mode depending on
	/// which inputs are present.
	pub async fn list(&self, query: PageQuery) -> Result<Window> {
		let paging = Paging::from_query(&query, &self.cfg.pagination);

		self.window(paging, None).await
	}
}

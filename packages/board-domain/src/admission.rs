/// Byte ceiling for titles. 45 three-byte Hangul syllables fill it exactly;
/// pure-ASCII titles hit the code-point ceiling first.
pub const TITLE_MAX_BYTES: usize = 135;
pub const TITLE_MAX_CHARS: usize = 45;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectCode {
	RejectEmptyTitle,
	RejectEmptyContent,
	RejectTitleTooLong,
}

pub struct PostInput<'a> {
	pub title: &'a str,
	pub content: &'a str,
}

/// Gate a post before it is persisted or updated. Inputs are judged after
/// trimming surrounding whitespace. The title budget is dual-unit: the
/// UTF-8 byte length and the code-point count must both fit, a mixed-width
/// approximation carried over from the clients this service grew up with.
pub fn admit(input: &PostInput<'_>) -> Result<(), RejectCode> {
	let title = input.title.trim();

	if title.is_empty() {
		return Err(RejectCode::RejectEmptyTitle);
	}
	if input.content.trim().is_empty() {
		return Err(RejectCode::RejectEmptyContent);
	}
	if title.len() > TITLE_MAX_BYTES {
		return Err(RejectCode::RejectTitleTooLong);
	}
	if title.chars().count() > TITLE_MAX_CHARS {
		return Err(RejectCode::RejectTitleTooLong);
	}

	Ok(())
}

pub fn reject_message(code: RejectCode) -> &'static str {
	match code {
		RejectCode::RejectEmptyTitle => "Title must not be empty.",
		RejectCode::RejectEmptyContent => "Content must not be empty.",
		RejectCode::RejectTitleTooLong =>
			"Title exceeds the length budget (135 bytes, 45 characters).",
	}
}

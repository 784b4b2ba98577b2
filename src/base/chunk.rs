//! Splitting long replies to fit the chat platform's message limit.

/// Discord's hard limit on message content, in characters.
pub const MESSAGE_LIMIT: usize = 2000;

/// Split `text` into ordered, contiguous pieces of at most `limit` characters.
///
/// Pieces never split a code point, and concatenating them yields `text` again.
/// Empty text yields no pieces.
pub fn chunk_message(text: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(1);
    let mut chunks = Vec::with_capacity(text.len() / limit + 1);
    let mut rest = text;

    while !rest.is_empty() {
        let end = rest.char_indices().nth(limit).map(|(idx, _)| idx).unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }

    chunks
}

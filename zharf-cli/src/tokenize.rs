//! Sentence splitting and tokenization
//!
//! The splitter cuts after every sentence-ending punctuation mark, which
//! is why punctuation standardization must run first. Tokenization is a
//! plain whitespace split; by that point cleaning has already reduced
//! every separator to ordinary spaces.

/// Characters that end a sentence (after punctuation standardization)
const TERMINATORS: [char; 4] = ['.', '!', '?', ';'];

/// Split text into sentences, cutting after each terminator
///
/// The terminator stays with its sentence; whitespace between sentences
/// is dropped, and so is a whitespace-only remainder.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !TERMINATORS.contains(&ch) {
            continue;
        }
        let end = idx + ch.len_utf8();
        sentences.push(text[start..end].to_string());

        start = end;
        while let Some(&(j, c)) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
                start = j + c.len_utf8();
            } else {
                break;
            }
        }
    }

    let rest = &text[start..];
    if !rest.trim().is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

/// Split a cleaned sentence into tokens on runs of whitespace
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(str::to_string).collect()
}

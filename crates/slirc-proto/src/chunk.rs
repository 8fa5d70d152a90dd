//! Size-bounded splitting of outbound chat text.
//!
//! Servers reject lines over 512 bytes, and the prefix they prepend when
//! relaying a message eats into that. Text is therefore cut into fragments of
//! at most [`MAX_MESSAGE_SIZE`] encoded bytes, each sent as its own
//! `PRIVMSG`.
//!
//! Words (split on single spaces) are packed greedily. A word that is larger
//! than the budget by itself is cut on codepoint boundaries so that every
//! fragment still decodes under the session encoding.

use encoding::{Encoding, UTF_8};

/// Per-fragment budget in encoded bytes.
pub const MAX_MESSAGE_SIZE: usize = 384;

/// Encoded width of the single space placed between words.
const SEPARATOR_LEN: usize = 1;

/// Number of bytes `text` occupies on the wire under `encoding`.
pub fn encoded_len(text: &str, encoding: &'static Encoding) -> usize {
    if encoding == UTF_8 {
        return text.len();
    }
    let (bytes, _, _) = encoding.encode(text);
    bytes.len()
}

fn char_len(c: char, encoding: &'static Encoding) -> usize {
    let mut buf = [0u8; 4];
    encoded_len(c.encode_utf8(&mut buf), encoding)
}

/// Split `text` into ordered fragments of at most `budget` encoded bytes.
///
/// Rejoining the fragments with single spaces reproduces `text` exactly as
/// long as no single word exceeds the budget. Empty text yields no fragments.
///
/// ```
/// use slirc_proto::chunk::{chunk_text, MAX_MESSAGE_SIZE};
/// use slirc_proto::UTF_8;
///
/// let word = "a".repeat(1000);
/// let fragments = chunk_text(&word, MAX_MESSAGE_SIZE, UTF_8);
/// let lens: Vec<_> = fragments.iter().map(String::len).collect();
/// assert_eq!(lens, [384, 384, 232]);
/// ```
pub fn chunk_text(text: &str, budget: usize, encoding: &'static Encoding) -> Vec<String> {
    let mut fragments = Vec::new();
    if text.is_empty() {
        return fragments;
    }

    let mut words = text.split(' ').peekable();
    while let Some(&first) = words.peek() {
        if encoded_len(first, encoding) > budget {
            words.next();
            split_word(first, budget, encoding, &mut fragments);
            continue;
        }

        let mut block: Vec<&str> = Vec::new();
        let mut size = 0;
        while let Some(&word) = words.peek() {
            let len = encoded_len(word, encoding);
            let needed = if block.is_empty() {
                len
            } else {
                size + SEPARATOR_LEN + len
            };
            if needed > budget {
                break;
            }
            block.push(word);
            size = needed;
            words.next();
        }
        fragments.push(block.join(" "));
    }
    fragments
}

/// Cut one oversized word on codepoint boundaries.
fn split_word(word: &str, budget: usize, encoding: &'static Encoding, out: &mut Vec<String>) {
    let mut block = String::new();
    let mut size = 0;
    for c in word.chars() {
        let len = char_len(c, encoding);
        if size + len > budget && !block.is_empty() {
            out.push(std::mem::take(&mut block));
            size = 0;
        }
        block.push(c);
        size += len;
    }
    if !block.is_empty() {
        out.push(block);
    }
}

//! Sliding-window match finding for the LZ77-family encoders.
//!
//! Two interchangeable strategies share one contract: [`DirectIndexFinder`]
//! reports matches as absolute backward distances, for formats whose wire
//! encoding is relative to the decompressed stream, and
//! [`CircularBufferFinder`] reports staging-buffer slots, for formats whose
//! wire encoding is relative to a wrapping window buffer. Both run the same
//! greedy newest-candidate-first search over a per-byte-value candidate index.

pub mod circular;
pub mod direct;
mod index;

pub use circular::CircularBufferFinder;
pub use direct::DirectIndexFinder;

pub(crate) use index::CandidateIndex;

use crate::tokens::Token;

/// The longest backward reference found at a position.
///
/// `offset` is strategy-relative: a backward distance for the direct-index
/// strategy, a staging-buffer slot for the circular-buffer strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub offset: usize,
    pub length: usize,
}

/// Contract shared by both search strategies.
///
/// State lives for a single compression call; a finder is constructed fresh
/// per call and discarded at stream end.
pub trait MatchFinder {
    /// Best match ending before `pos`, or `None` below the format minimum
    fn search(&mut self, data: &[u8], pos: usize) -> Option<Match>;

    /// Index the byte at `pos` (and stage it, for the circular strategy)
    fn record(&mut self, data: &[u8], pos: usize);
}

/// Run the greedy encoder loop: longest match at each position, literals
/// where no match reaches the minimum. Every consumed byte is recorded so the
/// bytes inside a match remain eligible as later match sources.
pub(crate) fn tokenize<F: MatchFinder>(data: &[u8], finder: &mut F) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < data.len() {
        match finder.search(data, pos) {
            Some(m) => {
                tokens.push(Token::Match { offset: m.offset as u16, length: m.length as u16 });
                for p in pos..pos + m.length {
                    finder.record(data, p);
                }
                pos += m.length;
            }
            None => {
                tokens.push(Token::Literal(data[pos]));
                finder.record(data, pos);
                pos += 1;
            }
        }
    }
    tokens
}

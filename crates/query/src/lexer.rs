use logos::{Logos, Lexer};
use std::ops::Range;

/// Raw tokens used internally by logos
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"\s+")]
enum RawToken {
    #[regex(r"\S+")]
    Word,
}

/// A whitespace-delimited word of the raw query, before normalization
#[derive(Debug, PartialEq, Clone)]
pub struct Word<'source> {
    pub text: &'source str,
    pub span: Range<usize>,
}

/// Splits a raw query on runs of whitespace.
///
/// Words are yielded exactly as typed; lowercasing happens in
/// [`crate::tokenize`].
pub struct TermLexer<'source> {
    lexer: Lexer<'source, RawToken>,
}

impl<'source> TermLexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: RawToken::lexer(source),
        }
    }

    /// Returns an iterator over the word slices only
    pub fn words(self) -> impl Iterator<Item = &'source str> {
        self.map(|word| word.text)
    }
}

impl<'source> Iterator for TermLexer<'source> {
    type Item = Word<'source>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lexer.next()? {
                Ok(RawToken::Word) => {
                    return Some(Word {
                        text: self.lexer.slice(),
                        span: self.lexer.span(),
                    });
                }
                // Every non-whitespace run is a word, so this is unreachable
                // in practice; skip rather than surface it.
                Err(_) => continue,
            }
        }
    }
}

//! Tokenization of field values for word-level diffs

use regex::Regex;

/// A word together with the separator text that precedes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub separator: &'a str,
    pub word: &'a str,
}

/// A text cut into tokens
///
/// Concatenating every `separator + word` followed by `trailing` gives back
/// the original text exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokenized<'a> {
    pub tokens: Vec<Token<'a>>,
    /// Separator text after the last word
    pub trailing: &'a str,
}

impl<'a> Tokenized<'a> {
    /// Treat the whole text as a single token (empty text has none)
    pub fn whole(text: &'a str) -> Self {
        let tokens = if text.is_empty() {
            Vec::new()
        } else {
            vec![Token {
                separator: "",
                word: text,
            }]
        };
        Self {
            tokens,
            trailing: "",
        }
    }

    /// Split `text` at every non-empty match of `pattern`
    ///
    /// Separators before the first and after the last word are attached to
    /// the neighbouring word (or to `trailing`) instead of producing empty
    /// words, so surrounding separators never change the word list.
    pub fn split(text: &'a str, pattern: &Regex) -> Self {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut separator = "";
        let mut leading = true;

        for m in pattern.find_iter(text) {
            if m.start() == m.end() {
                continue;
            }
            let word = &text[start..m.start()];
            if !(leading && word.is_empty()) {
                tokens.push(Token { separator, word });
            }
            leading = false;
            separator = m.as_str();
            start = m.end();
        }

        let word = &text[start..];
        let trailing = if word.is_empty() {
            separator
        } else {
            tokens.push(Token { separator, word });
            ""
        };

        Self { tokens, trailing }
    }

    /// Words only
    pub fn words(&self) -> Vec<&'a str> {
        self.tokens.iter().map(|t| t.word).collect()
    }

    /// Rebuild the original text
    pub fn reconstruct(&self) -> String {
        let mut out: String = self
            .tokens
            .iter()
            .flat_map(|t| [t.separator, t.word])
            .collect();
        out.push_str(self.trailing);
        out
    }
}

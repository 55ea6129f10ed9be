//! Java scanner.
//!
//! Produces a flat token stream with doc comments attached to the token
//! that follows them. Literals keep only enough fidelity to be skipped;
//! operators the declaration grammar never inspects collapse into
//! `TokenKind::Punct`.

use crate::parser::ParseError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Char,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Comma,
    Semicolon,
    Dot,
    At,
    Question,
    Amp,
    Eq,
    Ellipsis,
    /// Any other operator character; the declaration grammar skips these.
    Punct,
    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    /// Doc comment (`/** ... */`) immediately preceding this token, raw.
    pub doc: Option<String>,
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    source_len: usize,
}

/// Tokenize a Java source file.
///
/// Unterminated comments and literals are structural errors: the file is
/// not scannable and the run must not pretend otherwise.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut scanner = Scanner {
        chars: source.chars().collect(),
        pos: 0,
        line: 1,
        source_len: source.len(),
    };
    scanner.run()
}

impl Scanner {
    fn run(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::with_capacity(self.source_len / 8);
        let mut pending_doc: Option<String> = None;

        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line: self.line,
                    doc: pending_doc.take(),
                });
                return Ok(tokens);
            };

            // Comments; doc comments are captured for the next token.
            if c == '/' && self.peek_at(1) == Some('/') {
                self.skip_line_comment();
                continue;
            }
            if c == '/' && self.peek_at(1) == Some('*') {
                let doc = self.skip_block_comment()?;
                if doc.is_some() {
                    pending_doc = doc;
                }
                continue;
            }

            let line = self.line;
            let token = if c.is_alphabetic() || c == '_' || c == '$' {
                self.scan_identifier()
            } else if c.is_ascii_digit() {
                self.scan_number()
            } else if c == '"' {
                self.scan_string()?
            } else if c == '\'' {
                self.scan_char()?
            } else {
                self.scan_punct()
            };

            tokens.push(Token {
                kind: token.0,
                text: token.1,
                line,
                doc: pending_doc.take(),
            });
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if let Some(ch) = c {
            self.pos += 1;
            if ch == '\n' {
                self.line += 1;
            }
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    /// Skip `/* ... */`; returns the raw text for `/** ... */` doc comments.
    fn skip_block_comment(&mut self) -> Result<Option<String>, ParseError> {
        let start_line = self.line;
        self.bump(); // '/'
        self.bump(); // '*'
        let is_doc = self.peek() == Some('*') && self.peek_at(1) != Some('/');
        let mut text = String::from("/*");
        loop {
            match self.bump() {
                Some('*') if self.peek() == Some('/') => {
                    self.bump();
                    text.push_str("*/");
                    return Ok(if is_doc { Some(text) } else { None });
                }
                Some(c) => text.push(c),
                None => {
                    return Err(ParseError::new("unterminated block comment", start_line));
                }
            }
        }
    }

    fn scan_identifier(&mut self) -> (TokenKind, String) {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        (TokenKind::Identifier, text)
    }

    /// Lenient numeric scan: the declaration grammar only ever skips
    /// numbers, so suffixes, underscores, hex digits, and exponents are
    /// swallowed without validation.
    fn scan_number(&mut self) -> (TokenKind, String) {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            let take = c.is_ascii_alphanumeric()
                || c == '_'
                || c == '.'
                || ((c == '+' || c == '-')
                    && matches!(text.chars().last(), Some('e' | 'E' | 'p' | 'P')));
            if take {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        (TokenKind::Number, text)
    }

    fn scan_string(&mut self) -> Result<(TokenKind, String), ParseError> {
        let start_line = self.line;
        // Text block: """ ... """
        if self.peek_at(1) == Some('"') && self.peek_at(2) == Some('"') {
            self.bump();
            self.bump();
            self.bump();
            loop {
                if self.peek() == Some('"')
                    && self.peek_at(1) == Some('"')
                    && self.peek_at(2) == Some('"')
                {
                    self.bump();
                    self.bump();
                    self.bump();
                    return Ok((TokenKind::String, String::new()));
                }
                if self.bump().is_none() {
                    return Err(ParseError::new("unterminated text block", start_line));
                }
            }
        }

        self.bump(); // opening quote
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('"') => return Ok((TokenKind::String, String::new())),
                Some('\n') | None => {
                    return Err(ParseError::new("unterminated string literal", start_line));
                }
                Some(_) => {}
            }
        }
    }

    fn scan_char(&mut self) -> Result<(TokenKind, String), ParseError> {
        let start_line = self.line;
        self.bump(); // opening quote
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('\'') => return Ok((TokenKind::Char, String::new())),
                None => {
                    return Err(ParseError::new("unterminated char literal", start_line));
                }
                Some(_) => {}
            }
        }
    }

    fn scan_punct(&mut self) -> (TokenKind, String) {
        // The only multi-char operator the grammar cares about.
        if self.peek() == Some('.') && self.peek_at(1) == Some('.') && self.peek_at(2) == Some('.')
        {
            self.bump();
            self.bump();
            self.bump();
            return (TokenKind::Ellipsis, "...".to_string());
        }

        let c = self.bump().expect("scan_punct called at eof");
        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            '@' => TokenKind::At,
            '?' => TokenKind::Question,
            '&' => TokenKind::Amp,
            '=' => TokenKind::Eq,
            _ => TokenKind::Punct,
        };
        (kind, c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn scans_declaration_tokens() {
        let toks = tokenize("public class Foo<T> { }").unwrap();
        let texts: Vec<&str> = toks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["public", "class", "Foo", "<", "T", ">", "{", "}", ""]);
    }

    #[test]
    fn attaches_doc_comment_to_next_token() {
        let toks = tokenize("/** Doc. */\npublic class Foo {}").unwrap();
        assert_eq!(toks[0].text, "public");
        assert!(toks[0].doc.as_deref().unwrap().contains("Doc."));
        assert!(toks[1].doc.is_none());
    }

    #[test]
    fn plain_comments_are_not_docs() {
        let toks = tokenize("/* not doc */ // line\nclass Foo {}").unwrap();
        assert!(toks[0].doc.is_none());
    }

    #[test]
    fn scans_ellipsis_and_literals() {
        assert_eq!(
            kinds("foo(String... args) 'x' \"s\" 1.5f"),
            [
                TokenKind::Identifier,
                TokenKind::LParen,
                TokenKind::Identifier,
                TokenKind::Ellipsis,
                TokenKind::Identifier,
                TokenKind::RParen,
                TokenKind::Char,
                TokenKind::String,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn text_blocks_are_single_tokens() {
        let toks = tokenize("String s = \"\"\"\n multi \" line \n\"\"\";").unwrap();
        let string_count = toks.iter().filter(|t| t.kind == TokenKind::String).count();
        assert_eq!(string_count, 1);
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        assert!(tokenize("/* never closed").is_err());
    }
}

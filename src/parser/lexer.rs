//! Grid Lexer
//!
//! Splits one line of a grid file into cell tokens and comments.
//! Cells are separated by whitespace and/or commas; `#` or `;` starts a
//! comment that runs to the end of the line.

/// Token types in a grid line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Integer cell value like "7" or "-3"
    Number(i64),
    /// Comment including its leading delimiter
    Comment,
    /// Anything that is neither a separator nor a valid integer
    Invalid,
}

/// A token with its text and 1-based column
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub column: usize,
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == ','
}

fn is_comment_start(ch: char) -> bool {
    ch == '#' || ch == ';'
}

/// Tokenize a single line of a grid file
pub fn tokenize_line(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().enumerate().peekable();

    while let Some((char_pos, (start_idx, ch))) = chars.next() {
        if is_separator(ch) {
            continue;
        }

        if is_comment_start(ch) {
            tokens.push(Token {
                kind: TokenKind::Comment,
                text: line[start_idx..].to_string(),
                column: char_pos + 1,
            });
            break;
        }

        let mut end_idx = start_idx + ch.len_utf8();
        while let Some(&(_, (idx, next_ch))) = chars.peek() {
            if is_separator(next_ch) || is_comment_start(next_ch) {
                break;
            }
            end_idx = idx + next_ch.len_utf8();
            chars.next();
        }

        let text = line[start_idx..end_idx].to_string();
        let kind = match text.parse::<i64>() {
            Ok(value) => TokenKind::Number(value),
            Err(_) => TokenKind::Invalid,
        };

        tokens.push(Token {
            kind,
            text,
            column: char_pos + 1,
        });
    }

    tokens
}

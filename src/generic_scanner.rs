use crate::classify::{
    is_compound_operator, is_delimiter, is_digit, is_letter, is_letter_or_digit_or_underscore,
    is_operator_start, is_whitespace,
};
use crate::token::{GenericToken, GenericTokenType};

/// Lexeme of the UNKNOWN token emitted in place of a `/*` comment that never closes.
pub const UNTERMINATED_COMMENT_MESSAGE: &str = "unterminated multi-line comment";

/// public interface for tokenizing C-family source
pub fn scan_generic(source: &str) -> Vec<GenericToken> {
    let mut scanner = Scanner::new(source);
    scanner.scan_tokens();
    scanner.tokens
}

struct Scanner {
    chars: Vec<char>,
    tokens: Vec<GenericToken>,

    // position of the start of lexeme
    current_lexeme_start: usize,
    current: usize,
    line: usize,
    column: usize,
    // where the current lexeme started, a block comment can span lines
    start_line: usize,
    start_column: usize,
}

impl Scanner {
    fn new(source: &str) -> Scanner {
        Scanner {
            chars: source.chars().collect(),
            tokens: vec![],
            current_lexeme_start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
        }
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }
    }

    fn scan_token(&mut self) {
        self.current_lexeme_start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;
        let c: char = self.advance();
        match c {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            c if is_whitespace(&c) => {}
            '/' if self.match_one('/') => {
                while self.peek_one().is_some_and(|c| *c != '\n') {
                    self.advance();
                }
                self.add_token_at_ending_column(GenericTokenType::Comment);
            }
            '/' if self.match_one('*') => self.consume_block_comment(),
            '"' | '\'' => {
                let closed = self.consume_quoted(c);
                let token_type = literal_type(c, closed);
                self.add_token_at_ending_column(token_type);
            }
            c if is_digit(&c) || (c == '.' && self.peek_one().is_some_and(is_digit)) => {
                self.consume_number(c == '.');
                self.add_token(GenericTokenType::Number);
            }
            c if is_letter(&c) || c == '_' => {
                let token_type = self.consume_identifier();
                self.add_token(token_type);
            }
            c if is_operator_start(&c) => {
                if self
                    .peek_one()
                    .is_some_and(|next| is_compound_operator(c, *next))
                {
                    self.advance();
                }
                self.add_token(GenericTokenType::Operator);
            }
            c if is_delimiter(&c) => self.add_token(GenericTokenType::Delimiter),
            _ => self.add_token(GenericTokenType::Unknown),
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn match_one(&mut self, expected: char) -> bool {
        if self.peek_one() != Some(&expected) {
            return false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    /// like advance but does not consume the character. 1 lookahead.
    fn peek_one(&self) -> Option<&char> {
        self.chars.get(self.current)
    }

    /// 2 lookahead
    fn peek_two(&self) -> Option<&char> {
        self.chars.get(self.current + 1)
    }

    fn lexeme(&self) -> String {
        self.chars[self.current_lexeme_start..self.current]
            .iter()
            .collect()
    }

    fn add_token(&mut self, token_type: GenericTokenType) {
        let text = self.lexeme();
        self.push(token_type, text, self.start_line, self.start_column);
    }

    /// Comments and quoted literals report the ending column minus the lexeme length.
    /// Newlines inside a literal don't reset the column, so this always agrees with the
    /// start column.
    fn add_token_at_ending_column(&mut self, token_type: GenericTokenType) {
        let text = self.lexeme();
        let length = self.current - self.current_lexeme_start;
        self.push(token_type, text, self.line, self.column - length);
    }

    fn push(&mut self, token_type: GenericTokenType, lexeme: String, line: usize, column: usize) {
        self.tokens.push(GenericToken {
            r#type: token_type,
            lexeme,
            line,
            column,
        });
    }

    fn consume_block_comment(&mut self) {
        let mut closed = false;
        while !self.is_at_end() {
            if self.peek_one() == Some(&'*') && self.peek_two() == Some(&'/') {
                // consume '*' and '/'
                self.advance();
                self.advance();
                closed = true;
                break;
            }
            if self.advance() == '\n' {
                self.line += 1;
                self.column = 1;
            }
        }

        if closed {
            self.add_token(GenericTokenType::Comment);
        } else {
            self.push(
                GenericTokenType::Unknown,
                UNTERMINATED_COMMENT_MESSAGE.to_string(),
                self.start_line,
                self.start_column,
            );
        }
    }

    /// Consumes up to and including the closing `quote`, honoring backslash escapes.
    /// Returns whether the closing quote was found before the end of input.
    fn consume_quoted(&mut self, quote: char) -> bool {
        let mut escaped = false;
        while !self.is_at_end() {
            let c = self.advance();
            if c == '\\' && !escaped {
                escaped = true;
            } else if c == quote && !escaped {
                return true;
            } else {
                escaped = false;
            }
        }
        false
    }

    fn consume_number(&mut self, starts_with_dot: bool) {
        let mut seen_dot = starts_with_dot;
        while let Some(&c) = self.peek_one() {
            if is_digit(&c) {
                self.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }
    }

    fn consume_identifier(&mut self) -> GenericTokenType {
        while self.peek_one().is_some_and(is_letter_or_digit_or_underscore) {
            self.advance();
        }

        if is_keyword(&self.lexeme()) {
            GenericTokenType::Keyword
        } else {
            GenericTokenType::Identifier
        }
    }
}

/// Whether `token` stands for a `/*` comment that was never closed.
pub fn is_unterminated_comment(token: &GenericToken) -> bool {
    token.r#type == GenericTokenType::Unknown && token.lexeme == UNTERMINATED_COMMENT_MESSAGE
}

/// Kind of a quoted literal. An unterminated literal is currently reported with the same kind
/// as a closed one, holding everything up to the end of input.
fn literal_type(quote: char, _closed: bool) -> GenericTokenType {
    match quote {
        '"' => GenericTokenType::String,
        _ => GenericTokenType::Char,
    }
}

fn is_keyword(input: &str) -> bool {
    matches!(
        input,
        "abstract"
            | "assert"
            | "boolean"
            | "break"
            | "byte"
            | "case"
            | "catch"
            | "char"
            | "class"
            | "const"
            | "continue"
            | "default"
            | "do"
            | "double"
            | "else"
            | "enum"
            | "extends"
            | "final"
            | "finally"
            | "float"
            | "for"
            | "goto"
            | "if"
            | "implements"
            | "import"
            | "instanceof"
            | "int"
            | "interface"
            | "long"
            | "native"
            | "new"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "return"
            | "short"
            | "static"
            | "strictfp"
            | "super"
            | "switch"
            | "synchronized"
            | "this"
            | "throw"
            | "throws"
            | "transient"
            | "try"
            | "void"
            | "volatile"
            | "while"
            | "true"
            | "false"
            | "null"
    )
}

use crate::classify::{is_digit, is_letter, is_letter_or_digit_or_underscore, is_whitespace};
use crate::token::{RobotToken, RobotTokenType};

const ROBOT_KEYWORD: &str = "Robot";

/// public interface for tokenizing robot commands
pub fn scan_robot(source: &str) -> Vec<RobotToken> {
    let mut tokens = vec![];
    // `lines` splits on "\n" and "\r\n", nothing carries over from one line to the next
    for (index, line) in source.lines().enumerate() {
        let mut scanner = LineScanner::new(line, index + 1);
        scanner.scan_tokens();
        tokens.append(&mut scanner.tokens);
    }
    tokens
}

struct LineScanner {
    chars: Vec<char>,
    tokens: Vec<RobotToken>,
    line: usize,

    // zero-based, the reported column is start + 1
    current_lexeme_start: usize,
    current: usize,
}

impl LineScanner {
    fn new(line_text: &str, line: usize) -> LineScanner {
        LineScanner {
            chars: line_text.chars().collect(),
            tokens: vec![],
            line,
            current_lexeme_start: 0,
            current: 0,
        }
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }
    }

    fn scan_token(&mut self) {
        self.current_lexeme_start = self.current;

        if self.current == 0 && self.match_robot_keyword() {
            self.current += ROBOT_KEYWORD.chars().count();
            self.push(RobotTokenType::RobotKeyword, ROBOT_KEYWORD.to_string(), None);
            return;
        }

        let c = self.advance();
        let maybe_token_type = match c {
            c if is_whitespace(&c) => None,
            c if is_letter(&c) || c == '_' => {
                self.consume_word();
                Some(RobotTokenType::Identifier)
            }
            '.' => {
                self.add_token(RobotTokenType::Dot);
                self.consume_if_match_method();
                None
            }
            '(' => Some(RobotTokenType::ParenOpen),
            ')' => Some(RobotTokenType::ParenClose),
            '{' => Some(RobotTokenType::BraceOpen),
            '}' => Some(RobotTokenType::BraceClose),
            '=' => Some(RobotTokenType::Equals),
            c if is_digit(&c) => {
                while self.peek_one().is_some_and(is_digit) {
                    self.advance();
                }
                Some(RobotTokenType::Number)
            }
            _ => Some(RobotTokenType::Unknown),
        };

        if let Some(token_type) = maybe_token_type {
            self.add_token(token_type);
        }
    }

    /// Only looked at when the cursor is at column 0, and the comparison ignores ASCII case.
    fn match_robot_keyword(&self) -> bool {
        let head: String = self.chars.iter().take(ROBOT_KEYWORD.len()).collect();
        head.chars().count() == ROBOT_KEYWORD.len() && head.eq_ignore_ascii_case(ROBOT_KEYWORD)
    }

    /// After a dot, a name starting with a letter is either an action or a method.
    fn consume_if_match_method(&mut self) {
        if !self.peek_one().is_some_and(is_letter) {
            return;
        }
        self.current_lexeme_start = self.current;
        self.consume_word();
        let name = self.lexeme();
        self.add_token(match_action(&name));
    }

    fn consume_word(&mut self) {
        while self.peek_one().is_some_and(is_letter_or_digit_or_underscore) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn advance(&mut self) -> char {
        let c = self.chars[self.current];
        self.current += 1;
        c
    }

    fn peek_one(&self) -> Option<&char> {
        self.chars.get(self.current)
    }

    fn lexeme(&self) -> String {
        self.chars[self.current_lexeme_start..self.current]
            .iter()
            .collect()
    }

    fn add_token(&mut self, token_type: RobotTokenType) {
        let text = self.lexeme();
        let value = match token_type {
            RobotTokenType::Number => Some(text.clone()),
            _ => None,
        };
        self.push(token_type, text, value);
    }

    fn push(&mut self, token_type: RobotTokenType, lexeme: String, value: Option<String>) {
        self.tokens.push(RobotToken {
            r#type: token_type,
            lexeme,
            value,
            line: self.line,
            column: self.current_lexeme_start + 1,
        });
    }
}

fn match_action(name: &str) -> RobotTokenType {
    match name {
        "iniciar" | "finalizar" | "cerrarGarra" | "abrirGarra" => RobotTokenType::Action,
        _ => RobotTokenType::Method,
    }
}

#[cfg(test)]
mod tests {
    use crate::robot_scanner::scan_robot;
    use crate::test_helpers::robot_token;
    use crate::token::RobotTokenType;

    #[test]
    fn test_empty_input() {
        assert!(scan_robot("").is_empty());
        assert!(scan_robot("\n\n").is_empty());
    }

    #[test]
    fn test_declaration_and_commands() {
        let tokens = scan_robot("Robot r1\nr1.iniciar()\nr1.velocidad=50");
        assert_eq!(
            tokens,
            vec![
                robot_token(RobotTokenType::RobotKeyword, "Robot", 1, 1),
                robot_token(RobotTokenType::Identifier, "r1", 1, 7),
                robot_token(RobotTokenType::Identifier, "r1", 2, 1),
                robot_token(RobotTokenType::Dot, ".", 2, 3),
                robot_token(RobotTokenType::Action, "iniciar", 2, 4),
                robot_token(RobotTokenType::ParenOpen, "(", 2, 11),
                robot_token(RobotTokenType::ParenClose, ")", 2, 12),
                robot_token(RobotTokenType::Identifier, "r1", 3, 1),
                robot_token(RobotTokenType::Dot, ".", 3, 3),
                robot_token(RobotTokenType::Method, "velocidad", 3, 4),
                robot_token(RobotTokenType::Equals, "=", 3, 13),
                robot_token(RobotTokenType::Number, "50", 3, 14),
            ]
        );
        // numbers are the only tokens with a value
        assert_eq!(tokens[11].value, Some("50".to_string()));
        assert!(tokens[..11].iter().all(|token| token.value.is_none()));
    }

    #[test]
    fn test_robot_keyword_only_at_line_start() {
        let tokens = scan_robot("r1 Robot");
        assert_eq!(
            tokens,
            vec![
                robot_token(RobotTokenType::Identifier, "r1", 1, 1),
                robot_token(RobotTokenType::Identifier, "Robot", 1, 4),
            ]
        );

        // leading whitespace moves the cursor off column 0
        let tokens = scan_robot("  Robot r1");
        assert_eq!(tokens[0], robot_token(RobotTokenType::Identifier, "Robot", 1, 3));
    }

    #[test]
    fn test_robot_keyword_ignores_case_and_keeps_fixed_lexeme() {
        let tokens = scan_robot("ROBOTarm");
        assert_eq!(
            tokens,
            vec![
                robot_token(RobotTokenType::RobotKeyword, "Robot", 1, 1),
                robot_token(RobotTokenType::Identifier, "arm", 1, 6),
            ]
        );
    }

    #[test]
    fn test_short_line_is_not_keyword() {
        let tokens = scan_robot("Rob");
        assert_eq!(tokens, vec![robot_token(RobotTokenType::Identifier, "Rob", 1, 1)]);
    }

    #[test]
    fn test_actions_and_methods() {
        let tokens = scan_robot("r.cerrarGarra r.abrirGarra r.finalizar r.base r.pinza_2");
        let types: Vec<RobotTokenType> = tokens
            .iter()
            .filter(|token| token.r#type != RobotTokenType::Identifier)
            .filter(|token| token.r#type != RobotTokenType::Dot)
            .map(|token| token.r#type)
            .collect();
        assert_eq!(
            types,
            vec![
                RobotTokenType::Action,
                RobotTokenType::Action,
                RobotTokenType::Action,
                RobotTokenType::Method,
                RobotTokenType::Method,
            ]
        );
        assert_eq!(tokens.last().unwrap().lexeme, "pinza_2");
    }

    #[test]
    fn test_dot_followed_by_non_letter() {
        let tokens = scan_robot("r1._x .5");
        assert_eq!(
            tokens,
            vec![
                robot_token(RobotTokenType::Identifier, "r1", 1, 1),
                robot_token(RobotTokenType::Dot, ".", 1, 3),
                robot_token(RobotTokenType::Identifier, "_x", 1, 4),
                robot_token(RobotTokenType::Dot, ".", 1, 7),
                robot_token(RobotTokenType::Number, "5", 1, 8),
            ]
        );
    }

    #[test]
    fn test_braces_and_unknown_characters() {
        let tokens = scan_robot("{ r1.garra=90; }\r\n#");
        assert_eq!(
            tokens,
            vec![
                robot_token(RobotTokenType::BraceOpen, "{", 1, 1),
                robot_token(RobotTokenType::Identifier, "r1", 1, 3),
                robot_token(RobotTokenType::Dot, ".", 1, 5),
                robot_token(RobotTokenType::Method, "garra", 1, 6),
                robot_token(RobotTokenType::Equals, "=", 1, 11),
                robot_token(RobotTokenType::Number, "90", 1, 12),
                robot_token(RobotTokenType::Unknown, ";", 1, 14),
                robot_token(RobotTokenType::BraceClose, "}", 1, 16),
                robot_token(RobotTokenType::Unknown, "#", 2, 1),
            ]
        );
    }

    #[test]
    fn test_non_ascii_identifier_columns_count_characters() {
        let tokens = scan_robot("año ñ");
        assert_eq!(
            tokens,
            vec![
                robot_token(RobotTokenType::Identifier, "año", 1, 1),
                robot_token(RobotTokenType::Identifier, "ñ", 1, 5),
            ]
        );
    }

    #[test]
    fn test_numbers_in_other_scripts() {
        let tokens = scan_robot("r1.base=٣٠");
        assert_eq!(
            tokens[4],
            robot_token(RobotTokenType::Number, "٣٠", 1, 9)
        );
        assert_eq!(tokens[4].value, Some("٣٠".to_string()));
    }

    #[test]
    fn test_non_breaking_space_is_unknown() {
        let tokens = scan_robot("r1\u{A0}r2");
        assert_eq!(
            tokens,
            vec![
                robot_token(RobotTokenType::Identifier, "r1", 1, 1),
                robot_token(RobotTokenType::Unknown, "\u{A0}", 1, 3),
                robot_token(RobotTokenType::Identifier, "r2", 1, 4),
            ]
        );
    }

    #[test]
    fn test_lexemes_cover_non_whitespace_input() {
        let source = "Robot r1\r\n  r1.base = 10 ; # ()\n{ r2.garra=9 }\nrobotx.9x";
        let joined: String = scan_robot(source)
            .into_iter()
            .map(|token| token.lexeme)
            .collect();
        let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        // the keyword at the start of a line is always spelled `Robot`, whatever its case
        // in the source, so only its first letter differs here
        assert_eq!(joined, expected.replacen("robotx", "Robotx", 1));
    }

    #[test]
    fn test_scanning_is_idempotent() {
        let source = "Robot r1\nr1.base=180\nr1.cerrarGarra()";
        assert_eq!(scan_robot(source), scan_robot(source));
    }
}

// Character predicates shared by both scanners.

/// Whitespace as the robot and Java analyzers always treated it: the non-breaking spaces and
/// NEL are not whitespace, the ASCII information separators are.
pub fn is_whitespace(c: &char) -> bool {
    match c {
        '\u{1C}'..='\u{1F}' => true,
        '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}

/// First code point of every run of ten Unicode decimal digits (general category Nd).
const DECIMAL_DIGIT_ZEROS: [u32; 66] = [
    0x30, 0x660, 0x6F0, 0x7C0, 0x966, 0x9E6, 0xA66, 0xAE6, 0xB66, 0xBE6, 0xC66, 0xCE6, 0xD66,
    0xDE6, 0xE50, 0xED0, 0xF20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90,
    0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0,
    0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0,
    0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x16A60, 0x16AC0,
    0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Decimal digits in any script. Fractions, roman numerals and superscripts are not digits.
pub fn is_digit(c: &char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let code = *c as u32;
    match DECIMAL_DIGIT_ZEROS.partition_point(|zero| *zero <= code) {
        0 => false,
        run => code - DECIMAL_DIGIT_ZEROS[run - 1] < 10,
    }
}

pub fn is_letter(c: &char) -> bool {
    c.is_alphabetic()
}

pub fn is_letter_or_digit_or_underscore(c: &char) -> bool {
    is_letter(c) || is_digit(c) || *c == '_'
}

pub fn is_operator_start(c: &char) -> bool {
    match c {
        '+' | '-' | '*' | '/' | '%' | '=' | '>' | '<' | '!' | '&' | '|' | '^' | '~' | '?' => true,
        _ => false,
    }
}

pub fn is_delimiter(c: &char) -> bool {
    match c {
        '(' | ')' | '{' | '}' | '[' | ']' | ';' | ',' | '.' | ':' => true,
        _ => false,
    }
}

/// Two-character operators. There are no three-character forms: `<<=` scans as `<<` then `=`.
pub const COMPOUND_OPERATORS: [&str; 18] = [
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "<<", ">>", "&=",
    "|=", "^=",
];

pub fn is_compound_operator(first: char, second: char) -> bool {
    COMPOUND_OPERATORS.iter().any(|op| {
        let mut chars = op.chars();
        chars.next() == Some(first) && chars.next() == Some(second)
    })
}

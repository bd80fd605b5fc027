use std::io::{BufRead, Lines};

/// Collects prompt lines into one source until an empty line is entered.
/// Both languages are line based enough that a blank line is a natural "run it" signal,
/// and an open block comment or brace can span as many lines as needed before that.
pub struct MultilineInput<T: BufRead> {
    lines: Lines<T>,
}
impl<T: BufRead> MultilineInput<T> {
    pub fn new(lines: Lines<T>) -> MultilineInput<T> {
        MultilineInput { lines }
    }
}

impl<T: BufRead> Iterator for MultilineInput<T> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current_input: Vec<String> = vec![];
        loop {
            let line = match self.lines.next() {
                // stdin closed: run whatever was typed, like python does on CTRL+D
                None if current_input.is_empty() => return None,
                None => return Some(Ok(current_input.join("\n"))),
                Some(Err(err)) => return Some(Err(err)),
                Some(Ok(line)) => line,
            };

            if line.is_empty() {
                if current_input.is_empty() {
                    continue;
                }
                return Some(Ok(current_input.join("\n")));
            }
            current_input.push(line);
        }
    }
}

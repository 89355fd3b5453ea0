use annolint_api::{Position, Range, TextRange};

/// Maps byte offsets to editor positions (zero-based line, UTF-16 column) and back.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i + 1);
                }
                _ => {}
            }
            i += 1;
        }
        Self {
            line_starts,
            len: text.len(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of `offset`. Offsets past the end clamp to the end of the text.
    pub fn position_of(&self, text: &str, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let character: usize = text
            .get(line_start..offset)
            .unwrap_or("")
            .chars()
            .map(char::len_utf16)
            .sum();
        Position::new(line as u32, character as u32)
    }

    /// Byte offset of `position`. Columns past the end of a line clamp to the
    /// line end; lines past the end of the text yield `None`.
    pub fn offset_of(&self, text: &str, position: Position) -> Option<usize> {
        let line = position.line as usize;
        let line_start = *self.line_starts.get(line)?;
        let line_end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.len);
        let line_text = text.get(line_start..line_end)?;

        let mut curr_utf16 = 0usize;
        let mut curr_byte = 0usize;
        for c in line_text.chars() {
            if curr_utf16 >= position.character as usize || c == '\n' || c == '\r' {
                break;
            }
            curr_utf16 += c.len_utf16();
            curr_byte += c.len_utf8();
        }
        Some(line_start + curr_byte)
    }

    pub fn range_of(&self, text: &str, range: TextRange) -> Range {
        Range::new(
            self.position_of(text, range.start),
            self.position_of(text, range.end),
        )
    }

    pub fn text_range_of(&self, text: &str, range: Range) -> Option<TextRange> {
        let start = self.offset_of(text, range.start)?;
        let end = self.offset_of(text, range.end)?;
        Some(TextRange::new(start.min(end), end.max(start)))
    }
}

/// Line indentation (spaces and tabs) of the line containing `offset`.
pub fn indentation_at(text: &str, offset: usize) -> &str {
    let line_start = text[..offset.min(text.len())]
        .rfind('\n')
        .map(|p| p + 1)
        .unwrap_or(0);
    let rest = &text[line_start..];
    let width = rest
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(rest.len());
    &rest[..width]
}

/// End offset of the horizontal whitespace following `offset`.
pub fn skip_spaces(text: &str, offset: usize) -> usize {
    let rest = &text[offset..];
    offset
        + rest
            .find(|c: char| c != ' ' && c != '\t')
            .unwrap_or(rest.len())
}

/// End offset of all whitespace (newlines included) following `offset`.
pub fn skip_whitespace(text: &str, offset: usize) -> usize {
    let rest = &text[offset..];
    offset + rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_count_utf16_units() {
        let text = "class A {\n  String s = \"é😀\";\n}\n";
        let index = LineIndex::new(text);
        let quote = text.find('"').unwrap();
        let pos = index.position_of(text, quote);
        assert_eq!(pos, Position::new(1, 13));

        let closing = text.rfind('"').unwrap();
        let pos = index.position_of(text, closing);
        // é is one UTF-16 unit, the emoji two
        assert_eq!(pos, Position::new(1, 17));
        assert_eq!(index.offset_of(text, pos), Some(closing));
    }

    #[test]
    fn crlf_lines() {
        let text = "a\r\nbc\r\nd";
        let index = LineIndex::new(text);
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.position_of(text, 3), Position::new(1, 0));
        assert_eq!(index.offset_of(text, Position::new(2, 0)), Some(7));
        assert_eq!(index.offset_of(text, Position::new(1, 99)), Some(5));
        assert_eq!(index.offset_of(text, Position::new(9, 0)), None);
    }

    #[test]
    fn indentation_of_member_line() {
        let text = "class A {\n    int x;\n}";
        let x = text.find("int").unwrap();
        assert_eq!(indentation_at(text, x), "    ");
        assert_eq!(skip_spaces("a   b", 1), 4);
        assert_eq!(skip_whitespace("a \n  b", 1), 5);
    }
}

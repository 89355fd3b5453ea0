use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Half-open byte range `[start, end)` into a source text.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "inverted range {start}..{end}");
        Self { start, end }
    }

    pub fn empty(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// `true` when `offset` lies inside the range. The end offset is included so a
    /// cursor placed right after a token still belongs to it.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    pub fn contains_range(&self, other: TextRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Zero-length ranges are treated as points, which is what a cursor-only
    /// code action request looks like.
    pub fn intersects(&self, other: TextRange) -> bool {
        if self.is_empty() {
            return other.start <= self.start && self.start <= other.end;
        }
        if other.is_empty() {
            return self.start <= other.start && other.start <= self.end;
        }
        self.start < other.end && other.start < self.end
    }
}

/// Zero-based line and UTF-16 column, the way editors count.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, position: Position) -> bool {
        let line = position.line;
        let col = position.character;
        if line < self.start.line || line > self.end.line {
            return false;
        }
        if line == self.start.line && col < self.start.character {
            return false;
        }
        if line == self.end.line && col > self.end.character {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_ranges_intersect_when_inside() {
        let decl = TextRange::new(10, 20);
        assert!(decl.intersects(TextRange::empty(10)));
        assert!(decl.intersects(TextRange::empty(20)));
        assert!(!decl.intersects(TextRange::empty(21)));
        assert!(!decl.intersects(TextRange::new(20, 25)));
        assert!(decl.intersects(TextRange::new(19, 25)));
    }

    #[test]
    fn line_range_contains_is_inclusive() {
        let range = Range::new(Position::new(1, 4), Position::new(3, 2));
        assert!(range.contains(Position::new(1, 4)));
        assert!(range.contains(Position::new(2, 0)));
        assert!(range.contains(Position::new(3, 2)));
        assert!(!range.contains(Position::new(1, 3)));
        assert!(!range.contains(Position::new(3, 3)));
    }
}

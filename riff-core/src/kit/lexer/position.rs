//! 源代码位置追踪
//!
//! token 区间是 UTF-8 字节偏移，这里换算成：
//! - line/column: 人类可读的显示（1-based）
//! - utf16_column: 按 UTF-16 单元寻址的编辑器宿主（0-based）

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
    /// 行内UTF-16偏移，0-based
    pub utf16_column: usize,
}

impl SourcePosition {
    /// 文件起始位置
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            byte_offset: 0,
            utf16_column: 0,
        }
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            self.utf16_column = 0;
        } else {
            self.column += 1;
            self.utf16_column += c.len_utf16();
        }
        self.byte_offset += c.len_utf8();
    }
}

/// 行首偏移索引
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(input: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(input.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 字节偏移对应的位置
    ///
    /// `offset` 必须落在字符边界上，超出输入长度时按输入末尾计算
    pub fn position(&self, input: &str, offset: usize) -> SourcePosition {
        let offset = offset.min(input.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];

        let mut pos = SourcePosition {
            line: line + 1,
            byte_offset: line_start,
            ..SourcePosition::start()
        };
        for c in input[line_start..offset].chars() {
            pos.advance(c);
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_start() {
        let pos = SourcePosition::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.byte_offset, 0);
        assert_eq!(pos.utf16_column, 0);
    }

    #[test]
    fn test_position_advance_newline() {
        let mut pos = SourcePosition::start();
        pos.advance('a');
        pos.advance('\n');
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.byte_offset, 2);
    }

    #[test]
    fn test_line_index() {
        let input = "x = 1\ny = 2\n";
        let index = LineIndex::new(input);
        assert_eq!(index.line_count(), 3);

        let pos = index.position(input, 6);
        assert_eq!((pos.line, pos.column), (2, 1));

        let pos = index.position(input, 10);
        assert_eq!((pos.line, pos.column, pos.byte_offset), (2, 5, 10));

        let end = index.position(input, 100);
        assert_eq!((end.line, end.column), (3, 1));

        assert_eq!(index.position(input, 0), SourcePosition::start());
        assert_eq!(index.position("", 0), SourcePosition::start());
    }

    #[test]
    fn test_line_index_utf16() {
        // Emoji：4字节UTF-8，2个UTF-16单元
        let input = "s = \"🎉\" + x";
        let index = LineIndex::new(input);
        let offset = input.find('+').unwrap();
        let pos = index.position(input, offset);
        // 8 个字符在前，其中 emoji 占 2 个 UTF-16 单元
        assert_eq!(pos.column, 9);
        assert_eq!(pos.utf16_column, 9);
        assert_eq!(pos.byte_offset, offset);
    }
}

//! Byte offset to line/column translation.

use birch_ir::Position;

/// Incremental offset-to-position mapper.
///
/// Tokens arrive in source order, so each lookup only scans the bytes since
/// the previous one. Columns count characters, not bytes.
pub(crate) struct LineTracker<'a> {
    source: &'a str,
    offset: usize,
    line: u32,
    line_start: usize,
}

impl<'a> LineTracker<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        LineTracker {
            source,
            offset: 0,
            line: 1,
            line_start: 0,
        }
    }

    /// Position of `offset`, which must lie on a char boundary.
    pub(crate) fn position(&mut self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        if offset < self.offset {
            // Out-of-order lookup; rescan from the top.
            *self = LineTracker::new(self.source);
        }

        let scanned = &self.source.as_bytes()[self.offset..offset];
        for (i, byte) in scanned.iter().enumerate() {
            if *byte == b'\n' {
                self.line += 1;
                self.line_start = self.offset + i + 1;
            }
        }
        self.offset = offset;

        let column = self
            .source
            .get(self.line_start..offset)
            .map_or(0, |prefix| prefix.chars().count())
            + 1;
        Position::new(self.line, to_u32(column), to_u32(offset))
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

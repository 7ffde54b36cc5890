//! Line-oriented input and output

use std::io::{self, BufRead, Write};

/// Read every non-blank line from `reader`.
///
/// A trailing `\r` is dropped so CRLF input behaves like LF input.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        if line.is_empty() {
            continue;
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Write `lines` to `writer`, one per line, then flush.
pub fn write_lines<W: Write, S: AsRef<str>>(mut writer: W, lines: &[S]) -> io::Result<()> {
    let mut buf = String::new();
    for line in lines {
        buf.push_str(line.as_ref());
        buf.push('\n');
    }
    writer.write_all(buf.as_bytes())?;
    writer.flush()
}

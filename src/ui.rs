//! Output sink abstraction and the console implementation

use std::io::Write;

const INDENT: &str = "    ";
const DIVIDER: &str = "____________________________________________________________";
const ERROR_PREFIX: &str = "OOPS!!! ";

/// Destination for everything the task list reports to the user
///
/// Writes are fire-and-forget: a sink never hands anything back to the
/// caller.
pub trait OutputSink {
    fn write_line(&mut self, text: &str);

    fn write_lines(&mut self, lines: &[String]) {
        for line in lines {
            self.write_line(line);
        }
    }

    fn write_error(&mut self, text: &str);
}

/// Console sink: indents every line and frames each response with dividers
pub struct TextUi<W: Write> {
    out: W,
}

impl<W: Write> TextUi<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn divider(&mut self) {
        self.emit(DIVIDER);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        // Console write failures are never fatal
        if let Err(e) = writeln!(self.out, "{}{}", INDENT, text) {
            tracing::debug!("console write failed: {}", e);
        }
    }
}

impl<W: Write> OutputSink for TextUi<W> {
    fn write_line(&mut self, text: &str) {
        self.emit(text);
    }

    fn write_error(&mut self, text: &str) {
        self.emit(&format!("{}{}", ERROR_PREFIX, text));
    }
}

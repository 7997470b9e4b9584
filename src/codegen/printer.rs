//! Indentation-aware output buffers for header emission
//!
//! A class emission writes into three streams: the main class body, a
//! deferred array-initializer stream spliced in after the class closes, and
//! an ordered list of pending `#define` lines appended last. The active
//! stream is selected by name rather than by swapping printer handles, so
//! the deferred-emission contract stays explicit.

use crate::consts::INDENT_WIDTH;

/// A single indentation-aware text stream
#[derive(Debug)]
pub struct SourcePrinter {
    indent_level: usize,
    at_line_start: bool,
    buf: String,
}

impl SourcePrinter {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            at_line_start: true,
            buf: String::new(),
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn unindent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Print text, indenting first when at the start of a line
    pub fn print(&mut self, text: &str) {
        if self.at_line_start {
            for _ in 0..self.indent_level * INDENT_WIDTH {
                self.buf.push(' ');
            }
            self.at_line_start = false;
        }
        self.buf.push_str(text);
    }

    /// Print text followed by a newline
    pub fn print_ln(&mut self, text: &str) {
        self.print(text);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.buf.push('\n');
        self.at_line_start = true;
    }

    pub fn source(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.indent_level = 0;
        self.at_line_start = true;
        self.buf.clear();
    }
}

impl Default for SourcePrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Names of the streams a class emission can write into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Main,
    ArrayInit,
}

/// The set of per-class output buffers
#[derive(Debug)]
pub struct OutputBuffers {
    main: SourcePrinter,
    array_init: SourcePrinter,
    defines: Vec<String>,
    active: Stream,
}

impl OutputBuffers {
    pub fn new() -> Self {
        Self {
            main: SourcePrinter::new(),
            array_init: SourcePrinter::new(),
            defines: Vec::new(),
            active: Stream::Main,
        }
    }

    /// Select the stream subsequent `printer()` calls write to
    pub fn select(&mut self, stream: Stream) {
        self.active = stream;
    }

    pub fn active(&self) -> Stream {
        self.active
    }

    /// The currently selected stream
    pub fn printer(&mut self) -> &mut SourcePrinter {
        match self.active {
            Stream::Main => &mut self.main,
            Stream::ArrayInit => &mut self.array_init,
        }
    }

    /// The main stream, regardless of selection
    pub fn main(&mut self) -> &mut SourcePrinter {
        &mut self.main
    }

    pub fn push_define(&mut self, line: String) {
        self.defines.push(line);
    }

    pub fn defines(&self) -> &[String] {
        &self.defines
    }

    pub fn main_source(&self) -> &str {
        self.main.source()
    }

    pub fn array_init_source(&self) -> &str {
        self.array_init.source()
    }

    /// Clear all three streams and reselect the main stream
    pub fn reset(&mut self) {
        self.main.clear();
        self.array_init.clear();
        self.defines.clear();
        self.active = Stream::Main;
    }
}

impl Default for OutputBuffers {
    fn default() -> Self {
        Self::new()
    }
}

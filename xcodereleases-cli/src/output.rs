//! Various utilities to ease outputting human or machine readable text.

use std::io::{IsTerminal, StdoutLock, Write};
use std::fmt::{Display, Write as _};
use std::{env, io};


/// An abstraction for outputting to any format on stdout, the goal is to provide an
/// interface for outputting at the same time both human readable and machine outputs.
#[derive(Debug)]
pub struct Output {
    /// Mode-specific data.
    mode: OutputMode,
    /// Are color escape code supported on stdout.
    escape_color_cap: bool,
}

#[derive(Debug)]
enum OutputMode {
    Human {
        log_level: LogLevel,
    },
    TabSeparated {  },
}

impl Output {

    pub fn human(log_level: LogLevel) -> Self {
        Self::new(OutputMode::Human { log_level })
    }

    pub fn tab_separated() -> Self {
        Self::new(OutputMode::TabSeparated {  })
    }

    fn new(mode: OutputMode) -> Self {

        let term_dumb = !io::stdout().is_terminal() || (cfg!(unix) && env::var_os("TERM").map(|term| term == "dumb").unwrap_or_default());
        let no_color = env::var_os("NO_COLOR").map(|s| !s.is_empty()).unwrap_or_default();

        Self {
            mode,
            escape_color_cap: !term_dumb && !no_color,
        }
    }

    /// Log an information with a simple code referencing it, the code is only visible
    /// in machine-readable outputs.
    pub fn log<D: Display>(&mut self, code: D) -> Log<'_> {

        let mut line = String::new();
        if let OutputMode::TabSeparated {  } = self.mode {
            write!(line, "{code}").unwrap();
        }

        Log {
            output: self,
            line,
            visible: false,
        }

    }

    /// Enter table mode, the table is flushed when dropped.
    pub fn table(&mut self, columns: usize) -> TableOutput<'_> {
        assert_ne!(columns, 0);
        TableOutput {
            output: self,
            writer: io::stdout().lock(),
            columns,
            column: 0,
            buffer: String::new(),
            cells: Vec::new(),
            separators: Vec::new(),
        }
    }

}

/// A handle to a log line, allows adding more context to the log.
#[derive(Debug)]
pub struct Log<'a> {
    /// Exclusive access to output.
    output: &'a mut Output,
    /// Line buffer that will be printed when the log is dropped, for machine-readable
    /// output only.
    line: String,
    /// For human-readable only, true if the last human-readable line was printed, used
    /// to know if additional lines should be printed.
    visible: bool,
}

impl Log<'_> {

    /// Append an argument for machine-readable output.
    pub fn arg<D: Display>(&mut self, arg: D) -> &mut Self {
        if let OutputMode::TabSeparated {  } = self.output.mode {
            self.line.push('\t');
            escape_into(&mut self.line, arg);
        }
        self
    }

    /// Associate a human-readable message to this with an associated level, level is
    /// only relevant here because machine-readable outputs are always verbose.
    pub fn line<D: Display>(&mut self, level: LogLevel, message: D) -> &mut Self {
        if let OutputMode::Human { log_level } = self.output.mode {

            if level == LogLevel::Additional {
                if self.visible {
                    println!("         {message}");
                }
                return self;
            }

            self.visible = level >= log_level;
            if self.visible {

                let (name, color) = match level {
                    LogLevel::Info => ("INFO", "\x1b[34m"),
                    LogLevel::Pending => ("..", ""),
                    LogLevel::Success => ("OK", "\x1b[92m"),
                    LogLevel::Warning => ("WARN", "\x1b[33m"),
                    LogLevel::Error => ("FAILED", "\x1b[31m"),
                    LogLevel::Additional => unreachable!(),
                };

                if !self.output.escape_color_cap || color.is_empty() {
                    println!("[{name:^6}] {message}");
                } else {
                    println!("[{color}{name:^6}\x1b[0m] {message}");
                }

            }

        }
        self
    }

    #[inline]
    pub fn info<D: Display>(&mut self, message: D) -> &mut Self {
        self.line(LogLevel::Info, message)
    }

    #[inline]
    pub fn pending<D: Display>(&mut self, message: D) -> &mut Self {
        self.line(LogLevel::Pending, message)
    }

    #[inline]
    pub fn success<D: Display>(&mut self, message: D) -> &mut Self {
        self.line(LogLevel::Success, message)
    }

    #[inline]
    pub fn warning<D: Display>(&mut self, message: D) -> &mut Self {
        self.line(LogLevel::Warning, message)
    }

    #[inline]
    pub fn error<D: Display>(&mut self, message: D) -> &mut Self {
        self.line(LogLevel::Error, message)
    }

    /// Additional line of details, only printed if the previous line was printed.
    #[inline]
    pub fn additional<D: Display>(&mut self, message: D) -> &mut Self {
        self.line(LogLevel::Additional, message)
    }

}

/// Drop implementation to automatically flush the machine-readable line.
impl Drop for Log<'_> {
    fn drop(&mut self) {
        if let OutputMode::TabSeparated {  } = self.output.mode {
            let mut lock = io::stdout().lock();
            let _ = lock.write_all(self.line.as_bytes());
            let _ = lock.write_all(b"\n");
            let _ = lock.flush();
        }
    }
}

/// Level for a human-readable log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// This log is something indicative, discarded when not in verbose mode.
    Info,
    /// This log indicate something is in progress and the definitive state is unknown.
    Pending,
    /// This log indicate a success.
    Success,
    /// This log is a warning.
    Warning,
    /// This log is an error.
    Error,
    /// Details of the previous line, printed only if it has been printed.
    Additional,
}

/// The output table mode, used to build a table.
#[derive(Debug)]
pub struct TableOutput<'a> {
    /// Exclusive access to output.
    output: &'a mut Output,
    /// Locked stdout.
    writer: StdoutLock<'static>,
    /// Number of columns.
    columns: usize,
    /// The current column being written.
    column: usize,
    /// This buffer contains all rendered cells. For human-readable only.
    buffer: String,
    /// For each cell, ordered by row and then by column, containing the index where the
    /// cell's content ends in the shared buffer. For human-readable only.
    cells: Vec<usize>,
    /// Number of cells written before each separator. For human-readable only.
    separators: Vec<usize>,
}

impl TableOutput<'_> {

    /// Fill the next cell on the right. The given content is considered "raw" and
    /// unformatted, it will be displayed by default, as-is in all output modes. To
    /// format the cell for human-readable output, you can use the returned handle.
    pub fn cell<D: Display>(&mut self, content: D) -> Cell<'_> {

        match self.output.mode {
            OutputMode::Human { .. } => {
                write!(self.buffer, "{content}").unwrap();
                self.cells.push(self.buffer.len());
            }
            OutputMode::TabSeparated {  } => {
                let mut line = String::new();
                if self.column == 0 {
                    line.push_str("row");
                }
                line.push('\t');
                escape_into(&mut line, content);
                let _ = self.writer.write_all(line.as_bytes());
            }
        }

        self.column += 1;
        if self.column == self.columns {
            self.column = 0;
            if let OutputMode::TabSeparated {  } = self.output.mode {
                let _ = self.writer.write_all(b"\n");
            }
        }

        Cell {
            output: &mut *self.output,
            buffer: &mut self.buffer,
            cells: &mut self.cells,
        }

    }

    /// Force going to the next row, event if not all cells have been written in the
    /// current line.
    pub fn next_row(&mut self) {
        while self.column != 0 {
            self.cell("");
        }
    }

    /// Insert a separator line, only relevant to human-readable output, this goes to the
    /// next row if needed.
    pub fn sep(&mut self) {
        self.next_row();
        if let OutputMode::Human { .. } = self.output.mode {
            self.separators.push(self.cells.len());
        }
    }

}

impl Drop for TableOutput<'_> {
    fn drop(&mut self) {

        self.next_row();

        if let OutputMode::Human { .. } = self.output.mode {

            let mut columns_width = vec![0usize; self.columns];

            // Initially compute maximum width of each column.
            let mut last_idx = 0;
            for (i, idx) in self.cells.iter().copied().enumerate() {
                let column = i % self.columns;
                let width = self.buffer[last_idx..idx].chars().count();
                columns_width[column] = columns_width[column].max(width);
                last_idx = idx;
            }

            let mut separators = self.separators.iter().copied().peekable();

            // Reset and restart again to print.
            last_idx = 0;
            for (i, idx) in self.cells.iter().copied().enumerate() {

                let column = i % self.columns;

                if column == 0 {
                    while separators.next_if_eq(&i).is_some() {
                        let mut line = String::new();
                        for (column, &width) in columns_width.iter().enumerate() {
                            if column != 0 {
                                line.push_str("─┼─");
                            }
                            line.extend(std::iter::repeat_n('─', width));
                        }
                        let _ = writeln!(self.writer, "{line}");
                    }
                } else {
                    let _ = write!(self.writer, " │ ");
                }

                let content = &self.buffer[last_idx..idx];
                last_idx = idx;

                let width = columns_width[column];
                let _ = write!(self.writer, "{content:width$}");

                if column + 1 == self.columns {
                    let _ = self.writer.write_all(b"\n");
                }

            }

        }

        let _ = self.writer.flush();

    }
}

/// A handle for customizing metadata and human-readable format.
#[derive(Debug)]
pub struct Cell<'a> {
    output: &'a mut Output,
    buffer: &'a mut String,
    cells: &'a mut Vec<usize>,
}

impl Cell<'_> {

    /// Format this cell differently from the raw data, only for human-readable.
    /// Calling this twice will overwrite the first format.
    pub fn format<D: Display>(&mut self, message: D) -> &mut Self {

        if let OutputMode::Human { .. } = self.output.mode {
            // We pop the last cell because it can, and should only be this one.
            self.cells.pop();
            // Truncate the old cell's content.
            self.buffer.truncate(self.cells.last().copied().unwrap_or(0));
            // Rewrite the content.
            write!(self.buffer, "{message}").unwrap();
            self.cells.push(self.buffer.len());
        }

        self

    }

}

/// Write the given value into the machine-readable line, escaping line returns and
/// tabs.
fn escape_into<D: Display>(line: &mut String, value: D) {
    let start = line.len();
    write!(line, "{value}").unwrap();
    if line[start..].contains(['\n', '\t']) {
        let escaped = line[start..].replace('\n', "\\n").replace('\t', "\\t");
        line.truncate(start);
        line.push_str(&escaped);
    }
}

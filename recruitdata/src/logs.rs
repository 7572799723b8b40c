//! Pipeline progress logging.
//!
//! Steps report through four levels (info, success, warning, error). Entries
//! are emitted as `tracing` events under the `recruitdata` target, so the
//! subscriber installed by the binary (or a test) decides where they go.

/// Log level of a pipeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth, rendered as leading spaces.
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Message with indentation and a level marker.
    pub fn render(&self) -> String {
        let marker = match self.level {
            LogLevel::Info => "",
            LogLevel::Success => "✓ ",
            LogLevel::Warning => "⚠ ",
            LogLevel::Error => "✗ ",
        };
        format!("{}{}{}", "  ".repeat(self.indent as usize), marker, self.message)
    }

    /// Emit this entry as a tracing event.
    pub fn emit(&self) {
        let line = self.render();
        match self.level {
            LogLevel::Info | LogLevel::Success => tracing::info!(target: "recruitdata", "{}", line),
            LogLevel::Warning => tracing::warn!(target: "recruitdata", "{}", line),
            LogLevel::Error => tracing::error!(target: "recruitdata", "{}", line),
        }
    }
}

pub fn log_info(msg: impl Into<String>) {
    LogEntry::info(msg).emit();
}

pub fn log_success(msg: impl Into<String>) {
    LogEntry::success(msg).emit();
}

pub fn log_warning(msg: impl Into<String>) {
    LogEntry::warning(msg).emit();
}

pub fn log_error(msg: impl Into<String>) {
    LogEntry::error(msg).emit();
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LogEntry::info(msg).with_indent(indent).emit();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(LogEntry::info("Reading CSV").render(), "Reading CSV");
        assert_eq!(LogEntry::success("done").with_indent(1).render(), "  ✓ done");
        assert_eq!(LogEntry::error("boom").render(), "✗ boom");
        assert_eq!(LogEntry::warning("careful").with_indent(2).render(), "    ⚠ careful");
    }
}

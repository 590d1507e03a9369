//! Logging adapter over the `log` facade.
//!
//! [`MarkupLogger`] runs every record's message through the markup engine
//! before writing it, so log calls can carry tags:
//!
//! ```no_run
//! ansimark::logger::init(log::LevelFilter::Info).unwrap();
//! log::info!("<g>listening</g> on <b>:8080</b>");
//! ```

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::markup::AnsiMarkup;

/// A `log::Log` implementation that renders markup in record messages and
/// writes them to stderr.
pub struct MarkupLogger {
    markup: AnsiMarkup,
    level: LevelFilter,
}

impl MarkupLogger {
    pub fn new(markup: AnsiMarkup, level: LevelFilter) -> Self {
        Self { markup, level }
    }

    /// Renders one message. A message whose markup does not parse is logged
    /// as-is; logging never surfaces tag errors.
    fn render(&self, message: &str) -> String {
        match self.markup.parse(message) {
            Ok(styled) => styled,
            Err(_) => message.to_string(),
        }
    }
}

impl Log for MarkupLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[{}] {}", record.level(), self.render(record.args().to_string().as_str()));
    }

    fn flush(&self) {}
}

/// Installs a [`MarkupLogger`] with the default engine as the global logger.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(MarkupLogger::new(AnsiMarkup::new(), level)))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_markup_in_messages() {
        let logger = MarkupLogger::new(AnsiMarkup::new(), LevelFilter::Debug);
        assert_eq!(logger.render("<b>1</b>"), "\x1b[1m1\x1b[0m");
    }

    #[test]
    fn falls_back_to_raw_message_on_tag_errors() {
        let logger = MarkupLogger::new(AnsiMarkup::new(), LevelFilter::Debug);
        assert_eq!(logger.render("<b>1</d>"), "<b>1</d>");
    }

    #[test]
    fn level_filter_applies() {
        let logger = MarkupLogger::new(AnsiMarkup::new(), LevelFilter::Warn);
        let info = Metadata::builder().level(log::Level::Info).build();
        let warn = Metadata::builder().level(log::Level::Warn).build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&warn));
    }
}

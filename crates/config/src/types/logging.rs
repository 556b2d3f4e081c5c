//! Logging configuration.
//!
//! Responsibilities:
//! - Describe the framework's logging filters, formatters, handlers, and loggers.
//! - Derive the `tracing` filter directive a binary should install by default.
//!
//! Does NOT handle:
//! - Installing a subscriber (binaries do that with `tracing-subscriber`).
//!
//! Invariants:
//! - The `mail_admins` handler only runs when debug is off.
//! - The `console` handler uses the `verbose` formatter.

use serde::Serialize;

/// Log severity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The equivalent `tracing` level directive.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Filters that gate a handler on the debug flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFilter {
    RequireDebugFalse,
    RequireDebugTrue,
}

impl LogFilter {
    fn passes(self, debug: bool) -> bool {
        match self {
            LogFilter::RequireDebugFalse => !debug,
            LogFilter::RequireDebugTrue => debug,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogFormatter {
    pub name: String,
    pub format: String,
}

/// Where a handler sends records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerSink {
    /// Standard error stream.
    Console,
    /// Email to the configured admins.
    MailAdmins,
}

impl HandlerSink {
    /// Dotted path of the framework handler class.
    pub fn class_path(self) -> &'static str {
        match self {
            HandlerSink::Console => "logging.StreamHandler",
            HandlerSink::MailAdmins => "django.utils.log.AdminEmailHandler",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogHandler {
    pub name: String,
    pub sink: HandlerSink,
    pub class: String,
    pub level: LogLevel,
    pub filters: Vec<LogFilter>,
    pub formatter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggerConfig {
    pub name: String,
    pub handlers: Vec<String>,
    pub level: LogLevel,
    pub propagate: bool,
}

/// The full logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggingConfig {
    pub debug: bool,
    pub disable_existing_loggers: bool,
    pub formatters: Vec<LogFormatter>,
    pub handlers: Vec<LogHandler>,
    pub loggers: Vec<LoggerConfig>,
}

/// Name of the logger that carries framework output.
pub const FRAMEWORK_LOGGER: &str = "django";
pub const VERBOSE_FORMATTER: &str = "verbose";
pub const CONSOLE_HANDLER: &str = "console";
pub const MAIL_ADMINS_HANDLER: &str = "mail_admins";

impl LoggingConfig {
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            disable_existing_loggers: false,
            formatters: vec![LogFormatter {
                name: VERBOSE_FORMATTER.to_string(),
                format: "%(levelname)s %(asctime)s %(module)s %(process)d %(thread)d %(message)s"
                    .to_string(),
            }],
            handlers: vec![
                LogHandler {
                    name: MAIL_ADMINS_HANDLER.to_string(),
                    sink: HandlerSink::MailAdmins,
                    class: HandlerSink::MailAdmins.class_path().to_string(),
                    level: LogLevel::Error,
                    filters: vec![LogFilter::RequireDebugFalse],
                    formatter: None,
                },
                LogHandler {
                    name: CONSOLE_HANDLER.to_string(),
                    sink: HandlerSink::Console,
                    class: HandlerSink::Console.class_path().to_string(),
                    level: LogLevel::Debug,
                    filters: Vec::new(),
                    formatter: Some(VERBOSE_FORMATTER.to_string()),
                },
            ],
            loggers: vec![
                LoggerConfig {
                    name: FRAMEWORK_LOGGER.to_string(),
                    handlers: vec![CONSOLE_HANDLER.to_string()],
                    level: LogLevel::Info,
                    propagate: true,
                },
                LoggerConfig {
                    name: "django.request".to_string(),
                    handlers: vec![MAIL_ADMINS_HANDLER.to_string()],
                    level: LogLevel::Info,
                    propagate: true,
                },
            ],
        }
    }

    pub fn handler(&self, name: &str) -> Option<&LogHandler> {
        self.handlers.iter().find(|h| h.name == name)
    }

    pub fn logger(&self, name: &str) -> Option<&LoggerConfig> {
        self.loggers.iter().find(|l| l.name == name)
    }

    /// Handlers whose filters pass for the current debug flag.
    pub fn active_handlers(&self) -> impl Iterator<Item = &LogHandler> {
        self.handlers
            .iter()
            .filter(|h| h.filters.iter().all(|f| f.passes(self.debug)))
    }

    /// Whether error reports are mailed to admins.
    pub fn mail_admins_active(&self) -> bool {
        self.active_handlers()
            .any(|h| h.sink == HandlerSink::MailAdmins)
    }

    /// Whether console output should carry thread and module details.
    pub fn console_verbose(&self) -> bool {
        self.handler(CONSOLE_HANDLER)
            .and_then(|h| h.formatter.as_deref())
            .is_some_and(|f| f == VERBOSE_FORMATTER)
    }

    /// Default `EnvFilter` directive: `debug` in debug mode, otherwise the
    /// framework logger's level.
    pub fn default_directive(&self) -> &'static str {
        if self.debug {
            return LogLevel::Debug.directive();
        }
        self.logger(FRAMEWORK_LOGGER)
            .map(|l| l.level)
            .unwrap_or(LogLevel::Info)
            .directive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_admins_only_without_debug() {
        assert!(LoggingConfig::new(false).mail_admins_active());
        assert!(!LoggingConfig::new(true).mail_admins_active());
    }

    #[test]
    fn test_console_always_active() {
        for debug in [true, false] {
            let config = LoggingConfig::new(debug);
            assert!(config.active_handlers().any(|h| h.sink == HandlerSink::Console));
            assert!(config.console_verbose());
        }
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(LoggingConfig::new(false).default_directive(), "info");
        assert_eq!(LoggingConfig::new(true).default_directive(), "debug");
    }

    #[test]
    fn test_request_logger_routes_to_mail_admins() {
        let config = LoggingConfig::new(false);
        let request = config.logger("django.request").unwrap();
        assert_eq!(request.handlers, vec!["mail_admins"]);
        assert_eq!(config.handler("mail_admins").unwrap().level, LogLevel::Error);
    }

    #[test]
    fn test_verbose_format_and_handler_classes() {
        let config = LoggingConfig::new(false);
        assert_eq!(
            config.formatters[0].format,
            "%(levelname)s %(asctime)s %(module)s %(process)d %(thread)d %(message)s"
        );
        assert_eq!(
            config.handler("mail_admins").unwrap().class,
            "django.utils.log.AdminEmailHandler"
        );
        assert_eq!(config.handler("console").unwrap().class, "logging.StreamHandler");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["handlers"][1]["class"], "logging.StreamHandler");
    }

    #[test]
    fn test_levels_serialize_uppercase() {
        let json = serde_json::to_value(LoggingConfig::new(false)).unwrap();
        assert_eq!(json["loggers"][0]["level"], "INFO");
        assert_eq!(json["handlers"][0]["filters"][0], "require_debug_false");
    }
}

use core::{fmt, str::FromStr};
use std::sync::Mutex;

use log::{Metadata, Record};

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Environment variable holding the level filter, e.g. `trace` or `warn`.
pub const LOG_LEVEL_ENV: &str = "ANSIMATH_LOG_LEVEL";

/// Install the stderr logger, honouring [`LOG_LEVEL_ENV`].
pub fn init() {
    let mut logger = MathLogger::new();
    let mut invalid = None;
    if let Ok(env) = std::env::var(LOG_LEVEL_ENV) {
        match log::LevelFilter::from_str(&env) {
            Ok(level) => {
                logger = logger.with_output(OutputBuilder::stderr().with_filter(level).build());
            }
            Err(_) => invalid = Some(env),
        }
    }
    if logger.enable().is_err() {
        log::error!("Logger already initialized");
    }
    if let Some(env) = invalid {
        log::warn!("ignoring invalid {LOG_LEVEL_ENV}={env:?}");
    }
}

/// An output that will be logged to.
pub struct Output {
    endpoint: Mutex<Box<dyn fmt::Write + Send + 'static>>,

    // specifies the maximum log level possible
    filter: log::LevelFilter,
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Output")
            .field("endpoint", &"opaque")
            .field("filter", &self.filter)
            .finish()
    }
}

impl Default for Output {
    fn default() -> Self {
        OutputBuilder::stderr().build()
    }
}

pub struct OutputBuilder {
    endpoint: Box<dyn fmt::Write + Send + 'static>,
    filter: Option<log::LevelFilter>,
}

impl OutputBuilder {
    pub fn stderr() -> Self {
        Self::with_endpoint(super::FileWriter::new(2))
    }

    pub fn with_endpoint<T>(endpoint: T) -> Self
    where
        T: fmt::Write + Send + 'static,
    {
        Self {
            endpoint: Box::new(endpoint),
            filter: None,
        }
    }
    pub fn with_filter(mut self, filter: log::LevelFilter) -> Self {
        self.filter = Some(filter);
        self
    }
    pub fn build(self) -> Output {
        Output {
            endpoint: Mutex::new(self.endpoint),
            filter: self.filter.unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

#[derive(Debug, Default)]
pub struct MathLogger {
    output: Output,
    min_filter: Option<log::LevelFilter>,
    max_filter: Option<log::LevelFilter>,
    max_level_in_use: Option<log::LevelFilter>,
    process_name: Option<String>,
}

impl MathLogger {
    pub fn new() -> Self {
        Self::default()
    }
    fn adjust_output_level(
        max_filter: Option<log::LevelFilter>,
        min_filter: Option<log::LevelFilter>,
        max_in_use: &mut Option<log::LevelFilter>,
        output: &mut Output,
    ) {
        if let Some(max) = max_filter {
            output.filter = core::cmp::max(output.filter, max);
        }
        if let Some(min) = min_filter {
            output.filter = core::cmp::min(output.filter, min);
        }
        match max_in_use {
            &mut Some(ref mut max) => *max = core::cmp::max(output.filter, *max),
            max @ &mut None => *max = Some(output.filter),
        }
    }
    pub fn with_output(mut self, mut output: Output) -> Self {
        Self::adjust_output_level(
            self.max_filter,
            self.min_filter,
            &mut self.max_level_in_use,
            &mut output,
        );
        self.output = output;
        self
    }
    pub fn with_min_level_override(mut self, min: log::LevelFilter) -> Self {
        self.min_filter = Some(min);
        Self::adjust_output_level(
            self.max_filter,
            self.min_filter,
            &mut self.max_level_in_use,
            &mut self.output,
        );
        self
    }
    pub fn with_max_level_override(mut self, max: log::LevelFilter) -> Self {
        self.max_filter = Some(max);
        Self::adjust_output_level(
            self.max_filter,
            self.min_filter,
            &mut self.max_level_in_use,
            &mut self.output,
        );
        self
    }
    pub fn with_process_name(mut self, name: String) -> Self {
        self.process_name = Some(name);
        self
    }
    pub fn enable(self) -> Result<&'static Self, log::SetLoggerError> {
        let leak = Box::leak(Box::new(self));
        log::set_logger(leak)?;
        log::set_max_level(leak.max_level_in_use.unwrap_or(DEFAULT_LOG_LEVEL));
        Ok(leak)
    }
    fn write_record<W: fmt::Write + ?Sized>(
        record: &Record,
        process_name: Option<&str>,
        writer: &mut W,
    ) -> fmt::Result {
        let target = record.module_path().unwrap_or(record.target());
        let level = record.level();
        let message = record.args();
        let process_name = process_name.unwrap_or("");
        let line = &LineFmt(record.line());
        writeln!(writer, "[{process_name}@{target}{line} {level}] {message}")
    }
}

impl log::Log for MathLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.output.filter
    }
    fn log(&self, record: &Record) {
        let output = &self.output;
        if record.metadata().level() <= output.filter {
            let mut endpoint_guard = output
                .endpoint
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());

            let _ = Self::write_record(
                record,
                self.process_name.as_deref(),
                endpoint_guard.as_mut(),
            );
        }
    }
    fn flush(&self) {
        // no-op
    }
}

struct LineFmt(Option<u32>);
impl fmt::Display for LineFmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(line) => write!(f, ":{line}"),
            None => Ok(()),
        }
    }
}

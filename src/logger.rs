use log;

/// Customize logger
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install logger at the default `Debug` level
    pub fn init() -> Result<(), log::SetLoggerError> {
        Self::init_with_level(log::LevelFilter::Debug)
    }

    /// Install logger with an explicit level filter
    pub fn init_with_level(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}|{}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

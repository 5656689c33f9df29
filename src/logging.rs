use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

/// Initialize logging for the binary. Level comes from `RUST_LOG`, falling
/// back to `info`. Library code only uses the `log` facade; tests run
/// without any logger attached.
pub fn init() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str("info")?
        .log_to_stderr()
        .start()
}

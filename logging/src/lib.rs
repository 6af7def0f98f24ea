use itertools::Itertools;
use schafkopf_observer_util::if_dbg_else;
pub use log::{debug, error, info, trace, warn, LevelFilter};

#[derive(Debug)]
pub enum VInitLoggingError {
    HomeDir,
    FernLogFile(std::io::Error),
    FernSetLoggerError,
}
impl std::fmt::Display for VInitLoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:?}", self)
    }
}
impl std::error::Error for VInitLoggingError {}

/// Logs to `~/<str_log_basename>.log`.
/// Without explicit level, logs everything in debug builds and `Info` upwards otherwise.
pub fn init_logging(str_log_basename: &str, olevelfilter: Option<LevelFilter>) -> Result<(), VInitLoggingError> {
    fern::Dispatch::new()
        .format(|formatcallback, fmtarguments_msg, logrecord| {
            formatcallback.finish(format_args!(
                "[{} {}({:?}) {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                logrecord.target(),
                std::thread::current().id(),
                logrecord.level(),
                fmtarguments_msg,
            ))
        })
        .level(olevelfilter.unwrap_or(if_dbg_else!({LevelFilter::Trace}{LevelFilter::Info})))
        .chain(fern::log_file({
            dirs::home_dir()
                .ok_or(VInitLoggingError::HomeDir)?
                .join(format!("{str_log_basename}.log"))
        }).map_err(VInitLoggingError::FernLogFile)?)
        .apply().map_err(|_| VInitLoggingError::FernSetLoggerError)?;
    let fn_panic_handler_original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panicinfo| {
        error!("panic: {}", panicinfo);
        fn_panic_handler_original(panicinfo)
    }));
    info!(
        "Started: {}",
        std::env::args().format_with(/*sep*/ " ", |str_arg, formatter| {
            formatter(&format_args!("\"{}\"", str_arg))
        }),
    );
    Ok(())
}

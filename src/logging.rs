use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;

use crate::error::errors::ErrorWrapper;

/*
    Builds a file backed logging config for the embedding application, the
    library itself only ever calls the log macros
 */
pub fn init_file_logging(path: String) -> Result<Handle, ErrorWrapper> {
    let appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} {l} {t} - {m}{n}")))
        .build(path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(LevelFilter::Info))
        .map_err(|e| ErrorWrapper::new_generic_error(e.to_string()))?;

    log4rs::init_config(config).map_err(|e| ErrorWrapper::new_generic_error(e.to_string()))
}

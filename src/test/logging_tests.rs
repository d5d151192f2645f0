#[cfg(test)]
mod logging {
    use crate::logging::init_file_logging;

    #[test]
    fn test_init_file_logging() {
        // GIVEN a writable log file path
        let path = std::env::temp_dir().join("radiogroup-test.log");
        // WHEN we initialise file logging
        let result = init_file_logging(path.to_str().unwrap().to_string());
        // THEN we expect a usable logging handle
        assert!(result.is_ok());
        log::info!("Logging initialised for test run.");
    }
}

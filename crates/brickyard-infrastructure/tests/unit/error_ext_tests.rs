//! Error Extension Tests

use std::io;

use brickyard_domain::error::{Error, Result};
use brickyard_infrastructure::error_ext::ErrorContext;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let parse_error = "not a number".parse::<u32>().unwrap_err();

    let result: Result<u32> = Err(parse_error).config_context("invalid retries");

    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

//! Integration tests for Robonav

use robonav_core::logging::{dev_config, LogLevel, LoggingConfig};

pub mod end_to_end;
pub mod setup_flow;
pub mod world_properties;

#[test]
fn test_logging_configurations() {
    let default_config = LoggingConfig::default();
    assert_eq!(default_config.global_level, LogLevel::Warn);
    assert!(!default_config.json_format);

    let dev_config = dev_config();
    assert_eq!(dev_config.global_level, LogLevel::Debug);
    assert!(!dev_config.include_timestamps);
}

//! I2C configuration conversion

use digitboard_hal::I2cConfig;
use embassy_rp::i2c::Config;

/// Convert the board I2C settings into an `embassy_rp` config
pub fn i2c_config(config: &I2cConfig) -> Config {
    let mut cfg = Config::default();
    cfg.frequency = config.frequency;
    cfg.sda_pullup = config.internal_pullups;
    cfg.scl_pullup = config.internal_pullups;
    cfg
}

//! Converts between SoC GPIO pin names and Linux sysfs GPIO numbers.
//!
//! Supported naming schemes are Rockchip (`GPIO1_B3`), i.MX (`GPIO5_IO10`) and
//! Allwinner (`PC7`). For a resolved number the crate also builds the shell
//! commands that export the pin through `/sys/class/gpio`.
//!
//! ```rust
//! use gpio_calc::{
//!     build_command, convert_forward, decode, DescriptorFields, ExportMode, SocFamily,
//! };
//!
//! let gpio = convert_forward(SocFamily::Rk, &DescriptorFields::new("GPIO1", "B", "3")).unwrap();
//! assert_eq!(gpio.value(), 43);
//! assert_eq!(decode(SocFamily::Rk, 43).unwrap().to_string(), "GPIO1_B3");
//! assert_eq!(build_command(gpio, ExportMode::Export), "echo 43 > /sys/class/gpio/export");
//! ```

pub mod calculator;
pub mod command;
pub mod convert;
pub mod error;
pub mod soc_pin_data;

pub use calculator::{Calculator, Direction};
pub use command::{build_command, ExportMode};
pub use convert::{
    convert_backward, convert_forward, decode, decode_number, encode, DescriptorFields, GpioNumber,
};
pub use error::{GpioCalcError, Result};
pub use soc_pin_data::{Field, PinDescriptor, Port, SocFamily};

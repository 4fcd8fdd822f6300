use std::{fmt, str::FromStr};

use crate::convert::GpioNumber;
use crate::error::GpioCalcError;

static SYSFS_ROOT: &str = "/sys/class/gpio";

/// Specifies what the generated command does after exporting the pin.
///
/// * `Export` - Only export the pin
/// * `ExportLow` - Export, then configure as an output driven low
/// * `ExportHigh` - Export, then configure as an output driven high
/// * `ExportInput` - Export, then read the pin value
///
/// # Example
///
/// ```rust
/// use gpio_calc::ExportMode;
///
/// let mode: ExportMode = "high".parse().unwrap();
/// assert_eq!(mode, ExportMode::ExportHigh);
/// assert_eq!(mode.to_str(), "export high");
/// ```
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy, Default)]
pub enum ExportMode {
    #[default]
    Export,
    ExportLow,
    ExportHigh,
    ExportInput,
}

impl ExportMode {
    pub const ALL: [ExportMode; 4] = [
        ExportMode::Export,
        ExportMode::ExportLow,
        ExportMode::ExportHigh,
        ExportMode::ExportInput,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            ExportMode::Export => "export",
            ExportMode::ExportLow => "export low",
            ExportMode::ExportHigh => "export high",
            ExportMode::ExportInput => "export input",
        }
    }
}

impl FromStr for ExportMode {
    type Err = GpioCalcError;

    /// Accepts `export`, `low`, `high` and `input`, optionally prefixed with
    /// `export` and a space, dash or underscore.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = match lowered.strip_prefix("export") {
            Some("") => return Ok(ExportMode::Export),
            Some(rest) => rest.trim_start_matches([' ', '-', '_']),
            None => lowered.as_str(),
        };

        match name {
            "low" => Ok(ExportMode::ExportLow),
            "high" => Ok(ExportMode::ExportHigh),
            "input" => Ok(ExportMode::ExportInput),
            _ => Err(GpioCalcError::UnknownExportMode(s.to_string())),
        }
    }
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Builds the shell commands that export `gpio` and apply `mode`.
///
/// Lines are separated by `\n`, without a trailing newline. Nothing is run.
///
/// # Example
///
/// ```rust
/// use gpio_calc::{build_command, ExportMode, GpioNumber};
///
/// let gpio: GpioNumber = "17".parse().unwrap();
/// assert_eq!(
///     build_command(gpio, ExportMode::ExportHigh),
///     "echo 17 > /sys/class/gpio/export\necho high > /sys/class/gpio/gpio17/direction"
/// );
/// ```
pub fn build_command(gpio: GpioNumber, mode: ExportMode) -> String {
    let export = format!("echo {} > {}/export", gpio, SYSFS_ROOT);
    let gpio_dir = format!("{}/gpio{}", SYSFS_ROOT, gpio);

    match mode {
        ExportMode::Export => export,
        ExportMode::ExportLow => format!("{}\necho low > {}/direction", export, gpio_dir),
        ExportMode::ExportHigh => format!("{}\necho high > {}/direction", export, gpio_dir),
        ExportMode::ExportInput => format!("{}\ncat {}/value", export, gpio_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gpio(n: i64) -> GpioNumber {
        GpioNumber::try_from(n).unwrap()
    }

    #[test]
    fn export_only() {
        assert_eq!(
            build_command(gpio(0), ExportMode::Export),
            "echo 0 > /sys/class/gpio/export"
        );
    }

    #[test]
    fn export_with_direction_or_read() {
        assert_eq!(
            build_command(gpio(138), ExportMode::ExportLow),
            "echo 138 > /sys/class/gpio/export\necho low > /sys/class/gpio/gpio138/direction"
        );
        assert_eq!(
            build_command(gpio(17), ExportMode::ExportHigh),
            "echo 17 > /sys/class/gpio/export\necho high > /sys/class/gpio/gpio17/direction"
        );
        assert_eq!(
            build_command(gpio(71), ExportMode::ExportInput),
            "echo 71 > /sys/class/gpio/export\ncat /sys/class/gpio/gpio71/value"
        );
    }

    #[test]
    fn every_mode_starts_with_export_line() {
        for mode in ExportMode::ALL {
            let cmd = build_command(gpio(43), mode);
            assert_eq!(cmd.lines().next(), Some("echo 43 > /sys/class/gpio/export"));
            assert!(!cmd.ends_with('\n'));
        }
    }

    #[test]
    fn mode_names_parse() {
        for mode in ExportMode::ALL {
            assert_eq!(mode.to_str().parse::<ExportMode>().unwrap(), mode);
        }
        let low: ExportMode = "export-low".parse().unwrap();
        assert_eq!(low, ExportMode::ExportLow);
        let input: ExportMode = "INPUT".parse().unwrap();
        assert_eq!(input, ExportMode::ExportInput);
        assert_eq!(
            "pwm".parse::<ExportMode>(),
            Err(GpioCalcError::UnknownExportMode("pwm".to_string()))
        );
    }
}

use log::debug;

use crate::command::{build_command, ExportMode};
use crate::convert::{convert_forward, decode_number, DescriptorFields, GpioNumber};
use crate::error::Result;
use crate::soc_pin_data::{Field, SocFamily};

/// Direction of the calculation.
///
/// * `Forward` - pin descriptor to GPIO number
/// * `Backward` - GPIO number to pin descriptor
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn to_str(&self) -> &'static str {
        match self {
            Direction::Forward => "Forward",
            Direction::Backward => "Backward",
        }
    }
}

/// Holds the state of an interactive calculator session.
///
/// Every input change recalculates the result for the current direction. A
/// rejected input is kept as typed and its error returned, while the last
/// valid result, label and command stay as they were.
///
/// # Example
///
/// ```rust
/// use gpio_calc::{Calculator, ExportMode, Field, SocFamily};
///
/// let mut calc = Calculator::new();
/// calc.set_family(SocFamily::Rk);
/// calc.set_field(Field::Group, "GPIO1").unwrap();
/// calc.set_field(Field::Port, "B").unwrap();
/// calc.set_field(Field::Index, "3").unwrap();
/// calc.set_export_mode(ExportMode::ExportInput);
///
/// assert_eq!(calc.label(), "GPIO = 43");
/// assert_eq!(
///     calc.command().unwrap(),
///     "echo 43 > /sys/class/gpio/export\ncat /sys/class/gpio/gpio43/value"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    family: SocFamily,
    direction: Direction,
    export_mode: ExportMode,
    fields: DescriptorFields,
    gpio_text: String,

    // last successfully resolved number and its display text
    result: Option<GpioNumber>,
    label: String,
}

impl Calculator {
    /// Creates a session for i.MX in forward direction, prefilled with the
    /// first valid value of each field.
    pub fn new() -> Self {
        let mut calc = Calculator {
            family: SocFamily::Imx,
            direction: Direction::Forward,
            export_mode: ExportMode::Export,
            fields: DescriptorFields::default(),
            gpio_text: String::new(),
            result: None,
            label: String::new(),
        };
        calc.reset();
        calc
    }

    pub fn family(&self) -> SocFamily {
        self.family
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn export_mode(&self) -> ExportMode {
        self.export_mode
    }

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn gpio_text(&self) -> &str {
        &self.gpio_text
    }

    /// Returns the last successfully resolved GPIO number.
    pub fn result(&self) -> Option<GpioNumber> {
        self.result
    }

    /// Returns `GPIO = n` in forward direction, the pin name in backward
    /// direction, or an empty string before anything resolved.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the command text for the last result and the current export
    /// mode.
    pub fn command(&self) -> Option<String> {
        let mode = self.export_mode;
        self.result.map(|gpio| build_command(gpio, mode))
    }

    /// Switches the SoC family. All inputs are reset.
    pub fn set_family(&mut self, family: SocFamily) {
        debug!("family {} -> {}", self.family.to_str(), family.to_str());
        self.family = family;
        self.reset();
    }

    /// Switches the calculation direction. All inputs are reset.
    pub fn set_direction(&mut self, direction: Direction) {
        let from = self.direction.to_str();
        debug!("direction {} -> {}", from, direction.to_str());
        self.direction = direction;
        self.reset();
    }

    pub fn set_export_mode(&mut self, mode: ExportMode) {
        self.export_mode = mode;
    }

    /// Updates one forward input field and recalculates.
    pub fn set_field(&mut self, field: Field, text: &str) -> Result<()> {
        self.fields.set(field, text);
        match self.direction {
            Direction::Forward => self.calc_forward(),
            Direction::Backward => Ok(()),
        }
    }

    /// Updates the backward input number and recalculates.
    pub fn set_gpio_number(&mut self, text: &str) -> Result<()> {
        self.gpio_text = text.to_string();
        match self.direction {
            Direction::Forward => Ok(()),
            Direction::Backward => self.calc_backward(),
        }
    }

    fn reset(&mut self) {
        self.fields = DescriptorFields::default();
        self.gpio_text.clear();
        self.export_mode = ExportMode::Export;
        self.result = None;
        self.label.clear();

        for field in self.family.fields() {
            if let Some(first) = self.family.options(*field).first() {
                self.fields.set(*field, first);
            }
        }

        // prefilled values always convert
        let recalculated = match self.direction {
            Direction::Forward => self.calc_forward(),
            Direction::Backward => {
                self.gpio_text = String::from("0");
                self.calc_backward()
            }
        };
        if let Err(e) = recalculated {
            debug!("reset left no result: {}", e);
        }
    }

    fn calc_forward(&mut self) -> Result<()> {
        match convert_forward(self.family, &self.fields) {
            Ok(gpio) => {
                self.result = Some(gpio);
                self.label = format!("GPIO = {}", gpio);
                Ok(())
            }
            Err(e) => {
                debug!("keeping last result {:?}: {}", self.result, e);
                Err(e)
            }
        }
    }

    fn calc_backward(&mut self) -> Result<()> {
        let gpio: GpioNumber = match self.gpio_text.parse() {
            Ok(gpio) => gpio,
            Err(e) => {
                debug!("keeping last result {:?}: {}", self.result, e);
                return Err(e);
            }
        };

        self.result = Some(gpio);
        self.label = decode_number(self.family, gpio).to_string();
        Ok(())
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

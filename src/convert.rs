//! Conversion between pin descriptors and flat sysfs GPIO numbers.

use log::debug;
use std::{fmt, ops::RangeInclusive, str::FromStr};

use crate::error::{GpioCalcError, Result};
use crate::soc_pin_data::{
    Field, PinDescriptor, Port, SocFamily, PINS_PER_GROUP, PINS_PER_RK_PORT,
};

/// A flat Linux sysfs GPIO number.
///
/// Values come out of [`encode`] or from validated caller input, so a
/// `GpioNumber` is never negative.
///
/// # Example
///
/// ```rust
/// use gpio_calc::GpioNumber;
///
/// let gpio: GpioNumber = " 43 ".parse().unwrap();
/// assert_eq!(gpio.value(), 43);
/// assert!("-1".parse::<GpioNumber>().is_err());
/// assert!(GpioNumber::try_from(-1i64).is_err());
/// ```
#[derive(Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub struct GpioNumber(u64);

impl GpioNumber {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<i64> for GpioNumber {
    type Error = GpioCalcError;

    fn try_from(number: i64) -> Result<Self> {
        u64::try_from(number)
            .map(GpioNumber)
            .map_err(|_| negative(number))
    }
}

impl FromStr for GpioNumber {
    type Err = GpioCalcError;

    /// Accepts any non-negative decimal that fits in a `u64`, with surrounding
    /// whitespace and an optional leading `+`.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let not_a_number = || GpioCalcError::InvalidNumber(format!("{:?} is not a number", s));

        if let Some(magnitude) = text.strip_prefix('-') {
            return match magnitude.parse::<u64>() {
                Ok(0) => Ok(GpioNumber(0)),
                Ok(_) => Err(negative(text)),
                Err(_) => Err(not_a_number()),
            };
        }

        text.parse::<u64>()
            .map(GpioNumber)
            .map_err(|_| not_a_number())
    }
}

fn negative(number: impl fmt::Display) -> GpioCalcError {
    GpioCalcError::InvalidNumber(format!("{} is negative", number))
}

impl fmt::Display for GpioNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw text of the forward input fields, as typed or picked by the user.
///
/// Fields the family does not use are ignored. The group accepts an optional
/// `GPIO` prefix and the port letter may be given in either case.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DescriptorFields {
    pub group: String,
    pub port: String,
    pub index: String,
}

impl DescriptorFields {
    pub fn new(group: &str, port: &str, index: &str) -> Self {
        DescriptorFields {
            group: group.to_string(),
            port: port.to_string(),
            index: index.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Group => &self.group,
            Field::Port => &self.port,
            Field::Index => &self.index,
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Group => &mut self.group,
            Field::Port => &mut self.port,
            Field::Index => &mut self.index,
        };
        *slot = value.to_string();
    }

    /// Parses the fields into a descriptor of `family`'s variant.
    ///
    /// Only the text is checked here. Ranges are checked by [`encode`].
    pub fn parse(&self, family: SocFamily) -> Result<PinDescriptor> {
        match family {
            SocFamily::Rk => Ok(PinDescriptor::Rk {
                group: parse_group(family, &self.group)?,
                port: parse_port(family, &self.port)?,
                index: parse_index(family, &self.index)?,
            }),
            SocFamily::Imx => Ok(PinDescriptor::Imx {
                group: parse_group(family, &self.group)?,
                index: parse_index(family, &self.index)?,
            }),
            SocFamily::Sunxi => Ok(PinDescriptor::Sunxi {
                port: parse_port(family, &self.port)?,
                index: parse_index(family, &self.index)?,
            }),
        }
    }
}

fn invalid(family: SocFamily, reason: String) -> GpioCalcError {
    GpioCalcError::InvalidDescriptor { family, reason }
}

fn parse_number(family: SocFamily, field: Field, text: &str) -> Result<u64> {
    text.parse::<u64>().map_err(|_| {
        let name = field.to_str().to_lowercase();
        let reason = format!("{} {:?} is not a non-negative number", name, text);
        invalid(family, reason)
    })
}

fn parse_group(family: SocFamily, text: &str) -> Result<u64> {
    let text = text.trim();
    let digits = text
        .strip_prefix("GPIO")
        .or_else(|| text.strip_prefix("gpio"))
        .unwrap_or(text);
    parse_number(family, Field::Group, digits)
}

fn parse_index(family: SocFamily, text: &str) -> Result<u64> {
    parse_number(family, Field::Index, text.trim())
}

fn parse_port(family: SocFamily, text: &str) -> Result<Port> {
    let text = text.trim();
    let mut chars = text.chars();
    let reason = match (chars.next(), chars.next()) {
        (Some(letter), None) => match Port::from_letter(letter) {
            Some(port) => return Ok(port),
            None => "is not a letter",
        },
        _ => "is not a single letter",
    };
    Err(invalid(family, format!("port {:?} {}", text, reason)))
}

fn check_range(
    family: SocFamily,
    field: Field,
    value: u64,
    range: RangeInclusive<u64>,
) -> Result<()> {
    if range.contains(&value) {
        return Ok(());
    }

    Err(invalid(
        family,
        format!(
            "{} {} outside {}..={}",
            field.to_str().to_lowercase(),
            value,
            range.start(),
            range.end()
        ),
    ))
}

fn check_group(family: SocFamily, group: u64) -> Result<()> {
    match family.group_range() {
        Some(range) => check_range(family, Field::Group, group, range),
        None => Ok(()),
    }
}

fn check_port(family: SocFamily, port: Port) -> Result<()> {
    let count = family.port_count().unwrap_or(0);
    if port.index() < count {
        return Ok(());
    }

    let last = Port::from_index(count.saturating_sub(1));
    Err(invalid(family, format!("port {} outside A-{}", port, last)))
}

fn check_index(family: SocFamily, index: u64) -> Result<()> {
    check_range(family, Field::Index, index, family.index_range())
}

/// Converts a pin descriptor into its sysfs GPIO number.
///
/// Fails with `InvalidDescriptor` when a field is outside the family's range
/// or the descriptor belongs to another family.
///
/// # Example
///
/// ```rust
/// use gpio_calc::{encode, PinDescriptor, SocFamily};
///
/// let gpio = encode(SocFamily::Imx, &PinDescriptor::Imx { group: 5, index: 10 }).unwrap();
/// assert_eq!(gpio.value(), 138);
/// ```
pub fn encode(family: SocFamily, descriptor: &PinDescriptor) -> Result<GpioNumber> {
    if descriptor.family() != family {
        let reason = format!("got a {} descriptor", descriptor.family());
        return Err(invalid(family, reason));
    }

    let number = match *descriptor {
        PinDescriptor::Rk { group, port, index } => {
            check_group(family, group)?;
            check_port(family, port)?;
            check_index(family, index)?;
            group * PINS_PER_GROUP + port.index() * PINS_PER_RK_PORT + index
        }
        PinDescriptor::Imx { group, index } => {
            check_group(family, group)?;
            check_index(family, index)?;
            (group - 1) * PINS_PER_GROUP + index
        }
        PinDescriptor::Sunxi { port, index } => {
            check_port(family, port)?;
            check_index(family, index)?;
            port.index() * PINS_PER_GROUP + index
        }
    };

    debug!("{} {} -> gpio {}", family.to_str(), descriptor, number);
    Ok(GpioNumber(number))
}

/// Converts a GPIO number into `family`'s descriptor.
///
/// No upper bound is applied: large numbers decode to groups or ports the SoC
/// does not have.
pub fn decode_number(family: SocFamily, gpio: GpioNumber) -> PinDescriptor {
    let n = gpio.value();
    let descriptor = match family {
        SocFamily::Rk => PinDescriptor::Rk {
            group: n / PINS_PER_GROUP,
            port: Port::from_index((n % PINS_PER_GROUP) / PINS_PER_RK_PORT),
            index: n % PINS_PER_RK_PORT,
        },
        SocFamily::Imx => PinDescriptor::Imx {
            group: n / PINS_PER_GROUP + 1,
            index: n % PINS_PER_GROUP,
        },
        SocFamily::Sunxi => PinDescriptor::Sunxi {
            port: Port::from_index(n / PINS_PER_GROUP),
            index: n % PINS_PER_GROUP,
        },
    };

    debug!("{} gpio {} -> {}", family.to_str(), n, descriptor);
    descriptor
}

/// Converts a signed number into `family`'s descriptor.
///
/// Fails with `InvalidNumber` when `number` is negative.
///
/// # Example
///
/// ```rust
/// use gpio_calc::{decode, SocFamily};
///
/// assert_eq!(decode(SocFamily::Sunxi, 71).unwrap().to_string(), "PC7");
/// assert!(decode(SocFamily::Imx, -1).is_err());
/// ```
pub fn decode(family: SocFamily, number: i64) -> Result<PinDescriptor> {
    let gpio = GpioNumber::try_from(number)?;
    Ok(decode_number(family, gpio))
}

/// Forward calculation from raw field text.
///
/// # Example
///
/// ```rust
/// use gpio_calc::{convert_forward, DescriptorFields, SocFamily};
///
/// let fields = DescriptorFields::new("GPIO1", "B", "3");
/// assert_eq!(convert_forward(SocFamily::Rk, &fields).unwrap().value(), 43);
/// ```
pub fn convert_forward(family: SocFamily, fields: &DescriptorFields) -> Result<GpioNumber> {
    let descriptor = fields.parse(family)?;
    encode(family, &descriptor)
}

/// Backward calculation from raw number text.
pub fn convert_backward(family: SocFamily, text: &str) -> Result<PinDescriptor> {
    let gpio: GpioNumber = text.parse()?;
    Ok(decode_number(family, gpio))
}

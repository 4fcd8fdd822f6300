use std::{fmt, ops::RangeInclusive, str::FromStr};

use crate::error::GpioCalcError;

/// Number of lines in one GPIO bank, shared by all supported families.
pub(crate) const PINS_PER_GROUP: u64 = 32;
/// Rockchip splits each bank into four ports of eight lines.
pub(crate) const PINS_PER_RK_PORT: u64 = 8;

static PORT_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Specifies the SoC family whose pin naming scheme is used.
///
/// * `Rk` - Rockchip, pins named like `GPIO1_B3`
/// * `Imx` - NXP i.MX, pins named like `GPIO5_IO10`
/// * `Sunxi` - Allwinner, pins named like `PC7`
///
/// # Example
///
/// ```rust
/// use gpio_calc::SocFamily;
///
/// let family: SocFamily = "rockchip".parse().unwrap();
/// assert_eq!(family, SocFamily::Rk);
/// assert_eq!(family.to_str(), "rk");
/// ```
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
pub enum SocFamily {
    Rk,
    Imx,
    Sunxi,
}

impl SocFamily {
    /// All families, in the order they are presented to the user.
    pub const ALL: [SocFamily; 3] = [SocFamily::Imx, SocFamily::Rk, SocFamily::Sunxi];

    /// Short name of the family, as accepted on the command line.
    pub fn to_str(&self) -> &'static str {
        match self {
            SocFamily::Rk => "rk",
            SocFamily::Imx => "imx",
            SocFamily::Sunxi => "sunxi",
        }
    }

    /// Vendor name of the family.
    pub fn vendor(&self) -> &'static str {
        match self {
            SocFamily::Rk => "Rockchip",
            SocFamily::Imx => "i.MX",
            SocFamily::Sunxi => "Allwinner",
        }
    }

    /// Returns the descriptor fields this family's naming scheme uses.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gpio_calc::{Field, SocFamily};
    ///
    /// assert_eq!(SocFamily::Imx.fields(), &[Field::Group, Field::Index]);
    /// ```
    pub fn fields(&self) -> &'static [Field] {
        match self {
            SocFamily::Rk => &[Field::Group, Field::Port, Field::Index],
            SocFamily::Imx => &[Field::Group, Field::Index],
            SocFamily::Sunxi => &[Field::Port, Field::Index],
        }
    }

    /// Lists the accepted values of `field` for this family.
    ///
    /// The first entry is the value a fresh form is prefilled with. Fields the
    /// family does not use have no options.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gpio_calc::{Field, SocFamily};
    ///
    /// let groups = SocFamily::Rk.options(Field::Group);
    /// assert_eq!(groups.first().unwrap(), "GPIO0");
    /// assert_eq!(groups.len(), 8);
    /// assert!(SocFamily::Sunxi.options(Field::Group).is_empty());
    /// ```
    pub fn options(&self, field: Field) -> Vec<String> {
        match field {
            Field::Group => match self.group_range() {
                Some(range) => range.map(|g| format!("GPIO{}", g)).collect(),
                None => Vec::new(),
            },
            Field::Port => match self.port_count() {
                Some(count) => PORT_LETTERS
                    .chars()
                    .take(count as usize)
                    .map(String::from)
                    .collect(),
                None => Vec::new(),
            },
            Field::Index => self.index_range().map(|i| i.to_string()).collect(),
        }
    }

    pub(crate) fn group_range(&self) -> Option<RangeInclusive<u64>> {
        match self {
            SocFamily::Rk => Some(0..=7),
            SocFamily::Imx => Some(1..=8),
            SocFamily::Sunxi => None,
        }
    }

    pub(crate) fn port_count(&self) -> Option<u64> {
        match self {
            SocFamily::Rk => Some(PINS_PER_GROUP / PINS_PER_RK_PORT),
            SocFamily::Imx => None,
            SocFamily::Sunxi => Some(PORT_LETTERS.len() as u64),
        }
    }

    pub(crate) fn index_range(&self) -> RangeInclusive<u64> {
        match self {
            SocFamily::Rk => 0..=PINS_PER_RK_PORT - 1,
            SocFamily::Imx | SocFamily::Sunxi => 0..=PINS_PER_GROUP - 1,
        }
    }
}

impl FromStr for SocFamily {
    type Err = GpioCalcError;

    /// Accepts the short names (`rk`, `imx`, `sunxi`) and the vendor names
    /// (`rockchip`, `i.mx`, `allwinner`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rk" | "rockchip" => Ok(SocFamily::Rk),
            "imx" | "i.mx" => Ok(SocFamily::Imx),
            "sunxi" | "allwinner" => Ok(SocFamily::Sunxi),
            _ => Err(GpioCalcError::UnknownFamily(s.to_string())),
        }
    }
}

impl fmt::Display for SocFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.vendor())
    }
}

/// One input field of a pin descriptor.
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
pub enum Field {
    Group,
    Port,
    Index,
}

impl Field {
    pub fn to_str(&self) -> &'static str {
        match self {
            Field::Group => "Group",
            Field::Port => "Port",
            Field::Index => "Index",
        }
    }
}

/// A port letter, stored as its 0-based position in the alphabet.
///
/// Decoding never limits the port, so positions past `Z` exist. They have no
/// letter and display as `[n]`.
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
pub struct Port(u64);

impl Port {
    /// Returns the port for an ASCII letter in either case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gpio_calc::Port;
    ///
    /// assert_eq!(Port::from_letter('C').unwrap().index(), 2);
    /// assert_eq!(Port::from_letter('c'), Port::from_letter('C'));
    /// assert!(Port::from_letter('1').is_none());
    /// ```
    pub fn from_letter(letter: char) -> Option<Port> {
        let letter = letter.to_ascii_uppercase();
        if letter.is_ascii_uppercase() {
            Some(Port(u64::from(letter as u8 - b'A')))
        } else {
            None
        }
    }

    pub fn from_index(index: u64) -> Port {
        Port(index)
    }

    pub fn index(&self) -> u64 {
        self.0
    }

    pub fn letter(&self) -> Option<char> {
        usize::try_from(self.0)
            .ok()
            .and_then(|i| PORT_LETTERS.chars().nth(i))
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(letter) => write!(f, "{}", letter),
            None => write!(f, "[{}]", self.0),
        }
    }
}

/// A structured pin identifier in one family's naming scheme.
///
/// The `Display` form is the vendor pin name:
/// * `Rk` - `GPIO{group}_{port}{index}`
/// * `Imx` - `GPIO{group}_IO{index}` with a two-digit index
/// * `Sunxi` - `P{port}{index}`
///
/// # Example
///
/// ```rust
/// use gpio_calc::{PinDescriptor, Port};
///
/// let pin = PinDescriptor::Rk {
///     group: 1,
///     port: Port::from_letter('B').unwrap(),
///     index: 3,
/// };
/// assert_eq!(pin.to_string(), "GPIO1_B3");
///
/// let pin = PinDescriptor::Imx { group: 5, index: 4 };
/// assert_eq!(pin.to_string(), "GPIO5_IO04");
/// ```
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
pub enum PinDescriptor {
    Rk { group: u64, port: Port, index: u64 },
    Imx { group: u64, index: u64 },
    Sunxi { port: Port, index: u64 },
}

impl PinDescriptor {
    /// Returns the family whose naming scheme this descriptor follows.
    pub fn family(&self) -> SocFamily {
        match self {
            PinDescriptor::Rk { .. } => SocFamily::Rk,
            PinDescriptor::Imx { .. } => SocFamily::Imx,
            PinDescriptor::Sunxi { .. } => SocFamily::Sunxi,
        }
    }
}

impl fmt::Display for PinDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinDescriptor::Rk { group, port, index } => {
                write!(f, "GPIO{}_{}{}", group, port, index)
            }
            PinDescriptor::Imx { group, index } => write!(f, "GPIO{}_IO{:02}", group, index),
            PinDescriptor::Sunxi { port, index } => write!(f, "P{}{}", port, index),
        }
    }
}

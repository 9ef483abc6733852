//! Driver parser-behavior options
//!
//! Each option mirrors a choice the runtime driver makes when it deserializes
//! a column value. The generator only needs to know which shape comes back, so
//! every option is a single enumerated choice; the default variant matches the
//! driver's out-of-the-box behavior.

/// Error returned when strictly parsing an unknown parser option value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserParseError {
    option: &'static str,
}

impl ParserParseError {
    /// Name of the option that failed to parse
    #[must_use]
    pub const fn option(&self) -> &'static str {
        self.option
    }
}

impl core::fmt::Display for ParserParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown {} value", self.option)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParserParseError {}

macro_rules! parser_option {
    (
        $(#[$meta:meta])*
        $name:ident, $option:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Option name as written in configuration
            pub const OPTION: &'static str = $option;

            /// Every recognized value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Parse a value leniently: `None` for anything but an exact match
            #[must_use]
            pub fn parse(s: &str) -> Option<Self> {
                $(
                    if s == $value {
                        return Some($name::$variant);
                    }
                )+
                None
            }

            /// Get the value as written in configuration
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Returns `true` for the driver's out-of-the-box behavior
            #[must_use]
            pub fn is_default(&self) -> bool {
                *self == $name::default()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl core::str::FromStr for $name {
            type Err = ParserParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::parse(s).ok_or(ParserParseError { option: $option })
            }
        }
    };
}

parser_option! {
    /// How `date` columns come back from the driver
    DateParser, "dateParser" {
        /// Parsed into a `Date` object
        #[default]
        Timestamp => "timestamp",
        /// Passed through as the raw `YYYY-MM-DD` string
        String => "string",
    }
}

parser_option! {
    /// How `numeric`/`decimal` columns come back from the driver
    NumericParser, "numericParser" {
        /// Passed through as a string to keep arbitrary precision
        #[default]
        String => "string",
        /// Parsed into a `number`
        Number => "number",
        /// Either, depending on the value's precision
        NumberOrString => "number-or-string",
    }
}

parser_option! {
    /// How `timestamp`/`timestamptz` columns come back from the driver
    TimestampParser, "timestampParser" {
        /// Parsed into a `Date` object
        #[default]
        Timestamp => "timestamp",
        /// Passed through as the raw string
        String => "string",
    }
}

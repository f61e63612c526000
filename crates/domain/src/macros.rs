//! Macro for implementing Display and FromStr for closed label enums
//!
//! Inventory kinds, sort fields and sort directions all travel as short
//! lowercase labels (CLI arguments, config values, export file names). This
//! macro gives each enum one canonical label for `Display` and any number of
//! extra spellings accepted by `FromStr`.
//!
//! # Example
//!
//! ```rust
//! use assetdesk_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shelf {
//!     Top,
//!     Bottom,
//! }
//!
//! impl_label_conversions!(Shelf {
//!     Top => "top" | "upper",
//!     Bottom => "bottom",
//! });
//!
//! assert_eq!(Shelf::Top.to_string(), "top");
//! assert_eq!("UPPER".parse::<Shelf>().unwrap(), Shelf::Top);
//! ```

/// Implements Display and FromStr for a fieldless enum.
///
/// - Display writes the first (canonical) label
/// - FromStr trims, lowercases and accepts the canonical label or any alias
/// - Unknown input yields `Err(String)` naming the enum
///
/// Labels must be written in lowercase.
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($label),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($label $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

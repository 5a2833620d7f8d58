//! The fixed set of story animals.

use serde::{Deserialize, Serialize};

/// Animals a story can feature.
///
/// The set is fixed; the intake screen offers exactly these choices.
///
/// # Examples
///
/// ```
/// use fabula_core::Animal;
/// use std::str::FromStr;
///
/// assert_eq!(Animal::Penguin.to_string(), "Penguin");
/// assert_eq!(Animal::from_str("Dolphin").unwrap(), Animal::Dolphin);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Animal {
    #[default]
    Lion,
    Elephant,
    Penguin,
    Dolphin,
}

// SPDX-License-Identifier: MPL-2.0
//! Rouble amounts with Russian-locale digit grouping.

use std::fmt;

/// Separator placed between digit groups, as `ru-RU` number formatting does.
pub const GROUP_SEPARATOR: char = '\u{00A0}';

/// Currency sign appended by [`Price::with_currency`].
pub const CURRENCY_SIGN: &str = "₽";

/// Whole-rouble price of a catalog item.
///
/// `Display` renders the amount grouped by thousands (`9 900`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u32);

impl Price {
    #[must_use]
    pub const fn new(roubles: u32) -> Self {
        Self(roubles)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Grouped amount followed by the currency sign (`9 900 ₽`).
    #[must_use]
    pub fn with_currency(self) -> String {
        format!("{self} {CURRENCY_SIGN}")
    }
}

impl From<u32> for Price {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(digit);
        }
        f.write_str(&grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_are_not_grouped() {
        assert_eq!(Price::new(0).to_string(), "0");
        assert_eq!(Price::new(999).to_string(), "999");
    }

    #[test]
    fn thousands_are_separated() {
        assert_eq!(Price::new(9_900).to_string(), "9\u{a0}900");
        assert_eq!(Price::new(45_000).to_string(), "45\u{a0}000");
        assert_eq!(Price::new(1_250_000).to_string(), "1\u{a0}250\u{a0}000");
    }

    #[test]
    fn with_currency_appends_sign() {
        assert_eq!(Price::new(9_900).with_currency(), "9\u{a0}900 ₽");
    }
}

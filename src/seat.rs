//! Seat label parsing and the seat distance policy.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static SEAT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z])(\d+)$").expect("Invalid regex pattern"));

/// A parsed seat: row letter plus seat number.
///
/// Only constructed through [`Seat::parse`]; the stored label is the
/// normalized (trimmed, uppercased) form of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub row: char,
    pub number: u32,
    pub label: String,
}

impl Seat {
    /// Parse a seat label like `A1` or `b20` into a [`Seat`].
    ///
    /// Labels are trimmed and uppercased before matching. Anything that is
    /// not exactly one row letter followed by digits is rejected, including
    /// trailing characters.
    pub fn parse(label: &str) -> Result<Self> {
        let normalized = label.trim().to_uppercase();
        let captures = SEAT_REGEX
            .captures(&normalized)
            .ok_or_else(|| Error::InvalidSeatFormat(normalized.clone()))?;
        let row = captures[1]
            .chars()
            .next()
            .ok_or_else(|| Error::InvalidSeatFormat(normalized.clone()))?;
        let number = captures[2]
            .parse()
            .map_err(|_| Error::InvalidSeatFormat(normalized.clone()))?;
        Ok(Self {
            row,
            number,
            label: normalized,
        })
    }

    /// Distance of this seat from the entry point.
    ///
    /// Higher number means further from the entry (A20 is behind A1). The
    /// row letter carries no distance information.
    pub fn distance(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

use std::convert::Infallible;
use std::str::FromStr;

use winnow::ascii::{dec_int, multispace0, Caseless};
use winnow::combinator::{alt, delimited, opt, terminated};
use winnow::{Parser, Result};

use crate::{Angle, Brightness};

/// Error returned when a gradient angle cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid gradient angle `{input}` at offset {offset}: expected `auto` or whole degrees")]
pub struct ParseAngleError {
    input: String,
    offset: usize,
}

impl ParseAngleError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset into the input where parsing stopped.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

fn brightness(input: &mut &str) -> Result<Brightness> {
    delimited(
        multispace0,
        alt((
            Caseless("dark").value(Brightness::Dark),
            Caseless("normal").value(Brightness::Normal),
            Caseless("light").value(Brightness::Light),
        )),
        multispace0,
    )
    .parse_next(input)
}

fn angle(input: &mut &str) -> Result<Angle> {
    delimited(
        multispace0,
        alt((
            Caseless("auto").value(Angle::Auto),
            terminated(dec_int, opt(Caseless("deg"))).map(Angle::Degrees),
        )),
        multispace0,
    )
    .parse_next(input)
}

/// Unrecognized names fall back to [`Brightness::Normal`].
impl FromStr for Brightness {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(brightness.parse(s).unwrap_or_default())
    }
}

impl From<&str> for Brightness {
    fn from(value: &str) -> Self {
        brightness.parse(value).unwrap_or_default()
    }
}

impl FromStr for Angle {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        angle.parse(s).map_err(|err| ParseAngleError {
            input: s.to_owned(),
            offset: err.offset(),
        })
    }
}

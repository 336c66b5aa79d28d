use core::fmt;
use std::str::FromStr;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use serde::Serialize;

use crate::error::{RandrError, Result};

/// Screen rotation, discriminants are the angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    Normal = 0,
    Left = 90,
    Inverted = 180,
    Right = 270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Normal,
        Rotation::Left,
        Rotation::Inverted,
        Rotation::Right,
    ];

    /// Name used by `xrandr --rotate`
    pub fn name(self) -> &'static str {
        match self {
            Rotation::Normal => "normal",
            Rotation::Left => "left",
            Rotation::Inverted => "inverted",
            Rotation::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Result<Rotation> {
        Rotation::ALL
            .into_iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| RandrError::InvalidArgument(format!("unknown rotation '{name}'")))
    }

    pub fn angle(self) -> u32 {
        // every discriminant fits in a u32
        self.to_u32().unwrap_or_default()
    }

    pub fn from_angle(angle: u32) -> Result<Rotation> {
        FromPrimitive::from_u32(angle)
            .ok_or_else(|| RandrError::InvalidArgument(format!("unsupported rotation angle {angle}")))
    }
}

impl FromStr for Rotation {
    type Err = RandrError;

    fn from_str(s: &str) -> Result<Rotation> {
        Rotation::from_name(s)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Placement of a screen relative to another one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    LeftOf,
    RightOf,
    Above,
    Below,
    SameAs,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::LeftOf,
        Position::RightOf,
        Position::Above,
        Position::Below,
        Position::SameAs,
    ];

    /// The xrandr flag for this relation, e.g. `--left-of`
    pub fn token(self) -> &'static str {
        match self {
            Position::LeftOf => "--left-of",
            Position::RightOf => "--right-of",
            Position::Above => "--above",
            Position::Below => "--below",
            Position::SameAs => "--same-as",
        }
    }

    pub fn from_token(token: &str) -> Result<Position> {
        Position::ALL
            .into_iter()
            .find(|p| p.token() == token)
            .ok_or_else(|| RandrError::InvalidArgument(format!("unknown position '{token}'")))
    }
}

impl FromStr for Position {
    type Err = RandrError;

    fn from_str(s: &str) -> Result<Position> {
        Position::from_token(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

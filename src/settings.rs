use serde::Serialize;

use crate::modes::Resolution;
use crate::policy::{Position, Rotation};

/// Relative placement: relation plus the name of the other screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub relation: Position,
    pub relative_to: String,
}

/// One snapshot of the settings xrandr can change on a screen.
///
/// A [`Screen`](crate::Screen) keeps two of these: the last applied one and the
/// staged one. Whatever differs between them is what the next command carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub resolution: Resolution,
    pub primary: bool,
    pub enabled: bool,
    pub rotation: Option<Rotation>,
    pub position: Option<Placement>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            resolution: Resolution::default(),
            primary: false,
            enabled: true,
            rotation: None,
            position: None,
        }
    }
}

impl Settings {
    /// Field-by-field difference from `baseline`
    pub fn diff(&self, baseline: &Settings) -> DirtyFields {
        DirtyFields {
            resolution: self.resolution != baseline.resolution,
            primary: self.primary != baseline.primary,
            enabled: self.enabled != baseline.enabled,
            rotation: self.rotation != baseline.rotation,
            position: self.position != baseline.position,
        }
    }
}

/// Which staged fields are pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DirtyFields {
    pub resolution: bool,
    pub primary: bool,
    pub enabled: bool,
    pub rotation: bool,
    pub position: bool,
}

impl DirtyFields {
    pub fn any(&self) -> bool {
        self.resolution || self.primary || self.enabled || self.rotation || self.position
    }

    /// Any field other than `enabled`
    pub fn any_besides_enabled(&self) -> bool {
        self.resolution || self.primary || self.rotation || self.position
    }

    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.resolution, "resolution"),
            (self.primary, "primary"),
            (self.enabled, "enabled"),
            (self.rotation, "rotation"),
            (self.position, "position"),
        ]
        .into_iter()
        .filter_map(|(dirty, name)| dirty.then_some(name))
        .collect()
    }
}

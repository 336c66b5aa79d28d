//! Read `xrandr` output into screens and modes, stage changes to them and
//! turn those changes into the `xrandr` command that applies them.

pub mod error;
pub mod executor;
pub mod modes;
pub mod parser;
pub mod policy;
pub mod screen;
pub mod settings;

use log::info;

pub use error::{RandrError, Result};
pub use executor::{CommandExecutor, XrandrExecutor, XRANDR};
pub use modes::{Mode, Resolution};
pub use parser::parse_xrandr;
pub use policy::{Position, Rotation};
pub use screen::Screen;
pub use settings::{DirtyFields, Placement, Settings};

/// Every output xrandr reports, connected or not
pub fn all_screens<E>(executor: &E) -> Result<Vec<Screen>>
where
    E: CommandExecutor + ?Sized,
{
    let lines = executor.execute(&[XRANDR.to_string()])?;
    let screens = parse_xrandr(&lines);
    info!("xrandr reported {} outputs", screens.len());
    Ok(screens)
}

/// Screens with at least one supported mode
pub fn connected_screens<E>(executor: &E) -> Result<Vec<Screen>>
where
    E: CommandExecutor + ?Sized,
{
    Ok(all_screens(executor)?
        .into_iter()
        .filter(Screen::is_connected)
        .collect())
}

/// Connected screens that are currently switched on
pub fn enabled_screens<E>(executor: &E) -> Result<Vec<Screen>>
where
    E: CommandExecutor + ?Sized,
{
    Ok(connected_screens(executor)?
        .into_iter()
        .filter(Screen::is_enabled)
        .collect())
}

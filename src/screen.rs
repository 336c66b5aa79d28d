use core::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::error::{RandrError, Result};
use crate::executor::{CommandExecutor, XRANDR};
use crate::modes::{Mode, Resolution};
use crate::policy::{Position, Rotation};
use crate::settings::{DirtyFields, Placement, Settings};

/// One xrandr output with its modes and pending changes.
///
/// Setters only stage values. Nothing reaches the X server until
/// [`Screen::apply_settings`] runs the compiled command. Pending changes are
/// the difference between the staged snapshot and the last applied one, so
/// setting a field back to its applied value makes it clean again.
#[derive(Debug, Clone, Serialize)]
pub struct Screen {
    name: String,
    connected: bool,
    modes: Vec<Mode>,
    applied: Settings,
    staged: Settings,
    custom_resolution: bool,
}

impl Screen {
    pub fn new(
        name: impl Into<String>,
        primary: bool,
        rotation: Option<Rotation>,
        modes: Vec<Mode>,
    ) -> Screen {
        let current = modes.iter().find(|m| m.current());
        let settings = Settings {
            resolution: current.map(Mode::resolution).unwrap_or_default(),
            primary,
            enabled: current.is_some(),
            rotation,
            position: None,
        };
        Screen {
            name: name.into(),
            connected: !modes.is_empty(),
            modes,
            applied: settings.clone(),
            staged: settings,
            custom_resolution: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn supported_modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn current_mode(&self) -> Option<&Mode> {
        self.modes.iter().find(|m| m.current())
    }

    pub fn resolution(&self) -> Resolution {
        self.staged.resolution
    }

    pub fn is_primary(&self) -> bool {
        self.staged.primary
    }

    pub fn is_enabled(&self) -> bool {
        self.staged.enabled
    }

    pub fn rotation(&self) -> Option<Rotation> {
        self.staged.rotation
    }

    pub fn position(&self) -> Option<&Placement> {
        self.staged.position.as_ref()
    }

    /// Settings as of the last successful apply
    pub fn applied_settings(&self) -> &Settings {
        &self.applied
    }

    pub fn staged_settings(&self) -> &Settings {
        &self.staged
    }

    pub fn dirty(&self) -> DirtyFields {
        self.staged.diff(&self.applied)
    }

    pub fn has_pending_changes(&self) -> bool {
        self.dirty().any()
    }

    pub fn available_resolutions(&self) -> Vec<Resolution> {
        self.modes.iter().map(Mode::resolution).collect()
    }

    pub fn available_resolution_labels(&self) -> Vec<String> {
        self.modes.iter().map(Mode::resolution_label).collect()
    }

    pub fn check_resolution(&self, resolution: Resolution) -> Result<()> {
        if self.modes.iter().any(|m| m.resolution() == resolution) {
            Ok(())
        } else {
            Err(RandrError::InvalidArgument(format!(
                "resolution {resolution} is not supported by {}",
                self.name
            )))
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.staged.enabled != enabled {
            debug!("{}: staging enabled={enabled}", self.name);
            self.staged.enabled = enabled;
        }
    }

    pub fn set_primary(&mut self, primary: bool) {
        if self.staged.primary != primary {
            debug!("{}: staging primary={primary}", self.name);
            self.staged.primary = primary;
        }
    }

    /// Stage a resolution from the supported modes.
    pub fn set_resolution(&mut self, resolution: impl Into<Resolution>) -> Result<()> {
        self.stage_resolution(resolution.into(), false)
    }

    /// Stage a resolution without checking it against the supported modes.
    pub fn set_custom_resolution(&mut self, resolution: impl Into<Resolution>) -> Result<()> {
        self.stage_resolution(resolution.into(), true)
    }

    fn stage_resolution(&mut self, resolution: Resolution, custom: bool) -> Result<()> {
        if !self.staged.enabled {
            return Err(RandrError::InvalidState(format!(
                "{} is off, enable it before changing the resolution",
                self.name
            )));
        }
        if !custom {
            self.check_resolution(resolution)?;
        }
        if self.staged.resolution != resolution {
            debug!("{}: staging resolution {resolution}", self.name);
            self.staged.resolution = resolution;
            self.custom_resolution = custom;
        }
        Ok(())
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        if self.staged.rotation != Some(rotation) {
            debug!("{}: staging rotation {rotation}", self.name);
            self.staged.rotation = Some(rotation);
        }
    }

    pub fn set_position(&mut self, relation: Position, relative_to: &str) -> Result<()> {
        if relative_to.is_empty() {
            return Err(RandrError::InvalidArgument(format!(
                "{}: {relation} needs the name of another screen",
                self.name
            )));
        }
        let placement = Placement {
            relation,
            relative_to: relative_to.to_string(),
        };
        if self.staged.position.as_ref() != Some(&placement) {
            debug!("{}: staging {relation} {relative_to}", self.name);
            self.staged.position = Some(placement);
        }
        Ok(())
    }

    /// Drop every staged change.
    pub fn discard_changes(&mut self) {
        self.staged = self.applied.clone();
        self.custom_resolution = false;
    }

    /// Build the xrandr invocation for the pending changes.
    ///
    /// Returns `None` when there is nothing to send. That is the case when no
    /// field is dirty, and also when the screen stays off: changes staged
    /// on a disabled screen wait until it is enabled.
    pub fn compile_command(&self) -> Result<Option<Vec<String>>> {
        let dirty = self.dirty();
        if !dirty.any() {
            return Ok(None);
        }
        let mut cmd = self.base_command()?;

        if !self.staged.enabled {
            if !dirty.enabled {
                debug!("{}: stays off, holding back {:?}", self.name, dirty.names());
                return Ok(None);
            }
            if dirty.any_besides_enabled() {
                return Err(RandrError::ConflictingChanges(format!(
                    "--off cannot be combined with changes to {}",
                    dirty
                        .names()
                        .into_iter()
                        .filter(|name| *name != "enabled")
                        .collect::<Vec<_>>()
                        .join(", ")
                )));
            }
            cmd.push("--off".into());
            return Ok(Some(cmd));
        }

        if dirty.resolution {
            if !self.custom_resolution {
                self.check_resolution(self.staged.resolution)?;
            }
            cmd.push("--mode".into());
            cmd.push(self.staged.resolution.label());
        } else {
            cmd.push("--auto".into());
        }

        if dirty.primary && self.staged.primary {
            cmd.push("--primary".into());
        }

        if dirty.rotation {
            let rotation = self.staged.rotation.ok_or_else(|| {
                RandrError::InvalidArgument(format!("{}: rotation cannot be unset", self.name))
            })?;
            cmd.push("--rotate".into());
            cmd.push(rotation.name().into());
        }

        if dirty.position {
            let placement = self.staged.position.as_ref().ok_or_else(|| {
                RandrError::InvalidArgument(format!("{}: position cannot be unset", self.name))
            })?;
            cmd.push(placement.relation.token().into());
            cmd.push(placement.relative_to.clone());
        }

        debug!("{}: compiled {:?}", self.name, cmd);
        Ok(Some(cmd))
    }

    /// Send the pending changes to xrandr.
    ///
    /// On success the staged settings become the new baseline and the
    /// tool's output is returned. On failure nothing is reset, so the same
    /// changes can be applied again.
    pub fn apply_settings<E>(&mut self, executor: &E) -> Result<Option<Vec<String>>>
    where
        E: CommandExecutor + ?Sized,
    {
        let Some(cmd) = self.compile_command()? else {
            return Ok(None);
        };
        info!("Applying settings: {}", cmd.join(" "));
        let output = executor.execute(&cmd)?;
        self.mark_applied();
        Ok(Some(output))
    }

    /// Run `xrandr --output <name> --auto` regardless of what is staged.
    ///
    /// Staged changes were never sent, so they are dropped. `--auto` switches
    /// the output on, which becomes the new baseline.
    pub fn apply_default_settings<E>(&mut self, executor: &E) -> Result<Vec<String>>
    where
        E: CommandExecutor + ?Sized,
    {
        let mut cmd = self.base_command()?;
        cmd.push("--auto".into());
        info!("Resetting {} to automatic settings", self.name);
        let output = executor.execute(&cmd)?;
        self.staged = self.applied.clone();
        self.staged.enabled = true;
        self.mark_applied();
        Ok(output)
    }

    fn base_command(&self) -> Result<Vec<String>> {
        if self.name.is_empty() {
            return Err(RandrError::InvalidState(
                "cannot build a command for a screen without a name".into(),
            ));
        }
        Ok(vec![XRANDR.into(), "--output".into(), self.name.clone()])
    }

    fn mark_applied(&mut self) {
        self.applied = self.staged.clone();
        self.custom_resolution = false;
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, primary: {}, modes: {}, conn: {}, rot: {}, enabled: {}>",
            self.name,
            self.staged.primary,
            self.modes.len(),
            self.connected,
            self.staged.rotation.map_or("None", Rotation::name),
            self.staged.enabled
        )
    }
}

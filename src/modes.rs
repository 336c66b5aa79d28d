use core::fmt;
use serde::Serialize;

/// Width and height of a mode, in pixels
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Resolution {
        Resolution { width, height }
    }

    /// `WxH`, the form xrandr expects after `--mode`
    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Resolution {
        Resolution { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One resolution / refresh rate pair reported for a screen.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mode {
    width: u32,
    height: u32,
    refresh_rate: f64,
    current: bool,
    preferred: bool,
}

impl Mode {
    pub fn new(width: u32, height: u32, refresh_rate: f64, current: bool, preferred: bool) -> Mode {
        Mode {
            width,
            height,
            refresh_rate,
            current,
            preferred,
        }
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    pub fn resolution_label(&self) -> String {
        self.resolution().label()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn refresh_rate(&self) -> f64 {
        self.refresh_rate
    }

    pub fn current(&self) -> bool {
        self.current
    }

    pub fn preferred(&self) -> bool {
        self.preferred
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}x{}, {}, curr: {}, pref: {}>",
            self.width, self.height, self.refresh_rate, self.current, self.preferred
        )
    }
}

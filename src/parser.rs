use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::modes::Mode;
use crate::policy::Rotation;
use crate::screen::Screen;

lazy_static! {
    static ref MODE_LINE: Regex =
        Regex::new(r"^\s+(\d+)x(\d+)\s+((?:\d+\.)?\d+)\s*(\*)?\s*(\+)?").unwrap();
    static ref HEADER_LINE: Regex = Regex::new(r"\b(?:dis)?connected\b").unwrap();
}

/// Parse the output of a bare `xrandr` call into screens, in the order listed.
///
/// Disconnected outputs are included; see [`Screen::is_connected`].
pub fn parse_xrandr<I, S>(lines: I) -> Vec<Screen>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut screens = Vec::new();
    let mut header: Option<String> = None;
    let mut modes = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if HEADER_LINE.is_match(line) {
            if let Some(previous) = header.take() {
                screens.push(screen_from_header(&previous, std::mem::take(&mut modes)));
            }
            trace!("header: {line}");
            header = Some(line.to_string());
        } else if let Some(mode) = parse_mode_line(line) {
            if header.is_some() {
                trace!("mode: {mode}");
                modes.push(mode);
            }
        }
    }
    if let Some(last) = header {
        screens.push(screen_from_header(&last, modes));
    }
    screens
}

/// `   1920x1080     60.00*+  50.00` → 1920x1080 @ 60, current, preferred
pub fn parse_mode_line(line: &str) -> Option<Mode> {
    let caps = MODE_LINE.captures(line)?;
    let width = caps[1].parse().ok()?;
    let height = caps[2].parse().ok()?;
    let refresh_rate = caps[3].parse().ok()?;
    Some(Mode::new(
        width,
        height,
        refresh_rate,
        caps.get(4).is_some(),
        caps.get(5).is_some(),
    ))
}

fn screen_from_header(header: &str, modes: Vec<Mode>) -> Screen {
    let name = header.split(' ').next().unwrap_or_default();
    let tokens: Vec<&str> = header.split_whitespace().collect();

    // The rotation sits after the geometry and before the "(normal left ...)" list.
    let rotation = if modes.is_empty() {
        None
    } else {
        tokens
            .iter()
            .skip(2)
            .take_while(|t| !t.starts_with('('))
            .find_map(|t| Rotation::from_name(t).ok())
    };

    Screen::new(name, header.contains("primary"), rotation, modes)
}

use ratatui::style::Color;

/// Semantic colour of a meta pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Success,
    Warning,
    Info,
    Danger,
    #[default]
    Neutral,
}

/// Foreground/background pair a tone renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TonePalette {
    pub fg: Color,
    pub bg: Color,
}

impl Tone {
    /// Parses a tone name. Unrecognised names fall back to `Neutral`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Tone::Success,
            "warning" => Tone::Warning,
            "info" => Tone::Info,
            "danger" => Tone::Danger,
            _ => Tone::Neutral,
        }
    }

    /// Maps a workflow status label (job, candidate, round) to a tone.
    pub fn from_status(status: &str) -> Self {
        match status {
            "Not Started" | "On Hold" | "New" | "Not Submitted" | "Scheduled" => Tone::Neutral,
            "In Progress" | "Submitted" | "Open" | "Interviews Progress" => Tone::Warning,
            "Completed" | "Passed" | "Fulfilled" | "Selected" => Tone::Success,
            "Closed" | "Failed" | "Cancelled" | "Not Selected" => Tone::Danger,
            _ => Tone::Info,
        }
    }

    pub fn palette(self) -> TonePalette {
        match self {
            Tone::Success => TonePalette {
                fg: Color::Rgb(0x16, 0x65, 0x34),
                bg: Color::Rgb(0xdc, 0xfc, 0xe7),
            },
            Tone::Warning => TonePalette {
                fg: Color::Rgb(0x92, 0x40, 0x0e),
                bg: Color::Rgb(0xfe, 0xf3, 0xc7),
            },
            Tone::Info => TonePalette {
                fg: Color::Rgb(0x1e, 0x40, 0xaf),
                bg: Color::Rgb(0xdb, 0xea, 0xfe),
            },
            Tone::Danger => TonePalette {
                fg: Color::Rgb(0x99, 0x1b, 0x1b),
                bg: Color::Rgb(0xfe, 0xe2, 0xe2),
            },
            Tone::Neutral => TonePalette {
                fg: Color::Rgb(0x26, 0x26, 0x26),
                bg: Color::Rgb(0xf5, 0xf5, 0xf5),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Tone::parse("Success"), Tone::Success);
        assert_eq!(Tone::parse(" danger "), Tone::Danger);
    }

    #[test]
    fn unknown_tone_is_neutral() {
        assert_eq!(Tone::parse("purple"), Tone::Neutral);
        assert_eq!(Tone::parse(""), Tone::Neutral);
    }

    #[test]
    fn status_groups() {
        assert_eq!(Tone::from_status("Open"), Tone::Warning);
        assert_eq!(Tone::from_status("Selected"), Tone::Success);
        assert_eq!(Tone::from_status("Not Selected"), Tone::Danger);
        assert_eq!(Tone::from_status("On Hold"), Tone::Neutral);
        assert_eq!(Tone::from_status("Something Else"), Tone::Info);
    }

    #[test]
    fn palettes_are_distinct() {
        let tones = [
            Tone::Success,
            Tone::Warning,
            Tone::Info,
            Tone::Danger,
            Tone::Neutral,
        ];
        for (i, a) in tones.iter().enumerate() {
            for b in tones.iter().skip(i + 1) {
                assert_ne!(a.palette(), b.palette());
            }
        }
    }
}

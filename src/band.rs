use std::fmt;

/// Highest band on the scale, in hundredths.
pub const MAX_BAND_HUNDREDTHS: u16 = 900;

/// Distance between two dropdown options, in hundredths.
const STEP_HUNDREDTHS: u16 = 50;

/// An exam band score stored as exact hundredths of a band.
///
/// Dropdown values sit on the half-band grid (0.0, 0.5, ..., 9.0), but the
/// calculator works on any value in range, so the type does not enforce the
/// grid. Use [`Band::options`] for the selectable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Band(u16);

impl Band {
    pub const MIN: Band = Band(0);
    pub const MAX: Band = Band(MAX_BAND_HUNDREDTHS);

    /// Returns `None` when the value lies above 9.0.
    pub fn from_hundredths(hundredths: u16) -> Option<Self> {
        (hundredths <= MAX_BAND_HUNDREDTHS).then_some(Self(hundredths))
    }

    /// Parses a decimal band such as `6.5`. Values outside 0.0..=9.0 or not on
    /// the half-band grid are rejected.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let hundredths = (value * 100.0).round();
        if hundredths > MAX_BAND_HUNDREDTHS as f64 {
            return None;
        }
        let hundredths = hundredths as u16;
        (hundredths % STEP_HUNDREDTHS == 0).then_some(Self(hundredths))
    }

    pub fn hundredths(self) -> u16 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// All values selectable for the current band: 0.0 through 9.0.
    pub fn options() -> impl Iterator<Item = Band> {
        (0..=MAX_BAND_HUNDREDTHS)
            .step_by(STEP_HUNDREDTHS as usize)
            .map(Band)
    }

    /// Values selectable for the target band. A target of 0.0 makes no sense,
    /// so the list starts at 0.5.
    pub fn target_options() -> impl Iterator<Item = Band> {
        Self::options().filter(|b| b.0 > 0)
    }

    /// Next half-band option, saturating at 9.0.
    pub fn step_up(self) -> Self {
        let next = (self.0 / STEP_HUNDREDTHS + 1) * STEP_HUNDREDTHS;
        Self(next.min(MAX_BAND_HUNDREDTHS))
    }

    /// Previous half-band option, saturating at `floor`.
    pub fn step_down(self, floor: Band) -> Self {
        let prev = if self.0 % STEP_HUNDREDTHS != 0 {
            (self.0 / STEP_HUNDREDTHS) * STEP_HUNDREDTHS
        } else {
            self.0.saturating_sub(STEP_HUNDREDTHS)
        };
        Self(prev.max(floor.0))
    }
}

impl Default for Band {
    fn default() -> Self {
        Self::MIN
    }
}

/// Bands display with one decimal, the way the score cards show them.
impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.as_f64())
    }
}

/// Formats hundredths of a band as a fixed two-decimal string, e.g. `0.05`.
pub fn format_hundredths(hundredths: u32) -> String {
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

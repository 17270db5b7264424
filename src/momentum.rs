use crate::band::{format_hundredths, MAX_BAND_HUNDREDTHS};
use crate::form::InputRecord;
use crate::task::{CompletionState, Task, TASKS};

/// Progress at or above this percentage counts as on track.
pub const ON_TRACK_PERCENT: u8 = 50;

/// Everything the dashboard shows that is derived from the profile and the
/// ticked tasks. Recompute it whenever either changes; never store it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub predicted_score: f64,
    pub progress_percent: u8,
    pub is_on_track: bool,
    pub completed_count: usize,
    /// Sum of the gains of the ticked tasks, before clamping.
    pub gained: f64,
    /// Predicted score with every task ticked.
    pub max_possible: f64,
    predicted_hundredths: u32,
    current_hundredths: u32,
}

impl DerivedMetrics {
    /// Gain badge text, e.g. `+0.20`. Measured from the clamped prediction,
    /// so near the top of the scale it can be less than `gained`.
    pub fn gain_badge(&self) -> String {
        format!(
            "+{}",
            format_hundredths(self.predicted_hundredths - self.current_hundredths)
        )
    }
}

/// Derives the dashboard metrics for the built-in task catalog.
pub fn calculate(input: &InputRecord, completion: &CompletionState) -> DerivedMetrics {
    calculate_with(&TASKS, input, completion)
}

/// Derives the dashboard metrics for an arbitrary catalog.
///
/// All arithmetic happens in hundredths of a band, which makes the
/// two-decimal rounding exact.
pub fn calculate_with(
    tasks: &[Task],
    input: &InputRecord,
    completion: &CompletionState,
) -> DerivedMetrics {
    let current = input.current_band().hundredths() as u32;
    let target = input.target_band().hundredths() as u32;

    let gained: u32 = tasks
        .iter()
        .filter(|t| completion.is_done(t.id))
        .map(|t| t.gain_hundredths)
        .sum();
    let all_tasks: u32 = tasks.iter().map(|t| t.gain_hundredths).sum();

    let predicted = clamp_to_scale(current + gained);
    let progress_percent = progress_percent(gained, target as i64 - current as i64);

    DerivedMetrics {
        predicted_score: predicted as f64 / 100.0,
        progress_percent,
        is_on_track: progress_percent >= ON_TRACK_PERCENT,
        completed_count: tasks.iter().filter(|t| completion.is_done(t.id)).count(),
        gained: gained as f64 / 100.0,
        max_possible: clamp_to_scale(current + all_tasks) as f64 / 100.0,
        predicted_hundredths: predicted,
        current_hundredths: current,
    }
}

fn clamp_to_scale(hundredths: u32) -> u32 {
    hundredths.min(MAX_BAND_HUNDREDTHS as u32)
}

/// `round(gained / gap * 100)`, capped at 100. A closed (or negative) gap is
/// fully on track.
fn progress_percent(gained: u32, gap: i64) -> u8 {
    if gap <= 0 {
        return 100;
    }
    // round half up on integers
    let pct = (gained as i64 * 200 + gap) / (gap * 2);
    pct.min(100) as u8
}

use std::collections::HashMap;

use crate::band::format_hundredths;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TaskId {
    Listening,
    Reading,
    Writing,
    Speaking,
}

/// Accent used when drawing a task card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Teal,
    Violet,
    Rose,
}

/// One entry of the daily study plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Score gained by completing the task, in hundredths of a band.
    pub gain_hundredths: u32,
    pub tone: Tone,
}

impl Task {
    pub fn score_gain(&self) -> f64 {
        self.gain_hundredths as f64 / 100.0
    }

    /// Tag text shown on the task card, e.g. `+0.05`.
    pub fn tag(&self) -> String {
        format!("+{}", format_hundredths(self.gain_hundredths))
    }
}

/// The daily plan, in display order.
pub const TASKS: [Task; 4] = [
    Task {
        id: TaskId::Listening,
        icon: "🎧",
        label: "Listening Practice",
        description: "Complete one full IELTS Listening section. Focus on note completion and multiple-choice questions.",
        gain_hundredths: 5,
        tone: Tone::Blue,
    },
    Task {
        id: TaskId::Reading,
        icon: "📖",
        label: "Reading Practice",
        description: "Read one academic passage. Practise True/False/Not Given and skimming strategies.",
        gain_hundredths: 5,
        tone: Tone::Teal,
    },
    Task {
        id: TaskId::Writing,
        icon: "✍️",
        label: "Writing Task",
        description: "Write a 250+ word Task 2 essay. Self-evaluate coherence, cohesion, and vocabulary range.",
        gain_hundredths: 10,
        tone: Tone::Violet,
    },
    Task {
        id: TaskId::Speaking,
        icon: "🗣️",
        label: "Speaking Exercise",
        description: "Record yourself on a Part 2 cue card. Review filler words and pronunciation.",
        gain_hundredths: 10,
        tone: Tone::Rose,
    },
];

pub fn task(id: TaskId) -> &'static Task {
    // every TaskId variant has exactly one catalog entry
    TASKS
        .iter()
        .find(|t| t.id == id)
        .unwrap_or(&TASKS[0])
}

/// Which tasks have been ticked off today.
///
/// Ids missing from the map count as not done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionState {
    done: HashMap<TaskId, bool>,
}

impl CompletionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self, id: TaskId) -> bool {
        self.done.get(&id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: TaskId, done: bool) {
        self.done.insert(id, done);
    }

    /// Flips the task and returns its new state.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let now = !self.is_done(id);
        self.set(id, now);
        now
    }

    pub fn completed_count(&self) -> usize {
        self.done.values().filter(|done| **done).count()
    }

    pub fn clear(&mut self) {
        self.done.clear();
    }
}

impl FromIterator<TaskId> for CompletionState {
    fn from_iter<I: IntoIterator<Item = TaskId>>(iter: I) -> Self {
        Self {
            done: iter.into_iter().map(|id| (id, true)).collect(),
        }
    }
}

use tracing::debug;

use crate::form::InputRecord;
use crate::momentum::{calculate, DerivedMetrics};
use crate::task::{CompletionState, TaskId, Tone, TASKS};

/// Read-only view of one task card
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub id: TaskId,
    pub icon: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub tag: String,
    pub tone: Tone,
    pub done: bool,
    pub selected: bool,
}

/// The dashboard: a submitted profile plus today's checklist.
#[derive(Debug, Clone)]
pub struct PlanPresenter {
    input: InputRecord,
    completion: CompletionState,
    selected: usize,
}

impl PlanPresenter {
    pub fn new(input: InputRecord) -> Self {
        Self {
            input,
            completion: CompletionState::new(),
            selected: 0,
        }
    }

    pub fn input(&self) -> &InputRecord {
        &self.input
    }

    pub fn completion(&self) -> &CompletionState {
        &self.completion
    }

    /// Fresh metrics for the current completion state.
    pub fn metrics(&self) -> DerivedMetrics {
        calculate(&self.input, &self.completion)
    }

    /// Flips a task and returns the recomputed metrics.
    pub fn toggle(&mut self, id: TaskId) -> DerivedMetrics {
        let done = self.completion.toggle(id);
        let metrics = self.metrics();
        debug!(
            task = %id,
            done,
            predicted = metrics.predicted_score,
            progress = metrics.progress_percent,
            "task toggled"
        );
        metrics
    }

    /// Toggles the n-th task of the catalog (0-based). Out of range does
    /// nothing.
    pub fn toggle_nth(&mut self, index: usize) -> Option<DerivedMetrics> {
        let id = TASKS.get(index)?.id;
        self.selected = index;
        Some(self.toggle(id))
    }

    pub fn toggle_selected(&mut self) -> DerivedMetrics {
        let id = TASKS[self.selected.min(TASKS.len() - 1)].id;
        self.toggle(id)
    }

    pub fn selected(&self) -> TaskId {
        TASKS[self.selected.min(TASKS.len() - 1)].id
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < TASKS.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn task_views(&self) -> Vec<TaskView> {
        TASKS
            .iter()
            .enumerate()
            .map(|(idx, t)| TaskView {
                id: t.id,
                icon: t.icon,
                label: t.label,
                description: t.description,
                tag: t.tag(),
                tone: t.tone,
                done: self.completion.is_done(t.id),
                selected: idx == self.selected,
            })
            .collect()
    }

    pub fn task_count(&self) -> usize {
        TASKS.len()
    }
}

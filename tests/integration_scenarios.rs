// Worked examples for the momentum calculator, exercised through the public
// session API the way the dashboard uses it.

use assert_matches::assert_matches;
use momentum::band::Band;
use momentum::form::FormDefaults;
use momentum::task::{CompletionState, TaskId};
use momentum::{calculate, InputRecord, Session, ValidationError};

fn band(v: f64) -> Band {
    Band::from_f64(v).unwrap()
}

fn session_with(current: f64, target: f64) -> Session {
    let mut session = Session::new(FormDefaults {
        current_band: band(current),
        target_band: band(target),
        ..FormDefaults::default()
    });
    session.submit().expect("valid profile");
    session
}

#[test]
fn nothing_checked() {
    let session = session_with(5.5, 7.0);
    let m = session.plan().unwrap().metrics();
    assert_eq!(m.predicted_score, 5.5);
    assert_eq!(m.progress_percent, 0);
    assert!(!m.is_on_track);
}

#[test]
fn writing_and_speaking_checked() {
    let mut session = session_with(5.5, 7.0);
    let plan = session.plan_mut().unwrap();
    plan.toggle(TaskId::Writing);
    let m = plan.toggle(TaskId::Speaking);
    assert_eq!(m.gained, 0.2);
    assert_eq!(m.predicted_score, 5.7);
    assert_eq!(m.progress_percent, 13);
    assert!(!m.is_on_track);
}

#[test]
fn all_four_checked() {
    let mut session = session_with(5.5, 7.0);
    let plan = session.plan_mut().unwrap();
    for id in [
        TaskId::Listening,
        TaskId::Reading,
        TaskId::Writing,
        TaskId::Speaking,
    ] {
        plan.toggle(id);
    }
    let m = plan.metrics();
    assert_eq!(m.predicted_score, 5.8);
    assert_eq!(m.progress_percent, 20);
    assert!(!m.is_on_track);
    assert_eq!(m.completed_count, 4);
}

#[test]
fn exactly_fifty_percent_is_on_track() {
    let mut session = session_with(6.5, 7.0);
    let plan = session.plan_mut().unwrap();
    plan.toggle(TaskId::Writing);
    let m = plan.toggle(TaskId::Speaking);
    assert_eq!(m.progress_percent, 40);
    assert!(!m.is_on_track);

    let m = plan.toggle(TaskId::Listening);
    assert_eq!(m.gained, 0.25);
    assert_eq!(m.progress_percent, 50);
    assert!(m.is_on_track);
}

#[test]
fn predicted_score_clamps_at_nine() {
    let input = InputRecord::try_new(
        Band::from_hundredths(890).unwrap(),
        Band::MAX,
        Some(10),
        Some(2.0),
    )
    .unwrap();
    let all: CompletionState = [
        TaskId::Listening,
        TaskId::Reading,
        TaskId::Writing,
        TaskId::Speaking,
    ]
    .into_iter()
    .collect();
    let m = calculate(&input, &all);
    assert_eq!(m.predicted_score, 9.0);
    assert_eq!(m.progress_percent, 100);
}

#[test]
fn target_not_above_current_never_reaches_the_plan() {
    let mut session = Session::new(FormDefaults {
        current_band: band(7.0),
        target_band: band(7.0),
        ..FormDefaults::default()
    });
    assert_matches!(session.submit(), Err(errors) => {
        assert_eq!(
            errors.iter().copied().collect::<Vec<_>>(),
            vec![ValidationError::TargetNotAboveCurrent]
        );
    });
    assert!(session.plan().is_none());
}

#[test]
fn reset_always_clears_completion() {
    let mut session = session_with(5.5, 7.0);
    session.plan_mut().unwrap().toggle(TaskId::Reading);
    session.reset();
    session.reset();
    assert!(session.is_collecting_input());

    session.submit().unwrap();
    assert_eq!(session.plan().unwrap().metrics().completed_count, 0);
}

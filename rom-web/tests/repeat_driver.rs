//! Repeat runs driven by a real (paused) tokio clock

use std::cell::RefCell;
use std::time::Duration;

use rom_web::scheduler::{drive, drive_repeat};
use rom_web::{
    Landmark, LandmarkFrame, NoopSink, RomConfig, SchedulerState, Session, SharedFrame, TickOutcome,
};

/// Flat open hand, fingers along +y
fn open_hand() -> LandmarkFrame {
    let mut data = Vec::with_capacity(21);
    data.push(Landmark::new(0.5, 0.9, 0.0));
    for finger in 0..5 {
        let x = 0.3 + 0.1 * finger as f64;
        for joint in 0..4 {
            data.push(Landmark::new(x, 0.6 - 0.1 * joint as f64, -0.01 * joint as f64));
        }
    }
    LandmarkFrame::from_landmarks(&data).unwrap()
}

fn session_with(frame: &SharedFrame) -> RefCell<Session> {
    RefCell::new(Session::new(RomConfig::default(), frame.clone(), NoopSink))
}

#[tokio::test(start_paused = true)]
async fn test_three_ticks_then_idle() {
    let frame = SharedFrame::new();
    frame.set(open_hand());
    let session = session_with(&frame);

    let outcome = drive_repeat(&session, 3, Duration::from_millis(10)).await.unwrap();
    assert_eq!(outcome, TickOutcome::Finished);

    let session = session.borrow();
    assert_eq!(session.state(), SchedulerState::Idle);

    let results = session.results();
    assert_eq!(results.len(), 3);
    assert!(results.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[tokio::test(start_paused = true)]
async fn test_first_tick_waits_one_interval() {
    let frame = SharedFrame::new();
    frame.set(open_hand());
    let session = session_with(&frame);

    let start = tokio::time::Instant::now();
    drive_repeat(&session, 2, Duration::from_millis(300)).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(600));
}

#[tokio::test(start_paused = true)]
async fn test_no_hand_counts_ticks_without_results() {
    let frame = SharedFrame::new();
    let session = session_with(&frame);

    let outcome = drive_repeat(&session, 4, Duration::from_millis(10)).await.unwrap();
    assert_eq!(outcome, TickOutcome::Finished);
    assert!(session.borrow().results().is_empty());
    assert!(!session.borrow().is_running());
}

#[tokio::test(start_paused = true)]
async fn test_restart_supersedes_running_drive() {
    let frame = SharedFrame::new();
    frame.set(open_hand());
    let session = session_with(&frame);

    let first = session.borrow_mut().start_repeat(100, Duration::from_millis(10)).unwrap();
    let old = drive(&session, first);

    let restart = async {
        tokio::time::sleep(Duration::from_millis(35)).await;
        drive_repeat(&session, 2, Duration::from_millis(10)).await.unwrap()
    };

    let (old_outcome, new_outcome) = tokio::join!(old, restart);
    assert_eq!(old_outcome, TickOutcome::Stale);
    assert_eq!(new_outcome, TickOutcome::Finished);
    assert_eq!(session.borrow().results().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_zero_count_is_rejected() {
    let session = session_with(&SharedFrame::new());
    assert!(drive_repeat(&session, 0, Duration::from_millis(10)).await.is_err());
}

//! Headless replay through the library API

use npt::replay::{self, ReplayPlan};
use npt::session::state::FINAL_STEP;

fn timeline(plan: &ReplayPlan) -> String {
    replay::run(plan)
        .snapshot
        .output
        .iter()
        .map(|line| format!("[{}] {}", line.at, line.content))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_effect_timeline() {
    let plan = ReplayPlan::new(1)
        .command("coffee --refill")
        .command("vim wishlist.txt")
        .command("foo");
    insta::assert_snapshot!("effect_timeline", timeline(&plan));
}

#[test]
fn settle_time_is_respected() {
    let mut plan = ReplayPlan::new(1).command("vim wishlist.txt");
    plan.settle_ms = 1_000;
    let report = replay::run(&plan);
    // Third vim line lands at +1500, after the settle window
    assert_eq!(report.snapshot.output.len(), 4);
}

#[test]
fn replay_without_commands_shows_full_narrative() {
    let report = replay::run(&ReplayPlan::new(12));
    assert_eq!(report.snapshot.step, FINAL_STEP);
    let text = report.to_text();
    assert!(text.contains("🎁 Access Wishlist Portal → https://"));
}

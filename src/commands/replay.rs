//! Headless replay handler

use anyhow::Result;

use npt::cli::ReplayArgs;
use npt::replay::{self, ReplayPlan};
use npt::Config;

pub fn handle_replay(args: &ReplayArgs, config: &Config) -> Result<()> {
    let seed = args
        .seed
        .or(config.session.seed)
        .unwrap_or_else(rand::random);

    let plan = ReplayPlan {
        seed,
        commands: args.commands.clone(),
        gap_ms: args.gap_ms,
        settle_ms: args.settle_ms,
        portal_url: config.portal.url.clone(),
    };
    let report = replay::run(&plan);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

//! `tally` — runs the fixed demo sequence over every module.
//!
//! No arguments; each demo seeds its own data, prints a human-readable
//! listing to stdout, and logs expected failures without aborting.

mod demos;

fn main() -> anyhow::Result<()> {
    tally_observability::init();
    tracing::info!("tally demo starting");

    demos::accounts::run();
    demos::orders::run();
    demos::inventory::run();
    demos::grading::run()?;
    demos::stocklog::run()?;

    tracing::info!("tally demo finished");
    Ok(())
}

use anyhow::Result;
use ganttgen::{plan, render};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::Path;

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let plan = plan::mvp_six_week();
    plan.validate()?;

    render::export_png(plan, Path::new("gantt_chart.png"))?;
    render::export_svg(plan, Path::new("gantt_chart.svg"))?;

    log::info!("Saved gantt_chart.png and gantt_chart.svg");
    Ok(())
}

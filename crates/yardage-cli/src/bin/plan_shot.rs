//! Plan a shot path for one hole and print it.

use anyhow::Result;
use clap::Parser;
use yardage_cli::source::{CourseArgs, PlayerArgs};
use yardage_cli::{init_tracing, Config, PlanReport};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    course: CourseArgs,

    #[command(flatten)]
    player: PlayerArgs,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();
    let config = Config::from_env();

    let course = args.course.load(&config).await?;
    let hole = course.hole(args.course.hole)?;
    let start = args.player.start(&hole)?;
    let clubs = args.player.clubs(&config)?;
    let planner = args.player.planner_config(&config);

    let context = hole.context(clubs);
    let plan = context.plan_from(start, &planner)?;
    if !plan.is_complete() {
        tracing::warn!(status = ?plan.status, "plan does not reach the flag");
    }

    let report = PlanReport::new(context.hole_number, start, context.target, &context.clubs, plan);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text());
    }

    Ok(())
}

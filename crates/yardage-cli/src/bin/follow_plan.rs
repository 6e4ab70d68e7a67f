//! Simulate a player walking a hole, re-planning on every position update.
//!
//! Each tick the player "hits" to the next planned waypoint, lands with some
//! GPS-style scatter, and the planner runs again from the new position.

use anyhow::Result;
use clap::Parser;
use rand::Rng;
use tokio::time::{interval, Duration};
use yardage_cli::report::compass_point;
use yardage_cli::source::{CourseArgs, PlayerArgs};
use yardage_cli::{init_tracing, Config};
use yardage_core::spatial::offset_position;
use yardage_core::{distance_m, GeoPoint};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(flatten)]
    course: CourseArgs,

    #[command(flatten)]
    player: PlayerArgs,

    /// Position updates per second
    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    /// Maximum landing error per shot in meters
    #[arg(long, default_value_t = 8.0)]
    jitter_m: f64,

    /// Give up after this many shots
    #[arg(long, default_value_t = 12)]
    max_shots: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();
    let config = Config::from_env();

    if !(args.rate.is_finite() && args.rate > 0.0) {
        anyhow::bail!("--rate must be a positive number");
    }

    let course = args.course.load(&config).await?;
    let hole = course.hole(args.course.hole)?;
    let context = hole.context(args.player.clubs(&config)?);
    let planner = args.player.planner_config(&config);
    let mut position = args.player.start(&hole)?;

    println!(
        "Hole {}: {:.1}m to the flag",
        context.hole_number,
        distance_m(position, context.target)
    );

    let mut ticker = interval(Duration::from_secs_f64(1.0 / args.rate));
    let mut rng = rand::rng();

    for shot in 1..=args.max_shots {
        ticker.tick().await;

        let plan = context.plan_from(position, &planner)?;
        let Some(next) = plan.waypoints.first() else {
            println!("No reachable point from here ({:?}), picking up.", plan.status);
            return Ok(());
        };
        let holing_out = next.point == context.target;

        let landing = scatter(&mut rng, next.point, args.jitter_m);
        println!(
            "Shot {}: {:.1}m {} ({:.0}°), {} legs planned, landed {:.1}m from the flag",
            shot,
            next.leg_distance_m,
            compass_point(next.bearing_deg),
            next.bearing_deg,
            plan.waypoints.len(),
            distance_m(landing, context.target)
        );
        tracing::debug!(
            shot,
            status = ?plan.status,
            lat = landing.lat,
            lon = landing.lon,
            "position update"
        );
        position = landing;

        if holing_out {
            println!("On the green in {}.", shot);
            return Ok(());
        }
    }

    println!("Gave up after {} shots.", args.max_shots);
    Ok(())
}

fn scatter<R: Rng>(rng: &mut R, aim: GeoPoint, jitter_m: f64) -> GeoPoint {
    if !jitter_m.is_finite() || jitter_m <= 0.0 {
        return aim;
    }
    let north_m = rng.random_range(-jitter_m..jitter_m);
    let east_m = rng.random_range(-jitter_m..jitter_m);
    offset_position(aim, north_m, east_m)
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use gate_core::{journey, seed, ClockTime, Station, StationStatus, TruckActivity};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "gate_cli", about = "Weighbridge gate monitor headless runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation for a fixed number of ticks with a synthetic clock.
    Run {
        #[arg(long)]
        ticks: u64,
        /// RNG seed; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Synthetic clock start, colon shape.
        #[arg(long, default_value = "08:00")]
        start_time: String,
        /// Minutes the synthetic clock advances per tick.
        #[arg(long, default_value_t = 5)]
        clock_step_mins: u32,
        #[arg(long, default_value_t = 10)]
        print_every: u64,
        /// After the run, reconstruct and print the newest activity's journey.
        #[arg(long)]
        journey: bool,
        /// Dump the final station/activity snapshot as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// Run loop
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn run(
    ticks: u64,
    seed: Option<u64>,
    start_time: &str,
    clock_step_mins: u32,
    print_every: u64,
    show_journey: bool,
    json: bool,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut clock: ClockTime = start_time
        .parse()
        .with_context(|| format!("parsing --start-time {start_time:?}"))?;

    let mut stations = seed::initial_stations();
    let mut activities = seed::initial_activities();

    println!("Starting run: ticks={ticks} seed={seed} start={clock} step={clock_step_mins}m");
    println!("{}", "-".repeat(72));

    for tick in 1..=ticks {
        gate_core::tick_stations(&mut stations, clock, &mut rng);
        if let Some(row) = gate_core::maybe_append(&mut activities, clock, &mut rng) {
            println!(
                "[tick={tick:04} {clock}]  + {} at {} ({})",
                row.truck_id,
                row.location.label(),
                row.status.label(),
            );
        }
        if print_every > 0 && tick % print_every == 0 {
            print_stations(tick, clock, &stations);
        }
        clock = clock.add_minutes(clock_step_mins as i32);
    }

    println!("{}", "-".repeat(72));
    if json {
        let snapshot = serde_json::json!({
            "seed": seed,
            "stations": stations,
            "activities": activities,
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_stations(ticks, clock, &stations);
        println!("Activity log: {} rows", activities.len());
    }

    if show_journey {
        match activities.first() {
            Some(newest) => print_journey(newest, &mut rng),
            None => println!("No activities logged; nothing to reconstruct."),
        }
    }

    Ok(())
}

fn print_stations(tick: u64, clock: ClockTime, stations: &[Station]) {
    let line: Vec<String> = stations
        .iter()
        .map(|s| {
            let marker = match s.status {
                StationStatus::Active => "A",
                StationStatus::Warning => "W",
                StationStatus::Idle => "-",
            };
            format!("{} [{marker}] {}", s.kind.label(), s.process_status)
        })
        .collect();
    println!("[tick={tick:04} {clock}]  {}", line.join("  |  "));
}

fn print_journey(activity: &TruckActivity, rng: &mut ChaCha8Rng) {
    let journey = journey::reconstruct(activity, rng);
    println!();
    println!(
        "Journey {} / {} — {:?}",
        journey.truck_id, journey.po_number, journey.overall_status
    );
    println!(
        "  start={}  end={}  duration={}",
        journey::display_start_time(&journey),
        journey
            .end_time
            .map_or_else(|| "--.--".to_string(), |t| t.to_string()),
        journey::display_duration(&journey).unwrap_or_else(|| "n/a".to_string()),
    );
    for step in &journey.steps {
        println!(
            "  {:8} {:11?} time={} {}",
            step.kind.label(),
            step.status,
            step.timestamp
                .map_or_else(|| "--.--".to_string(), |t| t.to_string()),
            step.weight.as_deref().unwrap_or(""),
        );
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            ticks,
            seed,
            start_time,
            clock_step_mins,
            print_every,
            journey,
            json,
        } => run(
            ticks,
            seed,
            &start_time,
            clock_step_mins,
            print_every,
            journey,
            json,
        ),
    }
}

//! town — terminal driver for the villagetown daily-cycle simulation.
//!
//! Six villagers live in a 20 × 20 town.  Every tick advances the clock ten
//! minutes; villagers drift toward wherever the hour sends them and the
//! journal follows one of them per day.
//!
//! ```text
//! town                         # one day, map every hour
//! town --days 3 --every 0      # headless, summary only
//! town --realtime --every 1    # one tick every 900 ms
//! town --output output/town    # also write CSV snapshots and journal
//! RUST_LOG=debug town          # log every phase transition
//! ```

mod render;
mod town;


use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use vt_behavior::StandardBehavior;
use vt_core::{GridPoint, MINUTES_PER_DAY, Tick, TownClock, TownConfig, VillagerId};
use vt_output::{CsvWriter, SimOutputObserver};
use vt_schedule::{Phase, load_schedule_csv};
use vt_sim::{JournalEntry, SimBuilder, SimObserver};
use vt_villager::Roster;

use town::{TownLayout, residents};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Run the pixel town daily cycle in the terminal
#[derive(Parser, Debug)]
#[command(name = "town")]
struct Args {
    /// JSON config file; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV schedule (`start_hour,phase`) replacing the standard day
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Number of ticks to run (overrides `total_ticks` in the config)
    #[arg(long, conflicts_with = "days")]
    ticks: Option<u64>,

    /// Number of simulated days to run
    #[arg(long)]
    days: Option<u64>,

    /// Name of the villager to follow at start
    #[arg(long)]
    focus: Option<String>,

    /// Focus whoever stands at `x,y` (tile units) before the run starts
    #[arg(long, value_parser = parse_point)]
    select: Option<GridPoint>,

    /// Redraw the map every N ticks; 0 runs headless
    #[arg(long, default_value_t = 6)]
    every: u64,

    /// Sleep `tick_interval_ms` between ticks
    #[arg(long)]
    realtime: bool,

    /// Write villager_snapshots.csv and journal.csv into this directory
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_point(s: &str) -> Result<GridPoint, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(GridPoint::new(x, y))
}

fn load_config(path: Option<&Path>) -> Result<TownConfig> {
    let Some(path) = path else {
        return Ok(TownConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts what happened and forwards to the CSV observer when one is set.
struct DemoObserver {
    output:        Option<SimOutputObserver<CsvWriter>>,
    transitions:   usize,
    rollovers:     usize,
    journal_rows:  usize,
    snapshot_rows: usize,
}

impl DemoObserver {
    fn new(output: Option<SimOutputObserver<CsvWriter>>) -> Self {
        Self { output, transitions: 0, rollovers: 0, journal_rows: 0, snapshot_rows: 0 }
    }
}

impl SimObserver for DemoObserver {
    fn on_day_rollover(&mut self, _tick: Tick, _day: u32, _focus: VillagerId) {
        self.rollovers += 1;
    }

    fn on_transition(&mut self, _tick: Tick, _villager: VillagerId, _from: Phase, _to: Phase) {
        self.transitions += 1;
    }

    fn on_journal_entry(&mut self, tick: Tick, clock: &TownClock, entry: &JournalEntry) {
        self.journal_rows += 1;
        if let Some(out) = &mut self.output {
            out.on_journal_entry(tick, clock, entry);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, clock: &TownClock, roster: &Roster) {
        if let Some(out) = &mut self.output {
            self.snapshot_rows += roster.len();
            out.on_snapshot(tick, clock, roster);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(out) = &mut self.output {
            out.on_sim_end(final_tick);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();

    // 1. Config: file, then CLI overrides.
    let mut config = load_config(args.config.as_deref())?;
    config.validate()?;
    let ticks_per_day = (MINUTES_PER_DAY / config.step_minutes) as u64;
    let total_ticks = match (args.ticks, args.days) {
        (Some(t), _)    => t,
        (None, Some(d)) => d * ticks_per_day,
        (None, None)    => config.total_ticks.unwrap_or(ticks_per_day),
    };
    config.total_ticks = Some(total_ticks);

    // 2. Town and residents.
    let layout = TownLayout::standard();
    let roster = residents(&layout)?;

    let focus = match &args.focus {
        Some(name) => roster
            .find(name)
            .with_context(|| format!("no villager named {name:?}"))?,
        None => VillagerId(0),
    };

    // 3. Sim.
    let mut builder = SimBuilder::new(config.clone(), roster, StandardBehavior).focus(focus);
    if let Some(path) = &args.schedule {
        let schedule = load_schedule_csv(path)
            .with_context(|| format!("loading schedule {}", path.display()))?;
        info!(blocks = schedule.len(), path = %path.display(), "custom schedule");
        builder = builder.schedule(schedule);
    }
    let mut sim = builder.build()?;

    if let Some(point) = args.select {
        match sim.select_at(point) {
            Some(id) => info!(villager = %sim.roster().profile(id).name, "selected"),
            None => warn!(%point, "nobody stands there"),
        }
    }

    // 4. Output.
    let output = match &args.output {
        Some(dir) => Some(SimOutputObserver::new(CsvWriter::new(dir)?)),
        None => None,
    };
    let mut obs = DemoObserver::new(output);

    println!("=== town: pixel village daily cycle ===");
    println!(
        "Villagers: {}  |  Ticks: {}  |  Step: {} min",
        sim.roster().len(),
        total_ticks,
        config.step_minutes
    );
    println!();

    // 5. Run.
    let t0 = Instant::now();
    if args.every == 0 && !args.realtime {
        sim.run(&mut obs)?;
    } else {
        for _ in 0..total_ticks {
            sim.tick_with(&mut obs);
            let now = sim.current_tick().0;
            if args.every > 0 && now.is_multiple_of(args.every) {
                print!("{}", render::map(&layout, &sim));
                print!("{}", render::panel(&sim));
                println!("{}", render::journal(&sim));
            }
            if args.realtime {
                thread::sleep(Duration::from_millis(config.tick_interval_ms));
            }
        }
        obs.on_sim_end(sim.current_tick());
    }
    let elapsed = t0.elapsed();

    if let Some(e) = obs.output.as_mut().and_then(SimOutputObserver::take_error) {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s at {}", elapsed.as_secs_f64(), sim.clock());
    println!("  transitions : {}", obs.transitions);
    println!("  rollovers   : {}", obs.rollovers);
    println!("  journal     : {} entries", obs.journal_rows);
    if let Some(dir) = &args.output {
        println!("  csv         : {} snapshot rows in {}", obs.snapshot_rows, dir.display());
    }
    println!();

    println!("{:<8} {:<16} {:<16} {:>6} {:<10}", "Name", "Position", "Activity", "Energy", "Mood");
    println!("{}", "-".repeat(60));
    for (_, profile, state) in sim.roster().iter() {
        println!(
            "{:<8} {:<16} {:<16} {:>6} {:<10}",
            profile.name,
            state.position.to_string(),
            state.current_activity.as_str(),
            state.energy,
            state.mood.as_str(),
        );
    }
    println!();
    print!("{}", render::panel(&sim));
    print!("{}", render::journal(&sim));

    Ok(())
}

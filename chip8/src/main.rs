use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;

use emu8_core::{Chip8, STEPS_PER_TIMER_TICK, TIMER_HZ};
use emu8_display::Display;

mod keymap;
mod run;

use run::{Render, Settings};

/// Run a Chip-8 ROM headlessly, drawing the screen as text
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    /// CPU steps per 60Hz timer tick
    #[arg(long, default_value_t = STEPS_PER_TIMER_TICK)]
    steps_per_tick: u32,

    /// Number of timer ticks to run for
    #[arg(long, default_value_t = u64::from(TIMER_HZ) * 10)]
    frames: u64,

    /// Pace frames at 60Hz instead of running as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Keys to hold down for the whole run, using the 1234/QWER/ASDF/ZXCV layout
    #[arg(long, default_value = "")]
    hold: String,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// When to draw the screen
    #[arg(long, value_enum, default_value_t = Render::Final)]
    render: Render,

    /// Don't ring the terminal bell
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let held_keys = keymap::parse_keys(&args.hold)
        .map_err(|key| anyhow!("{:?} is not mapped to a Chip-8 key", key))?;

    let mut chip8 = match args.seed {
        Some(seed) => Chip8::with_seed(seed),
        None => Chip8::new(),
    };

    // Load ROM
    let file = File::open(&args.rom)
        .with_context(|| format!("unable to open {}", args.rom.display()))?;
    let mut reader = BufReader::new(file);
    chip8.reset();
    chip8
        .load_rom(&mut reader)
        .with_context(|| format!("unable to load {}", args.rom.display()))?;
    log::info!("loaded {}", args.rom.display());

    let settings = Settings {
        steps_per_tick: args.steps_per_tick,
        frames: args.frames,
        realtime: args.realtime,
        held_keys,
        render: args.render,
        bell: !args.quiet,
    };
    let mut display = Display::new(io::stdout(), settings.render == Render::Every);
    let summary = run::run(&mut chip8, &settings, &mut display)?;
    log::info!("ran {} frames, {} beeps", summary.frames, summary.beeps);
    Ok(())
}

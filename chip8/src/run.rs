use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use emu8_core::{Chip8, Chip8Error, TIMER_HZ};
use emu8_display::Display;

/// When frames get drawn
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Render {
    /// Only draw the last frame
    Final,
    /// Redraw every frame in place
    Every,
    /// Never draw
    Off,
}

/// How the host drives a loaded Chip8
#[derive(Clone, Debug)]
pub struct Settings {
    /// CPU steps between timer ticks
    pub steps_per_tick: u32,
    /// Timer ticks to run for
    pub frames: u64,
    /// Sleep so frames last 1/60th of a second
    pub realtime: bool,
    /// Keypad indices held down for the whole run
    pub held_keys: Vec<u8>,
    pub render: Render,
    /// Ring the terminal bell when the sound timer runs out
    pub bell: bool,
}

/// What happened during a run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub frames: u64,
    pub beeps: u64,
}

/// Drives `chip8` frame by frame: `steps_per_tick` steps, a timer tick, then a render.
///
/// Stops early on the first fatal error, after drawing the last good frame.
pub fn run<W: Write>(
    chip8: &mut Chip8,
    settings: &Settings,
    display: &mut Display<W>,
) -> Result<Summary, RunError> {
    for &key in &settings.held_keys {
        chip8.keypress(key, true)?;
    }

    let frame_time = Duration::from_secs(1) / TIMER_HZ;
    let mut last_frame = Instant::now();
    let mut summary = Summary::default();

    while summary.frames < settings.frames {
        if let Err(err) = run_frame(chip8, settings, &mut summary) {
            log::error!("halted after {} frames: {}", summary.frames, err);
            if settings.render != Render::Off {
                display.render(&chip8.screen())?;
            }
            return Err(err.into());
        }
        summary.frames += 1;

        if settings.render == Render::Every {
            display.render(&chip8.screen())?;
        }

        // Handle timing
        if settings.realtime {
            let elapsed = last_frame.elapsed();
            if frame_time > elapsed {
                thread::sleep(frame_time - elapsed);
            }
            last_frame = Instant::now();
        }
    }

    if settings.render == Render::Final {
        display.render(&chip8.screen())?;
    }
    Ok(summary)
}

fn run_frame(
    chip8: &mut Chip8,
    settings: &Settings,
    summary: &mut Summary,
) -> Result<(), Chip8Error> {
    for _ in 0..settings.steps_per_tick {
        chip8.step()?;
    }

    let frame = summary.frames;
    let beeps = &mut summary.beeps;
    chip8.tick_timers(|| {
        log::info!("beep at frame {}", frame);
        *beeps += 1;
        if settings.bell {
            // best effort
            let _ = io::stderr().write_all(b"\x07");
        }
    });
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Chip8(#[from] Chip8Error),
    #[error("unable to draw frame: {0}")]
    Render(#[from] io::Error),
}

//! energy-drum - light sources that bloom on beats and fade across a panel layout.
//!
//! Stands in for the fixture's host: loads a scene, feeds the engine synthetic
//! audio features at a fixed cadence and draws every frame in the terminal.

mod cli;
mod display;
mod scene;
mod synth;

use anyhow::Context;
use clap::Parser;
use std::io;
use std::thread;
use std::time::{Duration, Instant};

use cli::Args;
use display::Display;
use drum_core::Engine;
use scene::Scene;
use synth::SyntheticAudio;

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    args.validate()?;

    let mut scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => {
            log::info!("[scene] no scene file given, using built-in layout");
            Scene::builtin()
        }
    };
    if let Some(seed) = args.seed {
        scene.engine.seed = seed;
    }

    let mut audio = SyntheticAudio::new(args.bpm, args.interval_ms, scene.engine.seed);
    let mut engine = Engine::init(scene.engine.clone(), &scene, &scene, &mut audio)
        .context("starting engine")?;

    let interval = Duration::from_millis(args.interval_ms);
    let stdout = io::stdout();
    let mut display = Display::new(stdout.lock());
    let mut next = Instant::now();
    let mut ticks = 0u64;

    while args.ticks == 0 || ticks < args.ticks {
        let frame = engine.step(&mut audio);
        if !args.quiet {
            display.draw(frame.entries()).context("drawing frame")?;
        }
        let delay = frame.sleep().unwrap_or(interval);
        ticks += 1;

        next += delay;
        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
        } else {
            log::debug!("[host] frame {} overran its slot by {:?}", ticks, now - next);
            next = now;
        }
    }

    if !args.quiet {
        display.finish()?;
    }
    log::info!(
        "[host] ran {} frames, {} light sources live",
        ticks,
        engine.pool().len()
    );
    Ok(())
}

//! Application entry point.
//!
//! W/S move the left paddle, I/K move the right one.

mod app;
mod camera;
mod clock;
mod input;
mod mesh;
mod renderer;

use anyhow::Context;
use clap::Parser;
use game_core::{Match, Params};
use log::{error, info};
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::App;

#[derive(Parser, Debug)]
#[command(name = "pong", version, about = "Two-paddle Pong")]
struct Cli {
    /// Seed for the ball's random velocities (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Window size as a multiple of the 320x240 canvas
    #[arg(long, default_value_t = Params::WINDOW_SCALE, value_parser = clap::value_parser!(u32).range(1..=8))]
    scale: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("Fatal: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Starting match with seed {}", seed);

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(Match::new(seed), cli.scale);
    event_loop.run_app(&mut app).context("Event loop error")?;
    app.into_result()
}

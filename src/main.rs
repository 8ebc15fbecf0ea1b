use std::fs::File;
use std::io;

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use dino_run::build_info;
use dino_run::core::constants::FRAME_RATE;
use dino_run::core::{FrameClock, Tuning};
use dino_run::input::{CrosstermInput, InputSource};
use dino_run::runner::{Round, RoundEvent, SpriteSheet};
use dino_run::ui::TerminalCanvas;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

const LOG_FILE: &str = "dino-run.log";

#[derive(Debug, Clone, Default, PartialEq)]
struct RunOptions {
    seed: Option<u64>,
    simple: bool,
}

#[derive(Debug, PartialEq)]
enum CliCommand {
    Run(RunOptions),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut options = RunOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("--seed requires a number")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--simple" => options.simple = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(CliCommand::Run(options))
}

fn print_help() {
    println!("Dino Run - terminal endless runner\n");
    println!("Usage: dino-run [options]\n");
    println!("Options:");
    println!("  --seed N   Seed obstacle spawning");
    println!("  --simple   Jump any time, respawn on pass, score-only status");
    println!("  --version  Show version information");
    println!("  --help     Show this help message\n");
    println!("Keys: Space/Up jump, R/Enter restart, Q/Esc quit");
    println!("Set RUST_LOG=debug to log round events to {}", LOG_FILE);
}

/// Logging goes to a file because the game owns the terminal.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    match File::create(LOG_FILE) {
        Ok(file) => {
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("Warning: could not open {}: {}", LOG_FILE, e),
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(CliCommand::Run(options)) => options,
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'dino-run --help' for usage.");
            std::process::exit(1);
        }
    };

    init_logging();

    let seed = options.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let tuning = if options.simple {
        Tuning::simple()
    } else {
        Tuning::default()
    };
    info!("{} seed={} simple={}", build_info::version_line(), seed, options.simple);
    let mut round = Round::new(SpriteSheet::new(), tuning, StdRng::seed_from_u64(seed));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(cursor::Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_loop(&mut terminal, &mut round, &mut CrosstermInput);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.backend_mut().execute(cursor::Show)?;

    if result.is_ok() {
        println!(
            "Best score: {} over {} run(s)",
            round.best_score.floor() as u64,
            round.run_number
        );
    }
    result
}

fn run_loop<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    round: &mut Round<R>,
    input: &mut impl InputSource,
) -> io::Result<()> {
    let mut clock = FrameClock::new(FRAME_RATE);
    let (world_width, world_height) = (round.tuning().screen_width, round.tuning().screen_height);

    loop {
        clock.tick();

        let inputs = input.poll()?;
        let events = round.step(&inputs);
        for event in &events {
            log_event(event);
        }
        if round.quit_requested() {
            info!("quit after {} ticks", round.tick_count);
            return Ok(());
        }

        let mut canvas = TerminalCanvas::new(terminal, world_width, world_height)?;
        round.render(&mut canvas)?;
    }
}

fn log_event(event: &RoundEvent) {
    match event {
        RoundEvent::GameOver { .. } | RoundEvent::Restarted { .. } => info!("{:?}", event),
        _ => debug!("{:?}", event),
    }
}

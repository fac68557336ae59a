use std::fs::File;
use std::sync::OnceLock;

use clap::Parser;
use log::{error, info};
use macroquad::prelude::{Conf, get_time, next_frame};
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{Config, LevelFilter, WriteLogger};

use snake_canvas::input::poll_intents;
use snake_canvas::layout::Layout;
use snake_canvas::render::MacroquadRenderer;
use snake_canvas::{CliArgs, Flow, GameConfig, GameSession, JsonFileStore};

fn init_logging(args: &CliArgs) {
    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    match File::create(&args.log_file) {
        Ok(file) => {
            if let Err(err) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("logger already installed: {err}");
            }
        }
        Err(err) => eprintln!("cannot open log file {}: {err}", args.log_file.display()),
    }
}

static STARTUP: OnceLock<(CliArgs, GameConfig)> = OnceLock::new();

/// Parses the command line once, exiting with a usage message on bad input.
/// Both the window setup and the game loop read the same result.
fn load_config() -> &'static (CliArgs, GameConfig) {
    STARTUP.get_or_init(|| {
        let args = CliArgs::parse();
        match args.to_config() {
            Ok(config) => (args, config),
            Err(err) => {
                eprintln!("invalid configuration: {err}");
                std::process::exit(2);
            }
        }
    })
}

fn window_conf() -> Conf {
    let (_, config) = load_config();
    let (window_width, window_height) = Layout::window_size(config);
    Conf {
        window_title: "Snake".to_owned(),
        window_width,
        window_height,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (args, config) = load_config();
    init_logging(args);

    let store = JsonFileStore::new(&config.save_path);
    info!(
        "starting on a {}x{} board at {} ticks/s, saving to {}",
        config.grid.width,
        config.grid.height,
        config.speed,
        store.path().display()
    );
    let mut session = match GameSession::new(config, store, StdRng::from_entropy()) {
        Ok(session) => session,
        Err(err) => {
            error!("cannot start: {err}");
            return;
        }
    };
    let mut renderer = MacroquadRenderer::new(config.controls);

    loop {
        let now = get_time();
        let layout = renderer.layout(session.bounds());

        let mut flow = Flow::Continue;
        for intent in poll_intents(&layout) {
            flow = session.apply(intent, now);
            if flow == Flow::Quit {
                break;
            }
        }
        if flow == Flow::Quit {
            break;
        }

        session.advance(now);
        session.render(&mut renderer);

        next_frame().await;
    }

    info!(
        "quit with score {}, best {}",
        session.snake().score(),
        session.high_score()
    );
}

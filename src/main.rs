use macroquad::prelude::*;
use tracing::{error, info};

use life_game::{Config, Session, input::InputPoller, logging, rendering};

/// Startup configuration. Runs before the window exists, so an invalid
/// configuration ends the process without creating one.
fn load_config() -> (Config, Conf) {
    let loaded = Config::default()
        .validate()
        .and_then(|config| config.window_conf().map(|conf| (config, conf)));

    match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("Could not start: {e}");
            std::process::exit(1);
        }
    }
}

fn window_conf() -> Conf {
    logging::init();
    load_config().1
}

#[macroquad::main(window_conf)]
async fn main() {
    let (config, _) = load_config();
    let cell_size = config.cell_size_px();
    let mut poller = InputPoller::new();
    let mut session = Session::new(config);

    // Report window close as an event instead of exiting mid-frame
    prevent_quit();

    let (width, height) = session.grid().dimensions();
    info!(width, height, "grid ready, press P to start");

    loop {
        session.handle_all(poller.poll());

        session.update();

        rendering::draw_frame(session.grid(), cell_size);

        if session.is_quit() {
            break;
        }

        let delay = session.frame_delay();
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        next_frame().await;
    }

    info!(generation = session.generation(), "exiting");
}

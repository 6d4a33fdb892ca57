use crate::{
    console::{Screen, StepChoice},
    options::Config,
    pace::FramePacer,
    stats::SimpleRecord,
};
use sparselife::{GameOfLife, Style};
use std::{
    io::{self, BufRead, Write},
    time::Instant,
};
use tracing::{debug, info};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Frames drawn, the initial state included
    pub frames: usize,
    pub generations: usize,
    /// Whether the user quit from the step prompt
    pub quit: bool,
}

/// Draws the initial state, then advances and draws `config.iterations` times
///
/// Between frames the loop either sleeps out the frame budget or, in step
/// mode, asks on `input` whether to go on.
pub fn run<W: Write, R: BufRead>(config: &Config, out: W, mut input: R) -> io::Result<Summary> {
    let mut game = GameOfLife::from_alive(config.pattern.cells());
    let style = Style {
        show_background: config.show_background,
        use_color: config.use_color,
    };
    let pacer = FramePacer::new(config.fps);
    let mut screen = Screen::new(out);
    let mut stats = SimpleRecord::new(game.alive_count());
    let mut stepping = config.step;
    let mut quit = false;

    info!(
        alive = game.alive_count(),
        frame_budget = ?pacer.budget(),
        "initial generation"
    );
    let mut frame_start = Instant::now();
    screen.draw(&game.frame(style))?;
    let mut frames = 1;

    for _ in 0..config.iterations {
        if stepping {
            match screen.prompt_step(&mut input)? {
                StepChoice::Continue => {}
                StepChoice::Run => stepping = false,
                StepChoice::Quit => {
                    quit = true;
                    break;
                }
            }
        } else {
            pacer.wait(frame_start);
        }

        frame_start = Instant::now();
        game.advance();
        screen.draw(&game.frame(style))?;
        frames += 1;

        stats.record(game.alive_count());
        if stats.has_report() {
            debug!("{}", stats.report());
        }
    }
    screen.finish()?;

    info!(region = ?game.region(), "{}", stats.report());
    Ok(Summary {
        frames,
        generations: stats.generations(),
        quit,
    })
}

use std::{
    io::{self, IsTerminal},
    str::FromStr,
};

use sparselife::Pattern;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_ITERATIONS: usize = 50;
pub const DEFAULT_FPS: u32 = 8;
/// Default size of the random soup, in cells
const DEFAULT_SOUP: (i32, i32) = (32, 16);
/// Number of positional arguments
const POSITIONALS: usize = 4;

const BRIEF: &str = "usage: sparselife [options] [ITERATIONS] [STEP] [FPS] [SHOW_BACKGROUND]

  ITERATIONS       generations to simulate (default 50)
  STEP             t/f, prompt before every generation (default f)
  FPS              frames per second when not stepping, 0 for no limit (default 8)
  SHOW_BACKGROUND  t/f, draw dead cells (default f)";

#[derive(Debug, Error)]
pub enum ArgError {
    #[error(transparent)]
    Options(#[from] getopts::Fail),

    #[error("invalid {name} `{value}`, expected a non-negative integer")]
    InvalidNumber { name: &'static str, value: String },

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    #[error("unexpected argument `{0}`")]
    TooManyArguments(String),

    #[error("--color and --no-color cannot be combined")]
    ConflictingColor,
}

/// Parses a boolean token, `None` if it is neither a true nor a false token
pub fn parse_flag(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "t" | "true" | "y" | "yes" | "1" => Some(true),
        "f" | "false" | "n" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn parse_number<T: FromStr>(name: &'static str, value: &str) -> Result<T, ArgError> {
    value.parse().map_err(|_| ArgError::InvalidNumber {
        name,
        value: value.to_owned(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}
impl ColorChoice {
    /// Auto enables color only on a terminal that hasn't opted out through `NO_COLOR`
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}

/// Everything the driver needs to run a simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub iterations: usize,
    pub step: bool,
    pub fps: u32,
    pub show_background: bool,
    pub use_color: bool,
    pub pattern: Pattern,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            step: false,
            fps: DEFAULT_FPS,
            show_background: false,
            use_color: false,
            pattern: Pattern::default(),
        }
    }
}

fn options() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optflag("", "help", "print this help menu");
    opts.optopt(
        "p",
        "pattern",
        "starting pattern: scene, blinker, block, glider, pulsar, random",
        "NAME",
    );
    opts.optopt("w", "width", "random soup width", "WIDTH");
    opts.optopt("h", "height", "random soup height", "HEIGHT");
    opts.optopt("", "seed", "seed for the random soup", "SEED");
    opts.optflag("c", "color", "always color live cells");
    opts.optflag("", "no-color", "never color live cells");
    opts
}

pub fn usage() -> String {
    options().usage(BRIEF)
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    pub fn new<T: AsRef<str>>(args: &[T]) -> Result<Self, ArgError> {
        let matches = options().parse(args.iter().map(T::as_ref))?;
        Ok(Self { matches })
    }
    pub fn from_env() -> Result<Self, ArgError> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    pub fn help(&self) -> bool {
        self.matches.opt_present("help")
    }

    fn positional(&self, index: usize) -> Option<&str> {
        self.matches.free.get(index).map(String::as_str)
    }
    /// A boolean positional; malformed tokens fall back to `default`
    fn flag(&self, index: usize, name: &str, default: bool) -> bool {
        let Some(token) = self.positional(index) else {
            return default;
        };
        parse_flag(token).unwrap_or_else(|| {
            warn!(token, default, "invalid {name} flag, using the default");
            default
        })
    }
    fn number<T: FromStr>(&self, index: usize, name: &'static str, default: T) -> Result<T, ArgError> {
        match self.positional(index) {
            Some(value) => parse_number(name, value),
            None => Ok(default),
        }
    }

    pub fn iterations(&self) -> Result<usize, ArgError> {
        self.number(0, "iteration count", DEFAULT_ITERATIONS)
    }
    pub fn step(&self) -> bool {
        self.flag(1, "step", false)
    }
    pub fn fps(&self) -> Result<u32, ArgError> {
        self.number(2, "fps", DEFAULT_FPS)
    }
    pub fn show_background(&self) -> bool {
        self.flag(3, "show background", false)
    }

    pub fn color(&self) -> Result<ColorChoice, ArgError> {
        match (self.matches.opt_present("color"), self.matches.opt_present("no-color")) {
            (true, true) => Err(ArgError::ConflictingColor),
            (true, false) => Ok(ColorChoice::Always),
            (false, true) => Ok(ColorChoice::Never),
            (false, false) => Ok(ColorChoice::Auto),
        }
    }

    fn soup_size(&self) -> Result<(i32, i32), ArgError> {
        let dimension = |name: &'static str, default: i32| -> Result<i32, ArgError> {
            match self.matches.opt_str(name) {
                Some(value) => parse_number::<u16>(name, &value).map(i32::from),
                None => Ok(default),
            }
        };
        Ok((
            dimension("width", DEFAULT_SOUP.0)?,
            dimension("height", DEFAULT_SOUP.1)?,
        ))
    }
    fn seed(&self) -> Result<Option<u64>, ArgError> {
        self.matches
            .opt_str("seed")
            .map(|value| parse_number("seed", &value))
            .transpose()
    }
    pub fn pattern(&self) -> Result<Pattern, ArgError> {
        let Some(name) = self.matches.opt_str("pattern") else {
            return Ok(Pattern::default());
        };
        let (width, height) = self.soup_size()?;
        Pattern::from_name(&name, width, height, self.seed()?).ok_or(ArgError::UnknownPattern(name))
    }

    /// Resolves every argument, failing on the first one that doesn't parse
    pub fn config(&self) -> Result<Config, ArgError> {
        if let Some(extra) = self.positional(POSITIONALS) {
            return Err(ArgError::TooManyArguments(extra.to_owned()));
        }
        Ok(Config {
            iterations: self.iterations()?,
            step: self.step(),
            fps: self.fps()?,
            show_background: self.show_background(),
            use_color: self.color()?.enabled(io::stdout().is_terminal()),
            pattern: self.pattern()?,
        })
    }
}

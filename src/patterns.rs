//! Starting patterns.
//!
//! Every structure is anchored at the top-left corner of its bounding box.

use crate::Pos2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Where single structures are placed, leaving room for phases that reach
/// one cell up or left
const ORIGIN: Pos2 = Pos2::new(1, 1);

fn offset(origin: Pos2, coords: &[(i32, i32)]) -> Vec<Pos2> {
    coords
        .iter()
        .map(|&coord| origin + Pos2::from(coord))
        .collect()
}

/// Period 2 oscillator, horizontal phase
pub fn blinker(origin: Pos2) -> Vec<Pos2> {
    offset(origin, &[(0, 0), (1, 0), (2, 0)])
}

/// 2x2 still life
pub fn block(origin: Pos2) -> Vec<Pos2> {
    offset(origin, &[(0, 0), (1, 0), (0, 1), (1, 1)])
}

/// Glider travelling toward +x/+y
pub fn glider(origin: Pos2) -> Vec<Pos2> {
    offset(origin, &[(0, 0), (2, 0), (1, 1), (2, 1), (1, 2)])
}

/// Period 3 oscillator in a 13x13 box
pub fn pulsar(origin: Pos2) -> Vec<Pos2> {
    const LID_ROWS: [i32; 4] = [0, 5, 7, 12];
    const LID: [i32; 6] = [2, 3, 4, 8, 9, 10];
    const WALL_ROWS: [i32; 6] = [2, 3, 4, 8, 9, 10];
    const WALL: [i32; 4] = [0, 5, 7, 12];

    let lids = LID_ROWS
        .iter()
        .flat_map(|&y| LID.iter().map(move |&x| (x, y)));
    let walls = WALL_ROWS
        .iter()
        .flat_map(|&y| WALL.iter().map(move |&x| (x, y)));
    let coords: Vec<(i32, i32)> = lids.chain(walls).collect();
    offset(origin, &coords)
}

/// Two pulsars, a blinker, and a glider that eventually runs into them
pub fn scene() -> Vec<Pos2> {
    let mut cells = blinker(Pos2::new(17, 4));
    cells.extend(pulsar(Pos2::new(3, 3)));
    cells.extend(pulsar(Pos2::new(20, 20)));
    cells.extend(glider(Pos2::new(40, 20)));
    cells
}

/// Fills a `width` by `height` rectangle at the origin, each cell alive with
/// probability 1/2
pub fn random_soup<R: Rng>(width: i32, height: i32, rng: &mut R) -> Vec<Pos2> {
    let mut alive = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if rng.random_bool(0.5) {
                alive.push(Pos2 { x, y });
            }
        }
    }
    alive
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pattern {
    #[default]
    Scene,
    Blinker,
    Block,
    Glider,
    Pulsar,
    Random {
        width: i32,
        height: i32,
        seed: Option<u64>,
    },
}

impl Pattern {
    pub const NAMES: [&'static str; 6] = ["scene", "blinker", "block", "glider", "pulsar", "random"];

    /// Looks up a pattern by name
    ///
    /// `random` gets the given soup size and seed; the other patterns ignore them.
    pub fn from_name(name: &str, width: i32, height: i32, seed: Option<u64>) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "scene" => Some(Self::Scene),
            "blinker" => Some(Self::Blinker),
            "block" => Some(Self::Block),
            "glider" => Some(Self::Glider),
            "pulsar" => Some(Self::Pulsar),
            "random" => Some(Self::Random {
                width,
                height,
                seed,
            }),
            _ => None,
        }
    }

    pub fn cells(&self) -> Vec<Pos2> {
        match *self {
            Self::Scene => scene(),
            Self::Blinker => blinker(ORIGIN),
            Self::Block => block(ORIGIN),
            Self::Glider => glider(ORIGIN),
            Self::Pulsar => pulsar(ORIGIN),
            Self::Random {
                width,
                height,
                seed,
            } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_rng(&mut rand::rng()),
                };
                random_soup(width, height, &mut rng)
            }
        }
    }
}

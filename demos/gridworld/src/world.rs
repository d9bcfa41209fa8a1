//! Synthetic map used by the demo.
//!
//! A 48x32 valley: four towns, a river running north to south with a single
//! ford, and a ridge of steep tiles east of the river.

use empire_core::CoreResult;
use empire_world::{GridWorld, GridWorldBuilder, Slope};

pub const WIDTH:  u32 = 48;
pub const HEIGHT: u32 = 32;

const TOWNS: [(&str, u32, u32); 4] = [
    ("Ashford",    6,  5),
    ("Brookvale",  8, 25),
    ("Caldwick",  38,  8),
    ("Dunmere",   41, 27),
];

/// Build the demo world.  `seed` drives the endpoint picker.
pub fn build_world(seed: u64) -> CoreResult<GridWorld> {
    let mut b = GridWorldBuilder::new(WIDTH, HEIGHT).seed(seed);

    // River at x = 20..=21, fordable at y = 16.
    b = b.water_rect(20, 0, 21, 15).water_rect(20, 17, 21, HEIGHT - 1);

    // Ridge: steep except for a pass that must be taken straight east-west.
    for y in 4..28 {
        b = if y == 12 {
            b.slope(29, y, Slope::InclinedX)
        } else {
            b.slope(29, y, Slope::Steep)
        };
    }

    for (name, x, y) in TOWNS {
        b = b.town(name, x, y);
        // A ring of houses two tiles out from each centre.
        for (dx, dy) in [(-2i32, -2i32), (2, -2), (-2, 2), (2, 2)] {
            let hx = (x as i32 + dx) as u32;
            let hy = (y as i32 + dy) as u32;
            b = b.house(hx, hy, 30);
        }
    }

    b.build()
}

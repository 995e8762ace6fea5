//! # Initial conditions
//!
//! Library of named scenarios. Each [`Scenario`] maps to a generator of
//! the initial vorticity field and to a [`Preset`] of run parameters.
//!
//! ```
//! use vorticity2d::field::Grid;
//! use vorticity2d::initial::Scenario;
//! let scenario: Scenario = "vortex-pair".parse().unwrap();
//! let grid = Grid::periodic(16, 16).unwrap();
//! let vort = scenario.generate(&grid, 0).unwrap();
//! assert_eq!(vort.shape(), &[16, 16]);
//! ```
use crate::error::{Error, Result};
use crate::field::Grid;
use ndarray::Array2;
use ndarray_rand::rand::rngs::SmallRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Default run parameters of a scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Time step size
    pub dt: f64,
    /// Final time
    pub t_final: f64,
    /// Steps between snapshots
    pub plot_dump: usize,
}

/// Named initial conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Decaying Taylor-Green vortices, w = 2 sin(x) sin(y)
    TaylorGreen,
    /// Uniform noise in \[-1, 1\]
    Random,
    /// Opposite signed halves of the domain, slightly perturbed
    ShearLayer,
    /// Opposite signed square patches next to each other
    VortexPair,
    /// Two co-rotating Gaussian vortices
    Merger,
    /// Alternating blocks of one eighth of the domain
    Checkerboard,
}

type Generator = fn(&Grid, u64) -> Array2<f64>;

struct Entry {
    tag: &'static str,
    generator: Generator,
    preset: Preset,
}

/// Ordered as the variants of [`Scenario`]
static TABLE: [Entry; 6] = [
    Entry {
        tag: "taylor-green",
        generator: taylor_green,
        preset: Preset {
            dt: 1e-2,
            t_final: 10.,
            plot_dump: 50,
        },
    },
    Entry {
        tag: "random",
        generator: random,
        preset: Preset {
            dt: 1e-2,
            t_final: 50.,
            plot_dump: 100,
        },
    },
    Entry {
        tag: "shear-layer",
        generator: shear_layer,
        preset: Preset {
            dt: 5e-3,
            t_final: 20.,
            plot_dump: 100,
        },
    },
    Entry {
        tag: "vortex-pair",
        generator: vortex_pair,
        preset: Preset {
            dt: 1e-2,
            t_final: 20.,
            plot_dump: 50,
        },
    },
    Entry {
        tag: "merger",
        generator: merger,
        preset: Preset {
            dt: 1e-2,
            t_final: 30.,
            plot_dump: 50,
        },
    },
    Entry {
        tag: "checkerboard",
        generator: checkerboard,
        preset: Preset {
            dt: 1e-2,
            t_final: 10.,
            plot_dump: 50,
        },
    },
];

impl Scenario {
    /// All scenarios
    pub const ALL: [Scenario; 6] = [
        Scenario::TaylorGreen,
        Scenario::Random,
        Scenario::ShearLayer,
        Scenario::VortexPair,
        Scenario::Merger,
        Scenario::Checkerboard,
    ];

    fn entry(self) -> &'static Entry {
        &TABLE[self as usize]
    }

    /// Name used on the command line
    #[must_use]
    pub fn tag(self) -> &'static str {
        self.entry().tag
    }

    /// Default dt, final time and output cadence
    #[must_use]
    pub fn preset(self) -> Preset {
        self.entry().preset
    }

    /// Initial vorticity in physical space.
    ///
    /// `seed` only affects [`Scenario::Random`].
    ///
    /// # Errors
    /// Grid has an odd number of points.
    pub fn generate(self, grid: &Grid, seed: u64) -> Result<Array2<f64>> {
        grid.require_even()?;
        Ok((self.entry().generator)(grid, seed))
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Scenario::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.tag() == s)
            .ok_or_else(|| {
                let tags: Vec<&str> = TABLE.iter().map(|e| e.tag).collect();
                Error::Config(format!(
                    "unknown scenario '{}', expected one of: {}",
                    s,
                    tags.join(", ")
                ))
            })
    }
}

/// Construct field f(x,y) = 2 sin(2pi x/lx) sin(2pi y/ly)
fn taylor_green(grid: &Grid, _seed: u64) -> Array2<f64> {
    let [x, y] = grid.coords();
    let (ax, ay) = (2. * PI / grid.lx, 2. * PI / grid.ly);
    Array2::from_shape_fn((grid.nx, grid.ny), |(i, j)| {
        2. * (ax * x[i]).sin() * (ay * y[j]).sin()
    })
}

/// Apply random disturbance [-1, 1]
fn random(grid: &Grid, seed: u64) -> Array2<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    Array2::random_using((grid.nx, grid.ny), Uniform::new(-1., 1.), &mut rng)
}

/// +1 in the lower half in y, -1 in the upper half, plus a
/// small sinusoidal kick in x to trigger roll-up
fn shear_layer(grid: &Grid, _seed: u64) -> Array2<f64> {
    let [x, _] = grid.coords();
    let ax = 2. * PI / grid.lx;
    let half = grid.ny / 2;
    Array2::from_shape_fn((grid.nx, grid.ny), |(i, j)| {
        let sign = if j < half { 1. } else { -1. };
        sign + 0.05 * (ax * x[i]).sin()
    })
}

/// +1 and -1 patches of a quarter domain width, side by side in x
fn vortex_pair(grid: &Grid, _seed: u64) -> Array2<f64> {
    let (qx, qy) = (grid.nx / 4, grid.ny / 4);
    Array2::from_shape_fn((grid.nx, grid.ny), |(i, j)| {
        if !(qy..2 * qy).contains(&j) {
            0.
        } else if (qx..2 * qx).contains(&i) {
            1.
        } else if (2 * qx..3 * qx).contains(&i) {
            -1.
        } else {
            0.
        }
    })
}

/// Two Gaussian vortices of equal sign, an eighth of the domain apart
/// from the center
fn merger(grid: &Grid, _seed: u64) -> Array2<f64> {
    let [x, y] = grid.coords();
    let centers = [
        (3. * grid.lx / 8., grid.ly / 2.),
        (5. * grid.lx / 8., grid.ly / 2.),
    ];
    let sigma = grid.lx.min(grid.ly) / 16.;
    Array2::from_shape_fn((grid.nx, grid.ny), |(i, j)| {
        centers
            .iter()
            .map(|(cx, cy)| {
                let r2 = (x[i] - cx).powi(2) + (y[j] - cy).powi(2);
                (-r2 / (2. * sigma * sigma)).exp()
            })
            .sum()
    })
}

/// +-1 blocks of an eighth of the domain
fn checkerboard(grid: &Grid, _seed: u64) -> Array2<f64> {
    let bx = (grid.nx / 8).max(1);
    let by = (grid.ny / 8).max(1);
    Array2::from_shape_fn((grid.nx, grid.ny), |(i, j)| {
        if (i / bx + j / by) % 2 == 0 {
            1.
        } else {
            -1.
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        for scenario in Scenario::ALL {
            let parsed: Scenario = scenario.tag().parse().unwrap();
            assert_eq!(parsed, scenario);
            assert_eq!(scenario.to_string(), scenario.tag());
        }
        let err = "kelvin".parse::<Scenario>().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("taylor-green"));
    }

    #[test]
    fn test_table_order() {
        assert_eq!(Scenario::TaylorGreen.tag(), "taylor-green");
        assert_eq!(Scenario::Checkerboard.tag(), "checkerboard");
        assert_eq!(Scenario::ShearLayer.preset().dt, 5e-3);
    }

    #[test]
    fn test_even_grid_required() {
        let grid = Grid::periodic(9, 8).unwrap();
        for scenario in Scenario::ALL {
            assert!(matches!(
                scenario.generate(&grid, 0),
                Err(Error::Config(_))
            ));
        }
    }

    #[test]
    fn test_shapes() {
        let grid = Grid::periodic(16, 12).unwrap();
        for scenario in Scenario::ALL {
            let vort = scenario.generate(&grid, 1).unwrap();
            assert_eq!(vort.shape(), &[16, 12]);
            assert!(vort.iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_random_seed() {
        let grid = Grid::periodic(8, 8).unwrap();
        let a = Scenario::Random.generate(&grid, 5).unwrap();
        let b = Scenario::Random.generate(&grid, 5).unwrap();
        let c = Scenario::Random.generate(&grid, 6).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|v| v.abs() <= 1.));
    }

    #[test]
    fn test_patterns() {
        let grid = Grid::periodic(16, 16).unwrap();
        let tg = Scenario::TaylorGreen.generate(&grid, 0).unwrap();
        assert!((tg[[4, 4]] - 2.).abs() < 1e-12);
        let pair = Scenario::VortexPair.generate(&grid, 0).unwrap();
        assert_eq!(pair[[5, 5]], 1.);
        assert_eq!(pair[[9, 5]], -1.);
        assert_eq!(pair[[5, 9]], 0.);
        assert!(pair.sum().abs() < 1e-12);
        let board = Scenario::Checkerboard.generate(&grid, 0).unwrap();
        assert_eq!(board[[0, 0]], 1.);
        assert_eq!(board[[2, 0]], -1.);
        assert_eq!(board.sum(), 0.);
    }
}

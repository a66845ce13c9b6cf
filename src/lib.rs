//! Level-based Snake arcade game.
//!
//! The simulation core ([`grid`], [`snake`], [`food`], [`level`],
//! [`game`]) is deterministic, synchronous and free of I/O; it runs
//! headless under tests and is driven by the terminal front-end
//! ([`renderer`], [`ui`], the binary) through [`game::GameRound::tick`].

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod level;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;

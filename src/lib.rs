pub mod config;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod renderer;
pub mod solvers;

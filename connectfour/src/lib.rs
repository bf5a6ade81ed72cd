pub use board::*;
pub use config::*;
pub use errors::*;
pub use heuristic::*;
pub use protocol::*;
pub use rules::*;
pub use scan::*;
pub use search::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod config;
mod errors;
mod heuristic;
mod protocol;
mod rules;
mod scan;
mod search;
mod visualization;

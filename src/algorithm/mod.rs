/// Two-coloring propagation over the cell grid
pub mod coloring;
/// Pattern state ownership and render orchestration
pub mod controller;
/// Edge map derivation from stitch patterns
pub mod edges;
/// Stitch pattern generation and bit sources
pub mod pattern;

pub use coloring::ColorMap;
pub use controller::{PatternConfig, PatternController};
pub use edges::EdgeMap;
pub use pattern::StitchPattern;

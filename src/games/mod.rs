//! Small solved games wired up against the search engine. Each module is
//! a complete adapter: rules, canonical keys, static evaluation, and a
//! board rendering, with nothing engine-specific beyond the trait impls.

pub mod nim;
pub mod tictactoe;

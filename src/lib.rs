pub mod games;
pub mod search;

/// Expected values, payoffs, and node scores.
pub type Utility = f32;

/// Initialize terminal logging for the demo binaries.
/// INFO is the narrating level; DEBUG adds tree-size accounting.
pub fn logs(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

use log::{LevelFilter, SetLoggerError};

pub fn init_simple_logger(l: LevelFilter) -> Result<(), SetLoggerError> { 
    use simplelog::*;

    let mut cb = ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Trace, Some(Color::Green));
    let config = cb.build();

    TermLogger::init(
        l,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto
    )
}

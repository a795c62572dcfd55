use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Maps the number of `-v` flags to a log level.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Installs the global logger. `RUST_LOG` overrides the verbosity flags.
pub fn init(verbosity: u8) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level_for(verbosity))
        .parse_env("RUST_LOG")
        .init();
}

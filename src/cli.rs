use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Flags given on the command line override the scene file.
#[derive(Debug, Parser)]
#[command(name = "mirrortrace")]
#[command(about = "Whitted-style sphere ray tracer with mirror reflections")]
pub struct Args {
    /// YAML scene file; the built-in demo scene is used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Maximum number of mirror bounces per primary ray
    #[arg(short, long)]
    pub depth: Option<i32>,

    /// Output file (.ppm writes plain-text PPM, anything else PNG)
    #[arg(short, long, default_value = "out.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "mirrortrace",
            "--width",
            "320",
            "-d",
            "5",
            "-o",
            "scene.ppm",
            "--debug-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.width, Some(320));
        assert_eq!(args.height, None);
        assert_eq!(args.depth, Some(5));
        assert_eq!(args.output, PathBuf::from("scene.ppm"));
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Debug);
        assert!(args.config.is_none());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["mirrortrace"]).unwrap();

        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(LevelFilter::from(args.debug_level), LevelFilter::Info);
    }
}

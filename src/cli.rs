//! 命令行参数

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "raybind")]
#[command(version)]
#[command(about = "Load a prebuilt raylib at runtime and bounce a circle", long_about = None)]
pub struct Cli {
    /// Native library path (default: <exe dir>/zig-out/bin/<platform library name>)
    #[arg(long, value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// TOML or JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Stop after N frames instead of waiting for the window to close
    #[arg(long, value_name = "N")]
    pub frames: Option<u64>,

    /// Print the native call table and exit without loading anything
    #[arg(long)]
    pub dump_bindings: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["raybind"]).unwrap();
        assert!(cli.library.is_none());
        assert!(cli.config.is_none());
        assert!(cli.frames.is_none());
        assert!(!cli.dump_bindings);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "raybind",
            "--library",
            "/opt/raylib/libraylib.so",
            "--config",
            "demo.toml",
            "--frames",
            "120",
            "--dump-bindings",
        ])
        .unwrap();

        assert_eq!(cli.library, Some(PathBuf::from("/opt/raylib/libraylib.so")));
        assert_eq!(cli.config, Some(PathBuf::from("demo.toml")));
        assert_eq!(cli.frames, Some(120));
        assert!(cli.dump_bindings);
    }

    #[test]
    fn test_rejects_negative_frames() {
        assert!(Cli::try_parse_from(["raybind", "--frames", "-3"]).is_err());
    }
}

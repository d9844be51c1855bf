//! Command-line configuration for the desktop shell.

use std::path::PathBuf;

use clap::Parser;
use nusantara_core::{Orientation, StaticResources};

/// Nusantara - Indonesian destination browser
#[derive(Parser, Debug, Clone)]
#[command(name = "nusantara-desktop")]
#[command(about = "Nusantara - browse Indonesian travel destinations")]
pub struct Args {
    /// Pin the orientation instead of following the window size
    #[arg(short, long)]
    pub orientation: Option<Orientation>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 412)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 915)]
    pub height: u32,

    /// Directory destination images are loaded from
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Print the rendered view tree as JSON and exit without opening a window
    #[arg(long)]
    pub dump_layout: bool,
}

/// Settings the running app reads from context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Orientation forced from the command line, if any
    pub pinned_orientation: Option<Orientation>,
    pub width: u32,
    pub height: u32,
    pub asset_root: String,
}

impl AppConfig {
    /// Orientation for the first render pass
    pub fn initial_orientation(&self) -> Orientation {
        self.pinned_orientation
            .unwrap_or_else(|| Orientation::from_size(self.width, self.height))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pinned_orientation: None,
            width: 412,
            height: 915,
            asset_root: StaticResources::DEFAULT_ASSET_ROOT.to_string(),
        }
    }
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        let asset_root = args
            .assets
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| StaticResources::DEFAULT_ASSET_ROOT.to_string());

        Self {
            pinned_orientation: args.orientation,
            width: args.width,
            height: args.height,
            asset_root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> AppConfig {
        let args = Args::try_parse_from(argv).unwrap();
        AppConfig::from(&args)
    }

    #[test]
    fn test_defaults_are_a_portrait_phone() {
        let config = parse(&["nusantara-desktop"]);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.initial_orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_wide_window_starts_landscape() {
        let config = parse(&["nusantara-desktop", "--width", "915", "--height", "412"]);
        assert_eq!(config.pinned_orientation, None);
        assert_eq!(config.initial_orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_pinned_orientation_wins_over_size() {
        let config = parse(&["nusantara-desktop", "--orientation", "landscape"]);
        assert_eq!(config.pinned_orientation, Some(Orientation::Landscape));
        assert_eq!(config.initial_orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_rejects_unknown_orientation() {
        let result = Args::try_parse_from(["nusantara-desktop", "-o", "diagonal"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_asset_root_override() {
        let config = parse(&["nusantara-desktop", "--assets", "/srv/images"]);
        assert_eq!(config.asset_root, "/srv/images");
    }

    #[test]
    fn test_dump_layout_flag() {
        let args = Args::try_parse_from(["nusantara-desktop", "--dump-layout"]).unwrap();
        assert!(args.dump_layout);
    }
}

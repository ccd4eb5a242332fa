use clap::Parser;
use std::path::PathBuf;

/// Browse a static photo gallery: tag filters, a lightbox and a lookbook slideshow
#[derive(Debug, Default, Parser)]
#[command(name = "photo-gallery", version, about)]
pub struct Cli {
    /// Site root that image sources are resolved against
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Catalog document [default: <ROOT>/data/images.json]
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Open the lookbook slideshow instead of the gallery
    #[arg(long)]
    pub lookbook: bool,

    /// Milliseconds between automatic slideshow advances
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Start the slideshow paused
    #[arg(long)]
    pub reduced_motion: bool,

    /// Settings file [default: <CONFIG_DIR>/photo-gallery/settings.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["photo-gallery"]).unwrap();
        assert!(!cli.lookbook);
        assert!(!cli.reduced_motion);
        assert_eq!(cli.root, None);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "photo-gallery",
            "--root",
            "site",
            "--catalog",
            "site/other.json",
            "--lookbook",
            "--interval-ms",
            "2500",
            "--reduced-motion",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.catalog, Some(PathBuf::from("site/other.json")));
        assert!(cli.lookbook);
        assert_eq!(cli.interval_ms, Some(2500));
        assert!(cli.reduced_motion);
    }
}

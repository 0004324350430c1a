//! Affiche le contenu d'une playlist XSPF
//!
//! ```bash
//! RUST_LOG=pmoxspf=trace cargo run -p pmoxspf --example inspect_playlist -- ma_playlist.xspf
//! ```

use pmoxspf::{TrackLocation, XspfParser, try_magic};
use std::{env, fs};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: inspect_playlist <file.xspf>"))?;

    let head = fs::read(&path)?;
    if !try_magic(&head[..head.len().min(4096)]) {
        println!("Warning: {} does not look like an XSPF playlist", path);
    }

    let tracks = XspfParser::new().load_file(&path)?;
    println!("=== {} tracks ===", tracks.len());

    for (i, track) in tracks.iter().enumerate() {
        let location = match &track.location {
            Some(TrackLocation::LocalFile(p)) => p.display().to_string(),
            Some(TrackLocation::Stream(url)) => url.clone(),
            None => String::from("?"),
        };
        let duration = track
            .duration_secs()
            .map(|s| format!("{}:{:02}", s / 60, s % 60))
            .unwrap_or_else(|| "--:--".to_string());

        println!(
            "{:>3}. [{}] {} - {} ({})",
            i + 1,
            duration,
            track.artist,
            track.title,
            location
        );
    }

    Ok(())
}

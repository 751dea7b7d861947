//! Interactive driver: prompt for a URL and a style, generate, report.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use fbqr::{build_styled_qr, output, style, RenderOptions};

const OUT_DIR: &str = "generated";
const BASENAME: &str = "facebook_qr";

fn main() -> Result<()> {
    env_logger::init();

    let Some(url) = prompt("Enter the Facebook profile or page URL: ")? else {
        println!("\nCancelled.");
        return Ok(());
    };
    if url.is_empty() {
        println!("No URL provided. Exiting.");
        return Ok(());
    }

    println!("\nStyles:");
    for palette in &style::STYLES {
        println!(" {}) {}", palette.key, palette.name);
    }
    let style_key = match prompt("Choose style (1-4, default 2): ")? {
        Some(key) if !key.is_empty() => key,
        _ => style::DEFAULT_STYLE_KEY.to_string(),
    };

    // Best effort: with the directory in place, debug artifacts survive even
    // when generation fails before the final save.
    std::fs::create_dir_all(OUT_DIR).ok();

    let options = RenderOptions {
        debug_dir: Some(OUT_DIR.into()),
        ..RenderOptions::default()
    };
    let saved = build_styled_qr(&url, &style_key, &options)
        .and_then(|img| output::save_with_timestamp(&img, Path::new(OUT_DIR), BASENAME));
    match saved {
        Ok(path) => println!("✅ QR code saved to {}", path.display()),
        Err(err) => {
            println!("Failed to create QR code; debug images may remain in {OUT_DIR}/.");
            println!("Error: {err}");
        }
    }
    Ok(())
}

// Returns the trimmed line, or None when stdin is closed at the prompt.
fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

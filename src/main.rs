use std::env;
use std::io;
use std::path::PathBuf;

use detective_quest::{Expedition, build_mansion, load_mansion_from_file};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    // Logs go to stderr so the transcript on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mansion = match env::args().nth(1).map(PathBuf::from) {
        Some(map_path) => match load_mansion_from_file(&map_path) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Failed to load map file '{}': {e}", map_path.display());
                std::process::exit(1);
            }
        },
        None => build_mansion(),
    };

    let mut expedition = Expedition::new(mansion);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = expedition.run(&mut stdin.lock(), &mut stdout.lock())?;
    tracing::info!(
        outcome = ?summary.outcome,
        rooms = summary.visited.len(),
        "expedition finished"
    );

    let released = expedition.teardown();
    tracing::info!(released, "mansion released");

    Ok(())
}

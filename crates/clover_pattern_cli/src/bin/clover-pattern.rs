use std::io;

use clover_pattern::prelude::*;
use clover_pattern_cli::init_tracing;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // 120 columns, height = round(120 * 0.55) = 66 rows, 10 clusters of 3x3.
    let config = PatternConfig::new(120);
    debug!("Config: {:?}.", config);

    // Seeded from process entropy, so every run differs.
    let mut rng = rand::rng();
    let pattern = generate_pattern(&config, &mut rng)?;

    pattern.grid.write_to(io::stdout().lock())?;

    Ok(())
}

use anyhow::Result;
use std::io::{self, BufWriter, Write};

use country_sorting::{demo, logging, DemoConfig, VERSION};

fn main() -> Result<()> {
    logging::init()?;
    tracing::info!(version = VERSION, "Starting country-sorting");

    let config = DemoConfig::default();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    demo::run(&config, &mut out)?;
    out.flush()?;

    Ok(())
}

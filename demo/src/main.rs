//! `intentkit-demo` binary entry point.

use intentkit_demo::{cli, resolve_config, run, telemetry};

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let config = resolve_config(&matches)?;
    telemetry::initialise(&config.log_filter)?;

    println!("{}", run(&matches, &config)?);
    Ok(())
}

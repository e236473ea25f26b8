//! intentkit demo
//!
//! A headless rendition of a two-screen app: the main screen navigates to a
//! second screen, optionally passing text through the request payload.

pub mod config;
pub mod host;
pub mod screens;
pub mod telemetry;

pub use config::{ConfigError, DemoConfig};
pub use host::{HostError, ScreenHost};
pub use screens::{MainScreen, SecondScreen};

use anyhow::Context as _;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use intentkit_request::Flags;
use std::path::PathBuf;

/// Command-line definition
#[must_use]
pub fn cli() -> Command {
    Command::new("intentkit-demo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Two-screen navigation demo for intentkit")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("package")
                .long("package")
                .global(true)
                .help("Package name of the simulated host"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .global(true)
                .help("Log filter used when RUST_LOG is unset"),
        )
        .subcommand(Command::new("open").about("Open the second screen without a payload"))
        .subcommand(
            Command::new("open-with-extra")
                .about("Open the second screen carrying a text payload")
                .arg(text_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Print the request open-with-extra would send")
                .arg(text_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

fn text_arg() -> Arg {
    Arg::new("text")
        .long("text")
        .help("Text to send (defaults to the configured extra_text)")
}

/// Resolve configuration from the file and global flags
///
/// # Errors
///
/// Returns [`ConfigError`] when the configuration file cannot be loaded.
pub fn resolve_config(matches: &ArgMatches) -> Result<DemoConfig, ConfigError> {
    let path = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let mut config = DemoConfig::load(path)?;
    if let Some(package) = matches.get_one::<String>("package") {
        config = config.with_package_name(package);
    }
    if let Some(filter) = matches.get_one::<String>("log") {
        config = config.with_log_filter(filter);
    }
    Ok(config)
}

/// Run a parsed command and return what it prints
///
/// # Errors
///
/// Fails when the host refuses navigation or output cannot be encoded.
pub fn run(matches: &ArgMatches, config: &DemoConfig) -> anyhow::Result<String> {
    let host = ScreenHost::new(config.package_name.clone())
        .register::<MainScreen<'static>>()
        .register::<SecondScreen>();
    let main = MainScreen::new(&host);
    let flags = Flags::from_bits(config.flags);

    match matches.subcommand() {
        Some(("open", _)) => {
            main.open_second().context("opening second screen")?;
            Ok(render_current(&host))
        }
        Some(("open-with-extra", args)) => {
            let text = text_or_default(args, config);
            main.open_second_with_text(text, flags)
                .context("opening second screen with text")?;
            Ok(render_current(&host))
        }
        Some(("show", args)) => {
            let request = main.second_with_text(text_or_default(args, config), flags);
            if args.get_flag("json") {
                serde_json::to_string_pretty(&request).context("encoding request")
            } else {
                let component = request
                    .component()
                    .map_or_else(|| "<unset>".to_owned(), ToString::to_string);
                let mut out = format!("Target: {component}\nFlags: {}\nExtras:", request.flags());
                for (key, value) in request.extras().iter() {
                    out.push_str(&format!("\n  {key} ({}): {value:?}", value.kind()));
                }
                Ok(out)
            }
        }
        _ => anyhow::bail!("no command given"),
    }
}

fn text_or_default<'a>(args: &'a ArgMatches, config: &'a DemoConfig) -> &'a str {
    args.get_one::<String>("text")
        .map_or(config.extra_text.as_str(), String::as_str)
}

fn render_current(host: &ScreenHost) -> String {
    host.current()
        .map_or_else(String::new, |request| SecondScreen::render(&request))
}

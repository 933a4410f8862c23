//! Tinkertable CLI entry point.
//!
//! Runs the interactive console over a demo provider so the binary is
//! usable standalone; real hosts embed [`Console`] and wire their own
//! providers.

use std::env;
use std::process::ExitCode;

use tinkertable_console::{Console, ConsoleConfig, Prompt};
use tinkertable_registry::{FieldProvider, FieldRegistry, FieldSpec, VarCell};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    no_banner: bool,
}

/// Demo variables standing in for a host game's state.
struct DemoStats {
    hp: VarCell<i64>,
    mana: VarCell<i64>,
    speed: VarCell<f64>,
    motd: VarCell<String>,
}

impl DemoStats {
    fn new() -> Self {
        Self {
            hp: VarCell::new(100),
            mana: VarCell::new(50),
            speed: VarCell::new(1.5),
            motd: VarCell::new(String::from("welcome")),
        }
    }
}

impl FieldProvider for DemoStats {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec::integer("hp", &self.hp),
            FieldSpec::integer("mana", &self.mana),
            FieldSpec::float("speed", &self.speed),
            FieldSpec::text("motd", &self.motd),
            FieldSpec::constant("version", env!("CARGO_PKG_VERSION")),
        ]
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.no_banner = true,
            other => return Err(format!("unknown option: {other}").into()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tinkertable {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut registry = FieldRegistry::new();
    registry.add_provider(DemoStats::new());

    let console_config = ConsoleConfig::default().with_banner(!config.no_banner);
    let console = Console::with_config(registry, console_config);

    let mut prompt = Prompt::new(console)?;
    prompt.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mTinkertable\x1b[0m - Embeddable developer console

\x1b[1mUSAGE:\x1b[0m
    tinkertable [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --no-banner        Skip the welcome banner

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    /set <name> <value>   Set a variable (type-coerced)
    /reset <name>         Restore a variable's initial value
    /get <name>           Print a variable's current value
    /getAll               List all registered variable names
    Ctrl+D                Exit

The binary wires a demo provider (hp, mana, speed, motd, version); embed
the tinkertable crates to expose your own variables."
    );
}

//! MIPS simulator CLI.
//!
//! This binary loads a data image and a program image and runs the program
//! until it executes the exit syscall. It performs:
//! 1. **Setup:** Reads an optional JSON configuration and applies command-line overrides.
//! 2. **Loading:** Parses both hex images; any load failure is fatal (exit status 1).
//! 3. **Execution:** Steps the simulator to completion with the console on stdin/stdout
//!    and draw syscalls sent to the UDP virtual screen.
//! 4. **Reporting:** Optionally dumps the final register state and execution statistics.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::sim::{Simulator, loader};
use mipsim_core::soc::devices::{NullDisplay, StdConsole, UdpDisplay};
use mipsim_core::soc::traits::DrawTarget;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Single-cycle MIPS instruction-set simulator",
    long_about = "Run a MIPS program from hex memory images.\n\nEach image holds one hexadecimal word per line. The program starts at 0x3000\nand runs until it executes the exit syscall (code 10).\n\nExamples:\n  mipsim fib_data.hex fib_prog.hex\n  mipsim data.hex prog.hex --no-display --stats\n  RUST_LOG=debug mipsim data.hex prog.hex --display 192.168.1.20:9999"
)]
struct Cli {
    /// Data memory image (hex word per line).
    data: PathBuf,

    /// Program memory image (hex word per line).
    program: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Virtual screen address (host:port); overrides the configuration.
    #[arg(long, conflicts_with = "no_display")]
    display: Option<String>,

    /// Discard draw syscalls instead of sending them.
    #[arg(long)]
    no_display: bool,

    /// Trace every executed instruction.
    #[arg(long)]
    trace: bool,

    /// Print the register state after the program exits.
    #[arg(long)]
    dump_state: bool,

    /// Print execution statistics after the program exits.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let mut config = load_config(cli.config.as_ref());
    if cli.trace {
        config.general.trace_instructions = true;
    }
    if let Some(addr) = &cli.display {
        config.display.enabled = true;
        config.display.address.clone_from(addr);
    }
    if cli.no_display {
        config.display.enabled = false;
    }

    let data = loader::load_image(&cli.data, config.memory.data_words).unwrap_or_else(|e| fatal(&e));
    let program = loader::load_image(&cli.program, config.memory.program_words)
        .unwrap_or_else(|e| fatal(&e));

    eprintln!("[*] Data:    {} ({} words)", cli.data.display(), data.len());
    eprintln!("[*] Program: {} ({} words)", cli.program.display(), program.len());

    let mut sim = Simulator::from_images(
        &config,
        &data,
        &program,
        Box::new(StdConsole::new()),
        open_display(&config),
    );

    let steps = sim.run();
    info!(steps, "program finished");

    if cli.dump_state {
        sim.cpu.dump_state();
    }
    if cli.stats {
        sim.stats.print();
    }
}

/// Installs the tracing subscriber. `RUST_LOG` wins over the `--trace` default.
fn init_tracing(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the configuration file, or returns the defaults when none is given.
fn load_config(path: Option<&PathBuf>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        fatal(&format!("could not read config '{}': {e}", path.display()))
    });
    Config::from_json(&text).unwrap_or_else(|e| fatal(&e))
}

/// Opens the configured display, falling back to discarding draws.
fn open_display(config: &Config) -> Box<dyn DrawTarget> {
    if !config.display.enabled {
        return Box::new(NullDisplay);
    }
    match UdpDisplay::connect(&config.display.address) {
        Ok(display) => {
            eprintln!("[*] Display: {}", display.target());
            Box::new(display)
        }
        Err(e) => {
            warn!(address = %config.display.address, error = %e, "display unavailable, draws discarded");
            Box::new(NullDisplay)
        }
    }
}

fn fatal(err: &dyn std::fmt::Display) -> ! {
    eprintln!("\n[!] FATAL: {err}");
    process::exit(1);
}

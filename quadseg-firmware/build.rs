//! Build script for quadseg-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml and generates the board configuration

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use quadseg_core::config::DisplayConfig;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    setup_linker(&out_dir);
    let config = load_config();
    generate_config(&out_dir, &config);
}

/// Set up linker search paths and scripts
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Skip scripts already supplied through .cargo/config.toml
    let rustflags = env::var("CARGO_ENCODED_RUSTFLAGS").unwrap_or_default();
    for arg in ["--nmagic", "-Tlink.x", "-Tlink-rp.x", "-Tdefmt.x"] {
        if !rustflags.contains(arg) {
            println!("cargo:rustc-link-arg-bins={}", arg);
        }
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and validate display.toml
fn load_config() -> DisplayConfig {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");
    if !config_path.exists() {
        fail("display.toml not found", "Create one next to Cargo.toml.");
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read display.toml", &e.to_string()),
    };

    let config: DisplayConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail("Invalid display.toml", &e.to_string()),
    };

    if let Err(e) = config.validate() {
        fail("Invalid display configuration", &e.to_string());
    }

    config
}

/// Write `display_config.rs`: the config constant and a pin-taking macro
fn generate_config(out_dir: &Path, config: &DisplayConfig) {
    let timing = &config.timing;
    let pins = &config.pins;
    let mut code = String::new();

    writeln!(code, "// Generated from display.toml by build.rs").unwrap();
    writeln!(
        code,
        "pub const DISPLAY_CONFIG: DisplayConfig = DisplayConfig {{ \
         timing: TimingConfig {{ refresh_interval_us: {}, count_interval_ms: {} }}, \
         pins: DisplayPins {{ digits: {:?}, data: {}, latch: {}, clock: {} }} }};",
        timing.refresh_interval_us,
        timing.count_interval_ms,
        pins.digits,
        pins.data,
        pins.latch,
        pins.clock,
    )
    .unwrap();

    // take_pin! needs literal pin numbers, so the mapping is spelled out here
    let digits: Vec<String> = pins
        .digits
        .iter()
        .map(|pin| format!("take_pin!($p, {})", pin))
        .collect();
    writeln!(code).unwrap();
    writeln!(code, "/// Take (digits, data, clock, latch) from the peripherals").unwrap();
    writeln!(code, "macro_rules! display_pins {{").unwrap();
    writeln!(code, "    ($p:expr) => {{").unwrap();
    writeln!(
        code,
        "        ([{}], take_pin!($p, {}), take_pin!($p, {}), take_pin!($p, {}))",
        digits.join(", "),
        pins.data,
        pins.clock,
        pins.latch,
    )
    .unwrap();
    writeln!(code, "    }};").unwrap();
    writeln!(code, "}}").unwrap();

    fs::write(out_dir.join("display_config.rs"), code).unwrap();
}

fn fail(title: &str, detail: &str) -> ! {
    let mut lines = String::new();
    for line in detail.lines() {
        let truncated = if line.chars().count() > 64 {
            format!("{}...", line.chars().take(61).collect::<String>())
        } else {
            line.to_string()
        };
        lines.push_str(&format!("║  {:<64} ║\n", truncated));
    }

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, lines
    );
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Prints an input string in every style a registry serves.
//!
//! ```text
//! cargo run --example stylize_demo -- "parse HTTPResponse code"
//! cargo run --example stylize_demo -- "parse HTTPResponse code" configs/identifiers.yaml
//! RUST_LOG=stylize=debug cargo run --example stylize_demo -- "helloWorld"
//! ```

use std::env;

use anyhow::Context;
use stylize::config::load_and_validate_config;
use stylize::{Style, StyleRegistry, StylizeError};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input_text> [config.yaml]", args[0]);
        std::process::exit(1);
    }

    let input = &args[1];
    let registry = match args.get(2) {
        Some(path) => {
            let cfg = load_and_validate_config(path)
                .with_context(|| format!("loading registry config '{}'", path))?;
            StyleRegistry::from_config(&cfg)
        }
        None => StyleRegistry::new(),
    };

    println!("Input: \"{}\"", input);
    println!("{}", "─".repeat(48));

    for style in Style::ALL {
        match registry.stylize_with(input, style) {
            Ok(output) => println!("{:<18} {}", style.name(), output),
            Err(StylizeError::UnsupportedStyle(_)) => println!("{:<18} (not registered)", style.name()),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

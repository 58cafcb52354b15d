mod cli;

use anyhow::Context;
use clap::Parser;

use ramp_engine::logging::{LoggingConfig, init_logging};
use ramp_engine::paint::PALETTE;
use ramp_engine::{ExportConfig, GradientSpec, export_png};

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log_filter.clone(),
        ..LoggingConfig::default().with_verbosity(cli.verbose)
    });

    match cli.command {
        Commands::Random { seed } => {
            let spec = cli::random_spec(seed);
            print_spec(&spec);
        }
        Commands::Css { spec, copy } => {
            let spec = spec.resolve()?;
            let declaration = spec.css_declaration();
            println!("{declaration}");
            if copy {
                copy_to_clipboard(&declaration);
            }
        }
        Commands::Export { spec, width, height, out } => {
            let spec = spec.resolve()?;
            let config = ExportConfig {
                size: cli::validate_canvas(width, height)?,
                dir: out,
                ..ExportConfig::default()
            };
            let path = export_png(&spec, &config)
                .with_context(|| format!("failed to export {spec} to {}", config.dir.display()))?;
            println!("{}", path.display());
        }
        Commands::Palette => {
            for (i, color) in PALETTE.iter().enumerate() {
                println!("{i:>2}  {color}");
            }
        }
    }

    Ok(())
}

fn print_spec(spec: &GradientSpec) {
    println!("angle   {}", spec.angle);
    for (i, color) in spec.colors.iter().enumerate() {
        println!("color {i} {color}");
    }
    println!("{}", spec.css_declaration());
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
        Ok(()) => log::info!("copied CSS to clipboard"),
        Err(e) => log::warn!("clipboard unavailable: {e}"),
    }
}

use clap::{Parser, Subcommand};
use qr_tag::{RenderOptions, SymbolGeometry, build_symbol_matrix_with, encode_alphanumeric, render, tools};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtag", version, about = "QR symbol matrix and bit-stream tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text into the alphanumeric bit-stream
    Encode {
        #[arg(long)]
        text: String,
    },
    /// Build the structural matrix and render it
    Build {
        /// Write an image here instead of printing to the terminal
        #[arg(long)]
        out: Option<PathBuf>,
        /// Pixels per module (default 15, or QR_MODULE_PX)
        #[arg(long)]
        module_px: Option<usize>,
        /// Quiet zone width in modules (default 4, or QR_QUIET_ZONE)
        #[arg(long)]
        quiet_zone: Option<usize>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode { text } => match encode_alphanumeric(&text) {
            Ok(stream) => {
                println!("{}", stream.to_bit_string());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("encode failed: {err}");
                ExitCode::FAILURE
            }
        },
        Command::Build {
            out,
            module_px,
            quiet_zone,
        } => {
            let matrix = build_symbol_matrix_with(&SymbolGeometry::version2());
            let options = RenderOptions {
                module_px: module_px.unwrap_or_else(tools::module_px_from_env),
                quiet_zone: quiet_zone.unwrap_or_else(tools::quiet_zone_from_env),
            };
            match out {
                Some(path) => match render::save_image(&matrix, &options, &path) {
                    Ok(()) => {
                        println!("wrote {}", path.display());
                        ExitCode::SUCCESS
                    }
                    Err(err) => {
                        eprintln!("render failed: {err}");
                        ExitCode::FAILURE
                    }
                },
                None => {
                    print!("{}", render::render_text(&matrix, options.quiet_zone));
                    ExitCode::SUCCESS
                }
            }
        }
    }
}

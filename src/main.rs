use clap::{Parser, Subcommand};

mod commands;
mod output;
mod tty;

use commands::{models, new};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "botstrap")]
#[command(version = VERSION)]
#[command(about = "CLI tool for bootstrapping conversational AI assistant projects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new assistant project
    #[command(visible_alias = "create")]
    New(new::NewArgs),
    /// List built-in model presets
    Models(models::ModelsArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = commands::run_json(cli.command);
    output::print_json_result(json_result).ok();

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}

use clap::{Parser, Subcommand};

mod commands;

use raygun_deployment::output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "raygun-deployment")]
#[command(version = VERSION)]
#[command(about = "Reports deployment information to Raygun.io")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the latest version tag and its revision, then send a deployment event
    Report(commands::report::ReportArgs),
    /// Show what report would send, without sending anything
    Resolve(commands::resolve::ResolveArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = match cli.command {
        Commands::Report(args) => output::map_cmd_result_to_json(commands::report::run(args)),
        Commands::Resolve(args) => output::map_cmd_result_to_json(commands::resolve::run(args)),
    };

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(1);
    }

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

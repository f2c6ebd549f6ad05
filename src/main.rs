use batch_resize::{config::ResizeConfig, output, process};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Resize every image in a directory to a fixed size.
///
/// Help and version flags are disabled: any invocation that is not exactly
/// four arguments prints the one-line usage instead.
#[derive(Parser)]
#[command(name = "batch-resize")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Target height in pixels
    #[arg(value_name = "HEIGHT", allow_hyphen_values = true)]
    height: String,

    /// Target width in pixels
    #[arg(value_name = "WIDTH", allow_hyphen_values = true)]
    width: String,

    /// Directory to read images from (not recursive)
    #[arg(value_name = "INPUT_DIR", allow_hyphen_values = true)]
    input_dir: PathBuf,

    /// Directory to write resized copies to
    #[arg(value_name = "OUTPUT_DIR", allow_hyphen_values = true)]
    output_dir: PathBuf,
}

/// Parse the command line, or `None` when it is not exactly four arguments.
///
/// The count is taken on the raw arguments. Clap would otherwise swallow a
/// literal `--`, so one is inserted ahead of the values to make clap take
/// every one of them as given, a user-supplied `--` included.
fn parse_cli(args: impl IntoIterator<Item = OsString>) -> Option<Cli> {
    let mut args = args.into_iter();
    let program = args.next()?;
    let values: Vec<OsString> = args.collect();
    if values.len() != 4 {
        return None;
    }
    let argv = [program, OsString::from("--")].into_iter().chain(values);
    Cli::try_parse_from(argv).ok()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Mis-invocations and validation failures are reported on stdout and
    // still exit 0.
    let Some(cli) = parse_cli(std::env::args_os()) else {
        output::print_usage();
        return Ok(());
    };

    let config = match ResizeConfig::from_args(
        &cli.height,
        &cli.width,
        &cli.input_dir,
        &cli.output_dir,
    ) {
        Ok(config) => config,
        Err(e) => {
            output::print_config_error(&e);
            return Ok(());
        }
    };

    output::print_started();
    let summary = process::process(&config, output::print_process_event)?;
    output::print_summary(&summary, config.size);

    Ok(())
}

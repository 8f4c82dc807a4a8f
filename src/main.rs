use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use paprika_import::{ImportConfig, PaprikaImporter};

#[derive(Parser)]
#[command(name = "paprika-import", version)]
#[command(about = "Convert Paprika exports into Nextcloud Cookbook folders", long_about = None)]
struct Cli {
    /// A .paprikarecipe file, a directory of them, or a .paprikarecipes bulk export
    input: PathBuf,

    /// Directory to write one folder per recipe into
    output_dir: PathBuf,

    /// Anything after the output directory is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _extra: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            eprintln!("{}", Cli::command().render_usage());
            process::exit(1);
        }
    };

    let result = PaprikaImporter::builder()
        .input(&cli.input)
        .output(&cli.output_dir)
        .config(ImportConfig::default())
        .run();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    println!("Done. Output is in: {}", cli.output_dir.display());
}

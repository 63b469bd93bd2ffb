//! Quickbuild CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use quickbuild_codegen::ModeFlags;
use quickbuild_foundation::Result;
use quickbuild_grid::{BuildOptions, NamingOptions};
use quickbuild_runtime::{CompileOptions, ConfigSource, Session, SourceFile};
use tracing_subscriber::EnvFilter;

/// Offline MUSH building tool.
///
/// Lays out an area (rooms connected by exits, optionally zoned and
/// parented) from a text file and converts it into uploadable softcode.
/// Output can be re-uploaded to update an area it already built.
#[derive(Parser, Debug)]
#[command(name = "quickbuild")]
#[command(version)]
struct Cli {
    /// Grid files to compile, in order (standard input if none)
    files: Vec<PathBuf>,

    /// Use this configuration file instead of the defaults
    #[arg(long, value_name = "FILE", conflicts_with = "no_config_file")]
    config_file: Option<PathBuf>,

    /// Don't read any configuration file
    #[arg(long)]
    no_config_file: bool,

    /// Don't detect <B>racket style exit names
    #[arg(short = 'b', long)]
    nobrackets: bool,

    /// Bracket the first letter of every word of unmarked exit names
    #[arg(long)]
    autobrackets: bool,

    /// Make REVERSE one-way instead of registering both directions
    #[arg(long)]
    noreverse: bool,

    /// Reuse objects this tool already built (the default)
    #[arg(long)]
    managed: bool,

    /// Always build new objects; don't look for existing exits or attributes
    #[arg(long)]
    unmanaged: bool,

    /// Don't use side-effect functions (implies --unmanaged)
    #[arg(long)]
    nosidefx: bool,

    /// Show debug output
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn compile_options(&self) -> Result<CompileOptions> {
        let naming = NamingOptions::default()
            .with_detect_brackets(!self.nobrackets)
            .with_auto_brackets(self.autobrackets);
        let build = BuildOptions::default()
            .with_naming(naming)
            .with_bidirectional_reverse(!self.noreverse);
        let flags = ModeFlags {
            managed: self.managed,
            unmanaged: self.unmanaged,
            no_side_effects: self.nosidefx,
        };
        CompileOptions::from_flags(build, flags)
    }

    fn config_source(&self) -> ConfigSource {
        match (&self.config_file, self.no_config_file) {
            (_, true) => ConfigSource::Disabled,
            (Some(path), false) => ConfigSource::File(path.clone()),
            (None, false) => ConfigSource::Defaults,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the log subscriber. `RUST_LOG` overrides the default level.
///
/// Warnings are printed by `run` itself, so the default level only lets
/// errors through unless `--debug` was given.
fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.compile_options()?;
    tracing::debug!(?options, files = ?cli.files, "starting");

    let mut sources = cli.config_source().load()?;
    if cli.files.is_empty() {
        sources.push(SourceFile::stdin()?);
    } else {
        for path in &cli.files {
            sources.push(SourceFile::load(path)?);
        }
    }

    let compilation = Session::new(options).compile(&sources)?;
    for diagnostic in &compilation.diagnostics {
        eprintln!("WARNING: {diagnostic}");
    }
    for command in &compilation.commands {
        println!("{command}");
    }
    Ok(())
}

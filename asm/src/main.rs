use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
    process::ExitCode,
};

use color_print::cprintln;
use hackasm::{assemble, util, Error, Program};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input assembly file
    input: PathBuf,

    /// Output file [default: <INPUT> with extension .hack]
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Dump translated program
    #[clap(short, long)]
    dump: bool,

    /// Write user-defined symbols as YAML
    #[clap(short, long)]
    symbols: Option<PathBuf>,

    /// Suppress progress output
    #[clap(short, long)]
    quiet: bool,
}

fn create_parent(path: &Path) -> Result<(), Error> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
            .map_err(|e| Error::DirCreate(dir.display().to_string(), e)),
        _ => Ok(()),
    }
}

fn run(args: &Args) -> Result<Program, Error> {
    let input = args.input.display().to_string();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("hack"));

    if !args.quiet {
        cprintln!("<bold>1. Read File & Collect Labels</>");
        println!("  < {}", input);
    }
    let file = File::open(&args.input).map_err(|e| Error::FileOpen(input, e))?;
    let program = assemble(BufReader::new(file))?;

    if !args.quiet {
        cprintln!("<bold>2. Resolve Symbols & Generate Binary</>");
        println!("  > {}", output.display());
    }
    let name = output.display().to_string();
    create_parent(&output)?;
    let file = File::create(&output).map_err(|e| Error::FileCreate(name.clone(), e))?;
    program
        .write_to(BufWriter::new(file))
        .map_err(|e| Error::FileWrite(name, e))?;

    if let Some(path) = &args.symbols {
        if !args.quiet {
            println!("  > {}", path.display());
        }
        create_parent(path)?;
        util::write_symbols(path, &program.symbols)?;
    }
    Ok(program)
}

fn main() -> ExitCode {
    use clap::Parser;

    let args = Args::parse();
    match run(&args) {
        Ok(program) => {
            if args.dump {
                util::print_dump(&program);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            err.print_diag(&args.input.display().to_string());
            ExitCode::from(err.exit_code())
        }
    }
}

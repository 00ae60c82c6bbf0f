use clap::{Parser as ClapParser, Subcommand};
use prefixc::cli::{self, CliError, CompileOptions, EmitStage};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "prefixc")]
#[command(about = "prefixc - compiles parenthesized prefix calls into C-style call syntax")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a source string and print a pipeline stage
    Compile {
        /// Prefix-call source text (reads from stdin if not provided)
        source: Option<String>,

        /// Pipeline stage to print
        #[arg(long, value_enum)]
        emit: Option<EmitStage>,

        /// Pretty-print JSON stages
        #[arg(short, long)]
        pretty: bool,
    },

    /// Validate that a source string parses, without compiling it
    Check {
        /// Prefix-call source text (reads from stdin if not provided)
        source: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            source,
            emit,
            pretty,
        } => run_compile(source, emit, pretty),
        Commands::Check { source } => run_check(source),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_compile(
    source: Option<String>,
    emit: Option<EmitStage>,
    pretty: bool,
) -> Result<(), CliError> {
    let options = CompileOptions {
        source: read_source(source)?,
        emit: emit.unwrap_or_default(),
        pretty,
    };

    println!("{}", cli::execute_compile(&options)?);
    Ok(())
}

fn run_check(source: Option<String>) -> Result<(), CliError> {
    let source = read_source(source)?;
    cli::execute_check(&source)?;
    println!("Syntax is valid");
    Ok(())
}

fn read_source(source: Option<String>) -> Result<String, CliError> {
    match source {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

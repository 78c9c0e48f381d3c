use bincrypt::cli::{
    convert_file, deconvert_file, decrypt_file, encrypt_file, ConvertOptions, EncryptOptions,
};
use bincrypt::files::default_output_path;
use bincrypt::report::ErrorLog;
use bincrypt::stream::DEFAULT_CHUNK_SIZE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("BINCRYPT_VERSION");
const BUILD: &str = env!("BINCRYPT_BUILD");
const PROFILE: &str = env!("BINCRYPT_PROFILE");
const GIT_HASH: &str = env!("BINCRYPT_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "bincrypt")]
#[command(author, about = "Binary-text file converter with bit-split encryption", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file into its binary-text representation
    #[command(alias = "c")]
    Convert {
        /// Input file to convert
        input: PathBuf,

        /// Output file (defaults to <INPUT>.bin)
        output: Option<PathBuf>,

        /// Write bit groups without space separators
        #[arg(long)]
        no_spacing: bool,

        /// Bytes per output line
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },

    /// Reconstruct the original file from a binary-text file
    #[command(alias = "d")]
    Deconvert {
        /// Binary-text file to reconstruct
        input: PathBuf,

        /// Output file (defaults to <INPUT>.txt)
        output: Option<PathBuf>,
    },

    /// Split a file into a 7-bit payload file and a 1-bit key file
    #[command(alias = "e")]
    Encrypt {
        /// Input file to encrypt
        input: PathBuf,

        /// Payload output file (defaults to <INPUT>.bin)
        output: Option<PathBuf>,

        /// Key output file (defaults to <INPUT>.key)
        #[arg(long)]
        key: Option<PathBuf>,

        /// Write bit groups without space separators
        #[arg(long)]
        no_spacing: bool,

        /// Bytes per output line
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },

    /// Rebuild the original file from a payload file and its key file
    #[command(alias = "x")]
    Decrypt {
        /// Payload file to decrypt
        input: PathBuf,

        /// Output file (defaults to <INPUT>.txt)
        output: Option<PathBuf>,

        /// Key file written by encrypt
        #[arg(long, required = true)]
        key: PathBuf,
    },
}

/// Print accumulated diagnostics after the pass, never interleaved
fn report_log(log: &ErrorLog) {
    if log.is_empty() {
        return;
    }
    eprintln!("Processed with {} errors:", log.len());
    for diagnostic in log.iter() {
        eprintln!("{}", diagnostic);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("bincrypt {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Convert {
            input,
            output,
            no_spacing,
            chunk_size,
        } => {
            let output = output.unwrap_or_else(|| default_output_path(&input, "bin"));
            let options = ConvertOptions {
                spaced: !no_spacing,
                chunk_size,
            };

            match convert_file(&input, &output, &options) {
                Ok(bytes) => {
                    println!("Saved binary to {} ({} bytes converted)", output.display(), bytes);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Deconvert { input, output } => {
            let output = output.unwrap_or_else(|| default_output_path(&input, "txt"));

            match deconvert_file(&input, &output) {
                Ok((bytes, log)) => {
                    println!("Saved: {} ({} bytes)", output.display(), bytes);
                    report_log(&log);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Encrypt {
            input,
            output,
            key,
            no_spacing,
            chunk_size,
        } => {
            let output = output.unwrap_or_else(|| default_output_path(&input, "bin"));
            let key = key.unwrap_or_else(|| default_output_path(&input, "key"));
            let options = EncryptOptions {
                spaced: !no_spacing,
                chunk_size,
            };

            match encrypt_file(&input, &output, &key, &options) {
                Ok(bytes) => {
                    println!(
                        "Saved payload to {} and key to {} ({} bytes encrypted)",
                        output.display(),
                        key.display(),
                        bytes
                    );
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Decrypt { input, output, key } => {
            let output = output.unwrap_or_else(|| default_output_path(&input, "txt"));

            match decrypt_file(&input, &key, &output) {
                Ok((bytes, log)) => {
                    println!("Saved: {} ({} bytes)", output.display(), bytes);
                    report_log(&log);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

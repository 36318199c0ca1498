//! qrelease binary: prints release identity and writes dmgbuild settings

use clap::{Parser, Subcommand, ValueEnum};
use qrelease::exit_codes::{self, EXIT_PANIC, EXIT_SUCCESS};
use qrelease::release::{Platform, SigningManifest, Stage, write_sha256_sidecar};
use qrelease::{DmgOptions, Identity, IdentityFormat, ReleaseError};
use std::{env, panic, path::PathBuf, process};

const VERSION: &str = qrelease::version::VERSION;

#[derive(Parser, Debug)]
#[command(version = VERSION, about = "Release identity and disk image layout for the Amazon Q CLI")]
struct Args {
    /// Log level (trace, debug, info, warn, error, or json:<level>)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved identity table
    Identity {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Render dmgbuild settings, optionally writing them to a file
    DmgSettings {
        /// Output path for the settings JSON (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not check the layout before rendering
        #[arg(long)]
        no_validate: bool,

        /// JSON layout to use instead of the built-in one
        #[arg(long)]
        descriptor: Option<PathBuf>,
    },
    /// Check the disk image layout
    ValidateDmg {
        /// JSON layout to check instead of the built-in one
        #[arg(long)]
        descriptor: Option<PathBuf>,
    },
    /// List the archives a release produces
    Artifacts {
        /// Target platform (defaults to the host)
        #[arg(long)]
        platform: Option<String>,

        /// Release stage (prod or gamma)
        #[arg(long)]
        stage: Option<String>,
    },
    /// Write a .sha256 sidecar next to a release archive
    Checksum {
        file: PathBuf,
    },
    /// Print the code-signing request manifest
    SigningManifest,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Json,
    Env,
}

impl From<Format> for IdentityFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => IdentityFormat::Json,
            Format::Env => IdentityFormat::Env,
        }
    }
}

fn main() {
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in qrelease");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle version flags before clap so build metadata is included
    if qrelease::version::is_version_flag(env::args().nth(1).as_deref()) {
        println!("qrelease {}", qrelease::version::full_version());
        return EXIT_SUCCESS;
    }

    let args = Args::parse();

    if let Some(ref level) = args.log_level {
        qrelease::logger::JsonLogger::init_with_level(level);
    } else {
        qrelease::logger::JsonLogger::init();
    }

    // Resolved once; everything below reads this value
    let identity = Identity::from_env();
    log::debug!("Resolved {} identity", identity.variant());

    match execute(args.command, &identity) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_codes::for_error(&e)
        }
    }
}

fn execute(command: Command, identity: &Identity) -> Result<(), ReleaseError> {
    match command {
        Command::Identity { format } => {
            println!("{}", qrelease::identity_report(identity, format.into())?);
        }
        Command::DmgSettings {
            output,
            no_validate,
            descriptor,
        } => {
            let to_stdout = output.is_none();
            let options = DmgOptions {
                output,
                skip_validation: no_validate,
                descriptor,
            };
            let rendered = qrelease::prepare_dmg_settings(identity, &options)?;
            if to_stdout {
                println!("{}", rendered);
            }
        }
        Command::ValidateDmg { descriptor } => {
            let descriptor = qrelease::load_descriptor(identity, descriptor.as_deref())?;
            descriptor.validate()?;
            println!("✓ Disk image layout '{}' is valid", descriptor.title);
        }
        Command::Artifacts { platform, stage } => {
            let platform = match platform {
                Some(name) => Platform::parse(&name)?,
                None => Platform::current()?,
            };
            let stage = Stage::parse(stage.as_deref())?;
            let plan = qrelease::release_plan(platform, stage);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Command::Checksum { file } => {
            let sidecar = write_sha256_sidecar(&file)?;
            println!("{}", sidecar.display());
        }
        Command::SigningManifest => {
            let manifest = SigningManifest::for_identity(identity);
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
    }
    Ok(())
}

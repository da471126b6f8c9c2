use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for minutize
#[derive(Parser)]
#[command(
    name = "minutize",
    version = env!("CARGO_PKG_VERSION"),
    about = "Normalize a time-tracking CSV export and expand it into one row per minute",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ./minutize.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite raw `D M<month> YYYY HH:MM` timestamps as `YYYY-M-D HH:MM`
    Clean {
        /// Raw log to read (default: raw_file from config)
        #[arg(long, value_name = "FILE")]
        input: Option<String>,

        /// Normalized log to write (default: clean_file from config)
        #[arg(long, value_name = "FILE")]
        output: Option<String>,

        #[arg(long = "skip-header", help = "Skip the first line of the raw log")]
        skip_header: bool,

        #[arg(long = "pad-dates", help = "Zero-pad single-digit months and days")]
        pad_dates: bool,
    },

    /// Expand every normalized interval into one row per minute
    Minutize {
        /// Normalized log to read (default: clean_file from config)
        #[arg(long, value_name = "FILE")]
        input: Option<String>,

        /// Minute log to write (default: minutes_file from config)
        #[arg(long, value_name = "FILE")]
        output: Option<String>,
    },

    /// Run clean and minutize back to back
    Run {
        #[arg(long, value_name = "FILE", help = "Raw log to read")]
        raw: Option<String>,

        #[arg(long, value_name = "FILE", help = "Intermediate normalized log")]
        clean: Option<String>,

        #[arg(long, value_name = "FILE", help = "Minute log to write")]
        minutes: Option<String>,

        #[arg(long = "skip-header", help = "Skip the first line of the raw log")]
        skip_header: bool,

        #[arg(long = "pad-dates", help = "Zero-pad single-digit months and days")]
        pad_dates: bool,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with the defaults")]
        init: bool,

        #[arg(long, short = 'f', requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },
}

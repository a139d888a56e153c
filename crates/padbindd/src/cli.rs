use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Run the daemon in the foreground.
    Run {
        /// The profile to run
        #[clap(short, long)]
        profile: Option<String>,
    },
    /// Validate a profile without touching any device.
    Check {
        /// The profile to check
        #[clap(short, long)]
        profile: Option<String>,
    },
    /// List the ids of connected gamepads.
    Devices {
        /// How long to watch for devices
        #[clap(short, long, default_value_t = 2)]
        seconds: u64,
    },
}

/// Bind gamepad buttons and sticks to keystrokes, macros and commands.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_profile() {
        let cli = Cli::try_parse_from(["padbindd", "-v", "run", "--profile", "pad.yaml"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.no_color);
        assert_eq!(
            cli.command,
            Command::Run {
                profile: Some("pad.yaml".to_string())
            }
        );
    }

    #[test]
    fn devices_defaults_to_two_seconds() {
        let cli = Cli::try_parse_from(["padbindd", "--no-color", "devices"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.command, Command::Devices { seconds: 2 });
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["padbindd"]).is_err());
    }
}

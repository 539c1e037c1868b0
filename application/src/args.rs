//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use common::Date;
use service::domain::item;

/// Preview of the shift calendar over a schedule fixture.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to run.
#[derive(Clone, Copy, Debug, Subcommand)]
pub enum Command {
    /// Prints the calendar grid of the provided days as JSON.
    Grid {
        /// First day to show (`YYYY-MM-DD`).
        #[arg(long)]
        from: Date,

        /// Number of days to show.
        #[arg(long, default_value_t = 3)]
        days: u16,

        /// Kind of items to show (`SHIFT` or `ACTIVITY`), all if omitted.
        #[arg(long)]
        kind: Option<item::Kind>,

        /// Shows only shifts having open positions.
        #[arg(long)]
        open_only: bool,
    },

    /// Prints the signup eligibility of every position state as JSON.
    Eligibility,
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;
    use common::Date;
    use service::domain::item;

    use super::{Args, Command};

    #[test]
    fn parses_grid() {
        let args = Args::try_parse_from([
            "shift-calendar",
            "grid",
            "--from",
            "2025-03-01",
            "--days",
            "2",
            "--kind",
            "SHIFT",
        ])
        .unwrap();

        assert_eq!(args.config, "config.toml");
        let Command::Grid {
            from,
            days,
            kind,
            open_only,
        } = args.command
        else {
            panic!("expected `grid` command");
        };
        assert_eq!(from, Date::from_ymd(2025, 3, 1).unwrap());
        assert_eq!(days, 2);
        assert_eq!(kind, Some(item::Kind::Shift));
        assert!(!open_only);
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(Args::try_parse_from([
            "shift-calendar",
            "grid",
            "--from",
            "01.03.2025",
        ])
        .is_err());
    }
}

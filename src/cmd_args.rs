use std::ffi::OsString;

pub use clap::Parser;
use clap::{Args, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Profile to read the API base URL and token from. Default is 'default'.
    /// If the profile is not configured, a blank profile is used.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Verbose mode
    /// Optional. Print debug logs.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Pages the CLI can drive
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Contact pages
    #[command(subcommand)]
    Contact(ContactCommand),

    /// Business directory pages
    #[command(subcommand)]
    Directory(DirectoryCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ContactCommand {
    /// Fill in and submit the Add Contact form
    Add(AddContactArgs),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCommand {
    /// Show a directory record in print layout
    View {
        /// Record identifier
        id: Option<String>,
    },
}

/// Values typed into the Add Contact form
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AddContactArgs {
    #[clap(long, default_value = "")]
    pub name: String,

    #[clap(long, default_value = "")]
    pub mobile: String,

    /// Group to select; repeat for several groups
    #[clap(long = "group")]
    pub groups: Vec<String>,

    #[clap(long, default_value = "")]
    pub email: String,

    #[clap(long, default_value = "")]
    pub address: String,

    #[clap(long, default_value = "")]
    pub state: String,

    #[clap(long, default_value = "")]
    pub pincode: String,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    verbose: bool,
    command: Command,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            verbose: args.verbose,
            command: args.command,
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

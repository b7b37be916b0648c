use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::{CommandFactory, Parser};
use conman_core::session::DEFAULT_SSH_PROGRAM;
use conman_core::{split_address, ConmanError, ConnectionRecord, Registry, SshLauncher, Store};
use log::debug;

/// Command-line arguments.
///
/// Actions are exclusive: adding needs `-k`, `-a` and `-n` together and
/// conflicts with `-c`, `-ls` and `-d`. `-h` prints help and exits before
/// any of that is checked.
#[derive(Parser, Debug)]
#[command(
    name = "conman",
    version,
    about = "Save named ssh connections and connect to them by name"
)]
pub struct Args {
    /// Path to the SSH key
    #[arg(
        short = 'k',
        long = "key",
        value_name = "PATH",
        value_parser = NonEmptyStringValueParser::new(),
        requires_all = ["address", "name"]
    )]
    pub key: Option<String>,

    /// SSH address in the format user@ip
    #[arg(
        short = 'a',
        long = "address",
        value_name = "USER@HOST",
        value_parser = NonEmptyStringValueParser::new(),
        requires_all = ["key", "name"]
    )]
    pub address: Option<String>,

    /// Custom name for the connection
    #[arg(
        short = 'n',
        long = "name",
        value_parser = NonEmptyStringValueParser::new(),
        requires_all = ["key", "address"]
    )]
    pub name: Option<String>,

    /// Connect using a saved connection
    #[arg(
        short = 'c',
        long = "connect",
        value_name = "NAME",
        value_parser = NonEmptyStringValueParser::new(),
        conflicts_with_all = ["key", "list", "delete"]
    )]
    pub connect: Option<String>,

    /// List saved connections
    #[arg(short = 'l', long = "ls", conflicts_with_all = ["key", "delete"])]
    pub list: bool,

    /// Verbose output for listing
    #[arg(short = 'v', long = "verbose", requires = "list")]
    pub verbose: bool,

    /// Delete a saved connection
    #[arg(
        short = 'd',
        long = "delete",
        value_name = "NAME",
        value_parser = NonEmptyStringValueParser::new(),
        conflicts_with = "key"
    )]
    pub delete: Option<String>,

    /// Connection store file [default: ~/.conman]
    #[arg(long = "store", env = "CONMAN_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// SSH client to run when connecting
    #[arg(long = "ssh", env = "CONMAN_SSH", value_name = "PROGRAM", default_value = DEFAULT_SSH_PROGRAM)]
    pub ssh: OsString,
}

/// The single action selected by one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add {
        name: String,
        address: String,
        key: String,
    },
    Connect {
        name: String,
    },
    List {
        verbose: bool,
    },
    Delete {
        name: String,
    },
    /// No action flag was given.
    Help,
}

impl Args {
    /// Collapse the parsed flags into one action. clap already rejected conflicting ones.
    pub fn action(&self) -> Action {
        if let (Some(key), Some(address), Some(name)) = (&self.key, &self.address, &self.name) {
            return Action::Add {
                name: name.clone(),
                address: address.clone(),
                key: key.clone(),
            };
        }
        if let Some(name) = &self.connect {
            return Action::Connect { name: name.clone() };
        }
        if self.list {
            return Action::List {
                verbose: self.verbose,
            };
        }
        if let Some(name) = &self.delete {
            return Action::Delete { name: name.clone() };
        }
        Action::Help
    }

    fn open_store(&self) -> anyhow::Result<Store> {
        match &self.store {
            Some(path) => Ok(Store::at(path)),
            None => Ok(Store::new()?),
        }
    }
}

/// Rewrites the single-dash `-ls` spelling to `--ls` so clap doesn't read it as `-l -s`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out: Vec<OsString> = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if arg == "--" {
            passthrough = true;
        }
        if !passthrough && arg == "-ls" {
            out.push(OsString::from("--ls"));
        } else {
            out.push(arg);
        }
    }
    out
}

pub fn run_cli(args: Args) -> anyhow::Result<()> {
    let action = args.action();
    debug!("Selected {action:?}");

    if action == Action::Help {
        print_help();
        return Ok(());
    }

    let registry = Registry::new(args.open_store()?);
    debug!("Using store {}", registry.store().path().display());
    let mut out = io::stdout().lock();

    match action {
        Action::Add { name, address, key } => run_add(&registry, &mut out, name, &address, key),
        Action::Connect { name } => {
            let launcher = SshLauncher::new(args.ssh.clone());
            registry
                .connect(&name, &launcher)
                .context("Error connecting")
        }
        Action::List { verbose } => run_list(&registry, &mut out, verbose),
        Action::Delete { name } => run_delete(&registry, &mut out, &name),
        Action::Help => Ok(()),
    }
}

/// Exit code for a failed run: the ssh client's own code for a failed session, 1 otherwise.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ConmanError>()
        .map_or(1, ConmanError::exit_code)
}

fn run_add(
    registry: &Registry,
    out: &mut impl Write,
    name: String,
    address: &str,
    key: String,
) -> anyhow::Result<()> {
    let (user, host) = split_address(address).context("Error parsing address")?;
    registry
        .add(ConnectionRecord::new(name.clone(), user, host, key))
        .context("Error adding connection")?;
    writeln!(out, "{name} has been created and added to list")?;
    Ok(())
}

fn run_list(registry: &Registry, out: &mut impl Write, verbose: bool) -> anyhow::Result<()> {
    let records = registry.list().context("Error loading connections")?;
    writeln!(out, "Saved entries:")?;
    for record in &records {
        if verbose {
            writeln!(out, "{record}")?;
        } else {
            writeln!(out, "{}", record.name)?;
        }
    }
    Ok(())
}

fn run_delete(registry: &Registry, out: &mut impl Write, name: &str) -> anyhow::Result<()> {
    registry
        .delete(name)
        .context("Error deleting connection")?;
    writeln!(out, "{name} has been deleted")?;
    Ok(())
}

fn print_help() {
    println!("{}", Args::command().render_help());
}

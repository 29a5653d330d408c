use anyhow::Result;
use clap::{Parser, Subcommand};
use jot::areas::repository::Repository;

#[derive(Parser)]
#[command(
    name = "jot",
    version = "0.1.0",
    about = "A minimal snapshot-based version control system",
    long_about = "jot tracks a set of files, saves their content into immutable \
    content-addressed snapshots, and restores any prior snapshot on demand. \
    It is a learning-scale engine: linear history, one working tree, one user.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize the repository layout",
        long_about = "This command creates the .jot metadata layout in the current directory \
        or at the specified path. Running it on an existing repository is harmless."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "config",
        about = "Get and set a username",
        long_about = "This command shows the configured username, or records a new one \
        to be used as the author of subsequent commits."
    )]
    Config {
        #[arg(index = 1, help = "The username to record as commit author")]
        username: Option<String>,
    },
    #[command(
        name = "add",
        about = "Add a file to the index",
        long_about = "This command stages a file for inclusion in the next snapshot. \
        Without an argument it lists the tracked files."
    )]
    Add {
        #[arg(index = 1, help = "The file to track")]
        path: Option<String>,
    },
    #[command(
        name = "commit",
        about = "Save changes",
        long_about = "This command snapshots the tracked files and appends an entry to the \
        commit log. Committing unchanged content is a no-op."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: Option<String>,
    },
    #[command(
        name = "log",
        about = "Show commit logs",
        long_about = "This command lists all commits, newest first, with their snapshot \
        hash, author and message."
    )]
    Log,
    #[command(
        name = "checkout",
        about = "Restore a file",
        long_about = "This command restores the files of a snapshot into the working \
        directory, overwriting current contents. Accepts a full snapshot hash or an \
        unambiguous prefix of at least four characters."
    )]
    Checkout {
        #[arg(index = 1, help = "The commit id to restore")]
        commit: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init()?
        }
        Commands::Config { username } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.config(username.as_deref())?
        }
        Commands::Add { path } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.add(path.as_deref())?;
        }
        Commands::Commit { message } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.commit(message.as_deref())?;
        }
        Commands::Log => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.log()?
        }
        Commands::Checkout { commit } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.checkout(commit.as_deref())?;
        }
    }

    Ok(())
}

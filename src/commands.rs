use clap::{CommandFactory, Parser, Subcommand};

use crate::{errors::CrossRepoError, verbs};

const DEFAULT_CORE_REPO: &str = "ManageIQ/manageiq@master";
const DEFAULT_SETUP_COMMAND: &str = "bin/setup";
const DEFAULT_TEST_COMMAND: &str = "bundle exec rake spec";

#[derive(Debug, Parser)]
#[command(
    name = "cross-repo",
    about = "Test a ManageIQ plugin against local checkouts of its dependencies",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn execute() -> Result<(), CrossRepoError> {
        let args = Cli::parse();

        match args.command {
            Some(Commands::Root) => verbs::root::execute(),
            Some(Commands::Test {
                plugin,
                core,
                gems,
                setup_command,
                test_command,
            }) => verbs::test::execute(&verbs::test::TestArgs {
                plugin,
                core,
                gems,
                setup_command,
                test_command,
            }),
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Show the root directory for managed checkouts")]
    Root,

    #[command(about = "Run a plugin's test suite against local core and gem checkouts")]
    Test {
        #[arg(short, long)]
        #[arg(help = "Plugin repository (org/name@ref, org/name#pr, URL or local path)")]
        plugin: String,

        #[arg(short, long, default_value = DEFAULT_CORE_REPO)]
        #[arg(help = "Core repository to link into the plugin's spec directory")]
        core: String,

        #[arg(short, long, value_delimiter = ',')]
        #[arg(help = "Gem repositories to use as local overrides")]
        gems: Vec<String>,

        #[arg(long, default_value = DEFAULT_SETUP_COMMAND)]
        #[arg(help = "Command preparing the plugin checkout")]
        setup_command: String,

        #[arg(long, default_value = DEFAULT_TEST_COMMAND)]
        #[arg(help = "Command running the plugin's test suite")]
        test_command: String,
    },
}

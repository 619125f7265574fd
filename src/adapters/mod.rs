pub mod git_cli;
pub mod system_process;
pub mod terminal_interaction;
pub mod unix_fs;

#[cfg(test)]
pub mod test_helpers;

pub use git_cli::GitCli;
pub use system_process::SystemProcessRunner;
pub use terminal_interaction::TerminalInteraction;
pub use unix_fs::UnixFs;

/// Interface for user-facing output
///
/// This trait abstracts what the CLI reports to the user, allowing for
/// different implementations (e.g., terminal, mock for testing).
/// Diagnostics go through `log` instead.
pub trait UserInteraction {
    /// Prints a message to the user
    fn print(&self, message: &str);

    /// Prints an error message to the user
    fn print_error(&self, message: &str);
}

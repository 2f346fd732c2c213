//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PsySafeError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `PsySafeError::Parse` if the generated script is not UTF-8.
pub fn completions(shell: Shell) -> Result<String, PsySafeError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "psysafe", &mut buf);
    String::from_utf8(buf).map_err(|e| PsySafeError::Parse(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bash() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("psysafe"));
        assert!(script.contains("breathe"));
    }

    #[test]
    fn test_generate_zsh() {
        let script = completions(Shell::Zsh).unwrap();
        assert!(script.contains("#compdef psysafe"));
    }
}

//! Shell completion scripts.

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;

const BIN_NAME: &str = "hotel";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Where the script usually goes for each shell.
fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => {
            Some("hotel completions bash > ~/.local/share/bash-completion/completions/hotel")
        }
        Shell::Zsh => Some("hotel completions zsh > ~/.zsh/completions/_hotel"),
        Shell::Fish => Some("hotel completions fish > ~/.config/fish/completions/hotel.fish"),
        Shell::PowerShell => Some("hotel completions powershell | Out-String | Invoke-Expression"),
        _ => None,
    }
}

impl CompletionsCommand {
    /// Writes the script to stdout; the install hint goes to stderr.
    pub fn execute(&self) -> Result<(), CliError> {
        if let Some(hint) = install_hint(self.shell) {
            eprintln!("# To enable {} completions:", self.shell);
            eprintln!("#   {hint}");
        }

        generate(self.shell, &mut Cli::command(), BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_name_the_binary() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            assert!(install_hint(shell).unwrap().starts_with("hotel completions"));
        }
        assert!(install_hint(Shell::Elvish).is_none());
    }
}

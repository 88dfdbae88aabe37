//! # Shell Completion Module
//!
//! Generation of completion scripts through clap's completion system.
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! m3u-sync --completions bash > ~/.local/share/bash-completion/completions/m3u-sync
//!
//! # Generate zsh completions
//! m3u-sync --completions zsh > ~/.config/zsh/completions/_m3u-sync
//! ```

use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(shell: G, cmd: &mut Command) {
    generate(shell, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

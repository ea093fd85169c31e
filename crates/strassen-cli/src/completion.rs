//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `cmd` to `out`, registered under the
/// command's own name.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin_name = cmd.get_name().to_string();
    tracing::debug!(%shell, bin = %bin_name, "generating completion");
    generate(shell, cmd, bin_name, out);
}

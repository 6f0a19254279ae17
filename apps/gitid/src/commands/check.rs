use tracing::info;

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::git::read_identity_entries;
use crate::gpg::read_gpg_keys;
use crate::output;
use crate::reconcile::{reconcile, Severity};
use crate::ssh::read_ssh_hosts;

/// Read all three sources, reconcile, then print
///
/// Returns the worst severity of the run. Nothing is printed when reading or
/// reconciling fails.
pub fn run(args: &CheckArgs) -> Result<Severity> {
    let config = args.tool_config();

    let git_entries = read_identity_entries(&config)?;
    let gpg_entries = read_gpg_keys(&config.gpg)?;
    let ssh_entries = read_ssh_hosts(&config.ssh_config)?;

    let run = reconcile(&git_entries, &gpg_entries, &ssh_entries)?;
    info!(entries = run.entries.len(), severity = %run.severity(), "Reconciliation finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        for outcome in &run.entries {
            output::print_lines(&outcome.report.lines);
        }
        output::print_lines(&run.summary.lines());
    }

    Ok(run.severity())
}

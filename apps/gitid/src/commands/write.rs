use tracing::debug;

use crate::cli::WriteArgs;
use crate::error::Result;
use crate::export::{summarize, to_json, write_to_file};
use crate::git::read_identity_entries;

/// Project discovered identities and print or persist them
pub fn run(args: &WriteArgs) -> Result<()> {
    let config = args.scan.tool_config();
    let entries = read_identity_entries(&config)?;
    let summaries = summarize(&entries);

    match &args.output {
        Some(path) => {
            write_to_file(path, summaries)?;
        }
        None => {
            let json = to_json(&summaries)?;
            debug!("{}", json);
            println!("{}", json);
        }
    }

    Ok(())
}

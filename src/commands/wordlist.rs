//! Handler for the `wordlist` subcommand.
//!
//! Scans a word list, one candidate per line, for the secret that signed
//! the token. The file is opened before the scan starts and closed when
//! the reader goes out of scope.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use jwt_crack::{CancelFlag, SearchOutcome, SecretSearch, WordlistReader};

use super::info::warn_on_foreign_algorithm;
use super::input::resolve_token;
use crate::cli::WordlistArgs;
use crate::display::report::{miss_line, outcome_line};

/// Execute the `wordlist` subcommand. Returns whether a secret was found.
pub fn execute(args: &WordlistArgs, verbose: bool) -> Result<bool> {
    let raw = resolve_token(&args.token)?;
    let token = jwt_crack::parse(&raw)?;
    warn_on_foreign_algorithm(&token);

    let candidates = WordlistReader::open(&args.wordlist)?;
    info!(wordlist = %args.wordlist.display(), "scanning word list");

    let cancel = CancelFlag::new();
    if let Some(secs) = args.timeout {
        arm_watchdog(cancel.clone(), Duration::from_secs(secs));
    }

    let mut search = SecretSearch::new(&token).with_cancel(cancel);
    if verbose {
        search = search.on_miss(|secret| eprintln!("{}", miss_line(secret)));
    }

    let outcome = search.try_scan(candidates)?;
    let line = outcome_line(&outcome, search.attempts());
    match outcome {
        SearchOutcome::Found(_) => {
            println!("{line}");
            Ok(true)
        }
        SearchOutcome::NotFound | SearchOutcome::Cancelled => {
            eprintln!("{line}");
            Ok(false)
        }
    }
}

/// Raise `cancel` once `after` has elapsed. The thread is detached; if the
/// scan finishes first it simply never matters.
fn arm_watchdog(cancel: CancelFlag, after: Duration) {
    thread::spawn(move || {
        thread::sleep(after);
        cancel.cancel();
    });
}

//! Secret search over candidate sequences.
//!
//! Drives the verifier over a single guess or an ordered, lazily
//! produced list of candidates and stops at the first match. Candidates
//! are consumed strictly in iteration order; nothing after a match is
//! pulled from the source.

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use super::token::Token;
use super::verifier::HmacVerifier;

/// Terminal state of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<S> {
    /// The first candidate, in iteration order, that signed the token.
    Found(S),
    /// Every candidate was tried and none matched.
    NotFound,
    /// The attached [`CancelFlag`] was raised before a match was found.
    Cancelled,
}

impl<S> SearchOutcome<S> {
    /// Consume the outcome and return the matching secret, if any.
    pub fn into_found(self) -> Option<S> {
        match self {
            SearchOutcome::Found(secret) => Some(secret),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// A shareable stop signal, checked between candidate checks.
///
/// Clones share the same flag, so one can be handed to a watchdog
/// thread while the search holds the other.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask any scan holding this flag to stop before its next candidate.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

type MissHook<'a> = Box<dyn FnMut(&[u8]) + 'a>;

/// Searches for the secret that signed one token.
///
/// ```
/// use jwt_crack::core::search::{SearchOutcome, SecretSearch};
///
/// let token = jwt_crack::core::token::parse(
///     "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
///      eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
///      SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c",
/// )
/// .unwrap();
///
/// let mut search = SecretSearch::new(&token);
/// let outcome = search.scan(["secret", "your-256-bit-secret"]);
/// assert_eq!(outcome, SearchOutcome::Found("your-256-bit-secret"));
/// assert_eq!(search.attempts(), 2);
/// ```
pub struct SecretSearch<'a> {
    verifier: HmacVerifier,
    cancel: Option<CancelFlag>,
    on_miss: Option<MissHook<'a>>,
    attempts: u64,
}

impl<'a> SecretSearch<'a> {
    pub fn new(token: &Token) -> Self {
        Self {
            verifier: HmacVerifier::new(token),
            cancel: None,
            on_miss: None,
            attempts: 0,
        }
    }

    /// Stop scanning once `flag` is raised.
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Report every rejected candidate to `hook`.
    ///
    /// The hook only observes; it cannot change which candidate wins or
    /// when the scan ends.
    pub fn on_miss(mut self, hook: impl FnMut(&[u8]) + 'a) -> Self {
        self.on_miss = Some(Box::new(hook));
        self
    }

    /// Check a single guess.
    pub fn check_one(&self, secret: impl AsRef<[u8]>) -> bool {
        self.verifier.matches(secret.as_ref())
    }

    /// Number of candidates verified by the most recent scan.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Try each candidate in order until one matches.
    pub fn scan<I, S>(&mut self, candidates: I) -> SearchOutcome<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        match self.try_scan(candidates.into_iter().map(Ok::<S, Infallible>)) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Like [`scan`](Self::scan), for candidate sources that can fail.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `candidates`. Candidates tried
    /// before the error are counted in [`attempts`](Self::attempts).
    pub fn try_scan<I, S, E>(&mut self, candidates: I) -> Result<SearchOutcome<S>, E>
    where
        I: IntoIterator<Item = Result<S, E>>,
        S: AsRef<[u8]>,
    {
        self.attempts = 0;
        let mut candidates = candidates.into_iter();
        debug!("scan started");

        loop {
            if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
                debug!(attempts = self.attempts, "scan cancelled");
                return Ok(SearchOutcome::Cancelled);
            }

            let Some(candidate) = candidates.next() else {
                debug!(attempts = self.attempts, "candidates exhausted");
                return Ok(SearchOutcome::NotFound);
            };
            let candidate = candidate?;
            self.attempts += 1;

            if self.verifier.matches(candidate.as_ref()) {
                debug!(attempts = self.attempts, "secret found");
                return Ok(SearchOutcome::Found(candidate));
            }

            trace!(attempt = self.attempts, "candidate rejected");
            if let Some(hook) = self.on_miss.as_mut() {
                hook(candidate.as_ref());
            }
        }
    }
}

/// Check whether `secret` signed `token`.
pub fn check_one(token: &Token, secret: impl AsRef<[u8]>) -> bool {
    SecretSearch::new(token).check_one(secret)
}

/// Return the first candidate that signed `token`, or `NotFound`.
pub fn scan<I, S>(token: &Token, candidates: I) -> SearchOutcome<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    SecretSearch::new(token).scan(candidates)
}

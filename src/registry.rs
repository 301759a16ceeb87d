//! The link registry
//!
//! The single owner of every link record; front ends hold no mutation
//! rights and only call the operations here

use chrono::TimeDelta;
use serde::Serialize;
use thiserror::Error;
use url::ParseError;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::codegen::CodeGenerator;
use crate::codegen::WordNumberGenerator;
use crate::codegen::sanitize_code;
use crate::config::Config;
use crate::links::Link;
use crate::urls::parse_destination;

/// How many fresh draws a generated code gets before giving up
const MAX_GENERATE_ATTEMPTS: usize = 16;

/// Registry errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The destination input was blank
    #[error("Destination can not be empty")]
    EmptyInput,

    /// The destination input does not parse as an absolute URL
    #[error("Destination is not a valid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    /// A live link already answers to this code
    #[error(r#"Code "{0}" is already taken"#)]
    CodeTaken(String),

    /// No live link answers to this code
    #[error(r#"No link found for code "{0}""#)]
    NotFound(String),
}

/// Result type for all registry operations
pub type Result<T> = core::result::Result<T, Error>;

/// Aggregate numbers over the active links
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Number of active links
    pub links: usize,

    /// Clicks across all active links
    pub clicks: u64,
}

/// The link registry
///
/// Owns the record collection, newest link first. Expiry is always
/// evaluated against the injected clock at call time, never cached;
/// expired records are invisible to every operation and linger only
/// until the next prune.
pub struct Registry {
    /// All not-yet-pruned records, newest first
    links: Vec<Link>,

    /// Next creation-order identifier
    next_id: u64,

    /// Time source for every expiry decision
    clock: Box<dyn Clock>,

    /// Source of candidate codes
    generator: Box<dyn CodeGenerator>,

    /// Expiry window, thresholds and share base
    config: Config,
}

impl Registry {
    /// Create a registry on the wall clock and the word-number generator
    pub fn new(config: Config) -> Self {
        Self::with_parts(config, Box::new(SystemClock), Box::new(WordNumberGenerator))
    }

    /// Create a registry with explicit time and code sources
    pub fn with_parts(
        config: Config,
        clock: Box<dyn Clock>,
        generator: Box<dyn CodeGenerator>,
    ) -> Self {
        Self {
            links: Vec::new(),
            next_id: 1,
            clock,
            generator,
            config,
        }
    }

    /// Shorten a destination
    ///
    /// The destination must be non-blank and parse as an absolute URL
    /// once a missing scheme is patched up. A `custom_code` that
    /// sanitizes to something non-empty is used as-is; otherwise a code
    /// is generated, redrawing a bounded number of times when a draw
    /// collides with a live link.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] for a blank destination
    /// - [`Error::InvalidUrl`] when the destination does not parse
    /// - [`Error::CodeTaken`] when the code is held by a live link
    pub fn create(&mut self, destination_input: &str, custom_code: Option<&str>) -> Result<Link> {
        let destination = parse_destination(destination_input)?;

        let code = self.pick_code(custom_code)?;

        let link = Link {
            id: self.next_id,
            destination,
            code,
            clicks: 0,
            created_at: self.clock.now(),
        };

        self.next_id += 1;

        tracing::debug!(r#"Created link {} with code "{}""#, link.id, link.code);

        self.links.insert(0, link.clone());

        Ok(link)
    }

    /// Resolve a code to its link, counting the click
    ///
    /// Expired links are treated as nonexistent. A failed resolution
    /// mutates nothing; a successful one increments the click count by
    /// exactly 1 and returns the post-increment record. Resolution never
    /// removes the record.
    ///
    /// # Errors
    ///
    /// Will return [`Error::NotFound`] when no live link holds the code
    pub fn resolve(&mut self, code: &str) -> Result<Link> {
        let now = self.clock.now();
        let window = self.config.expiry_window;

        tracing::debug!(r#"Looking for code "{code}""#);

        let link = self
            .links
            .iter_mut()
            .find(|link| link.code == code && !link.is_expired_at(now, window));

        if let Some(link) = link {
            link.clicks += 1;

            tracing::debug!(
                r#"Code "{code}" resolves to {} ({} clicks)"#,
                link.destination,
                link.clicks,
            );

            Ok(link.clone())
        } else {
            tracing::debug!(r#"Code "{code}" not found"#);

            Err(Error::NotFound(code.to_string()))
        }
    }

    /// Remove a link by id
    ///
    /// Idempotent: removing an unknown id changes nothing. Returns
    /// whether a link was removed. Confirming intent is the caller's
    /// concern.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.links.len();

        self.links.retain(|link| link.id != id);

        let removed = self.links.len() < before;

        if removed {
            tracing::debug!("Removed link {id}");
        }

        removed
    }

    /// Drop every expired record
    ///
    /// Space reclamation only; every read path already filters by
    /// expiry at call time. Returns the number of records dropped.
    pub fn prune_expired(&mut self) -> usize {
        let now = self.clock.now();
        let window = self.config.expiry_window;

        let before = self.links.len();

        self.links.retain(|link| !link.is_expired_at(now, window));

        let pruned = before - self.links.len();

        if pruned > 0 {
            tracing::debug!("Pruned {pruned} expired links");
        }

        pruned
    }

    /// All active links, newest first
    pub fn list_active(&self) -> Vec<Link> {
        let now = self.clock.now();
        let window = self.config.expiry_window;

        self.links
            .iter()
            .filter(|link| !link.is_expired_at(now, window))
            .cloned()
            .collect()
    }

    /// Time left before the link expires, clamped at zero
    pub fn time_remaining(&self, link: &Link) -> TimeDelta {
        link.time_remaining_at(self.clock.now(), self.config.expiry_window)
    }

    /// Is the link still active but close to the end of its window?
    pub fn is_expiring_soon(&self, link: &Link) -> bool {
        let remaining = self.time_remaining(link);

        remaining > TimeDelta::zero() && remaining <= self.config.expiring_soon_threshold
    }

    /// Aggregate numbers over the active links
    pub fn totals(&self) -> Totals {
        let links = self.list_active();

        Totals {
            links: links.len(),
            clicks: links.iter().map(|link| link.clicks).sum(),
        }
    }

    /// The copyable share string for a link
    ///
    /// `<base>#<code>`; purely a lookup key to hand back to
    /// [`resolve`](Self::resolve), it carries no routing meaning
    pub fn share_url(&self, link: &Link) -> String {
        format!(
            "{}#{}",
            self.config.base_url.trim_end_matches('/'),
            link.code,
        )
    }

    /// The configuration the registry was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Pick the code for a new link
    ///
    /// A user-supplied code fails fast on collision; a generated one is
    /// redrawn up to the attempt budget first
    fn pick_code(&mut self, custom_code: Option<&str>) -> Result<String> {
        let custom_code = custom_code.map(sanitize_code).unwrap_or_default();

        if !custom_code.is_empty() {
            if self.is_code_taken(&custom_code) {
                return Err(Error::CodeTaken(custom_code));
            }

            return Ok(custom_code);
        }

        let mut candidate = String::new();

        for _ in 0..MAX_GENERATE_ATTEMPTS {
            candidate = self.generator.generate();

            if !self.is_code_taken(&candidate) {
                return Ok(candidate);
            }
        }

        Err(Error::CodeTaken(candidate))
    }

    /// Is this code held by a non-expired link?
    fn is_code_taken(&self, code: &str) -> bool {
        let now = self.clock.now();
        let window = self.config.expiry_window;

        self.links
            .iter()
            .any(|link| link.code == code && !link.is_expired_at(now, window))
    }
}

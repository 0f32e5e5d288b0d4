//! URL encode/decode engine with admission control.

use std::time::Duration;

use dashmap::DashMap;
use url::Url;

use crate::application::admission::AdmissionLimiter;
use crate::error::AppError;
use crate::utils::codegen::derive_code;

/// Sentinel returned by [`ShortenerService::decode`] for unknown codes.
///
/// A decode miss is a successful operation that found nothing, not a failed
/// operation, so it is reported in the result payload rather than as an error.
pub const URL_NOT_FOUND: &str = "URL not found";

/// Service translating long URLs to short links and back.
///
/// Owns the code→URL mapping table and the admission limiter. One instance is
/// constructed at startup and shared by all request handlers; entries live
/// for the lifetime of the process.
///
/// # Admission
///
/// Every operation first takes a permit from the [`AdmissionLimiter`]. When
/// the pool is exhausted the call fails with [`AppError::Overloaded`]
/// immediately; nothing queues. The permit is an RAII guard held for the
/// whole operation body, so validation failures release it just like
/// successful returns.
///
/// # Collisions
///
/// Short codes are a deterministic 6-character base64 prefix of the long URL
/// (see [`crate::utils::codegen`]). Distinct URLs sharing that prefix map to
/// the same code, and the later encode silently overwrites the earlier entry.
/// Concurrent encodes racing to one code resolve to whichever insert lands
/// last.
pub struct ShortenerService {
    urls: DashMap<String, String>,
    limiter: AdmissionLimiter,
    base_url: String,
    /// Artificial latency applied while a permit is held. Test instrumentation
    /// only; settable solely through [`Self::with_delay`].
    delay: Option<Duration>,
}

impl ShortenerService {
    /// Creates an engine with an empty mapping table.
    ///
    /// `base_url` is stored with any trailing slash trimmed so generated
    /// links always contain exactly one separating slash.
    pub fn new(base_url: impl Into<String>, max_concurrent_requests: usize) -> Self {
        Self {
            urls: DashMap::new(),
            limiter: AdmissionLimiter::new(max_concurrent_requests),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            delay: None,
        }
    }

    /// Creates an engine that sleeps for `delay` inside every admitted
    /// operation, keeping its permit held for at least that long.
    ///
    /// Only exists so tests can observe the admission window deterministically.
    #[doc(hidden)]
    pub fn with_delay(
        base_url: impl Into<String>,
        max_concurrent_requests: usize,
        delay: Duration,
    ) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(base_url, max_concurrent_requests)
        }
    }

    /// Encodes a long URL into a short link.
    ///
    /// Derives the code, inserts (or overwrites) the mapping, and returns
    /// `{base_url}/{code}`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Overloaded`] when no admission permit is free
    /// - [`AppError::InvalidInput`] when the input is blank, unparseable, or
    ///   lacks a host (syntactic check only; unreachable hosts pass)
    pub async fn encode(&self, long_url: &str) -> Result<String, AppError> {
        let _permit = self
            .limiter
            .try_acquire()
            .ok_or(AppError::Overloaded)?;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if long_url.trim().is_empty() {
            return Err(AppError::invalid_input("Cannot encode empty URL"));
        }

        // Url::parse only accepts absolute URLs, so a successful parse
        // guarantees a scheme; the host must be checked explicitly.
        let parsed =
            Url::parse(long_url).map_err(|_| AppError::invalid_input("Invalid URL"))?;
        if parsed.host_str().is_none() {
            return Err(AppError::invalid_input("Invalid URL"));
        }

        let code = derive_code(long_url);
        self.urls.insert(code.clone(), long_url.to_string());

        tracing::debug!(code = %code, "encoded URL");

        Ok(format!("{}/{}", self.base_url, code))
    }

    /// Decodes a short link back into its long URL.
    ///
    /// Returns the mapped URL, or the [`URL_NOT_FOUND`] sentinel when the
    /// code has no entry.
    ///
    /// # Errors
    ///
    /// - [`AppError::Overloaded`] when no admission permit is free
    /// - [`AppError::InvalidInput`] when the input is blank or does not start
    ///   with the configured base URL
    pub async fn decode(&self, short_url: &str) -> Result<String, AppError> {
        let _permit = self
            .limiter
            .try_acquire()
            .ok_or(AppError::Overloaded)?;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if short_url.trim().is_empty() {
            return Err(AppError::invalid_input("Cannot decode empty URL"));
        }

        let rest = short_url
            .strip_prefix(&self.base_url)
            .ok_or_else(|| AppError::invalid_input("Invalid URL"))?;
        let code = rest.strip_prefix('/').unwrap_or(rest);

        let long_url = self
            .urls
            .get(code)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| URL_NOT_FOUND.to_string());

        Ok(long_url)
    }

    /// Returns the configured base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of mappings currently stored.
    pub fn entry_count(&self) -> usize {
        self.urls.len()
    }

    /// Number of admission permits currently free.
    pub fn available_permits(&self) -> usize {
        self.limiter.available()
    }

    /// Configured admission capacity.
    pub fn permit_limit(&self) -> usize {
        self.limiter.limit()
    }
}

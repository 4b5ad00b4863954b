//! Type-safe builder for `ScanConfig` using the typestate pattern
//!
//! The probe URL template and the starting identifier must be supplied, in
//! that order, before `build()` becomes callable. Every other option has a
//! default taken from `crate::utils::constants`.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;

use super::types::{BackoffKind, ScanConfig};
use crate::utils::validate_url_template;

// Type states for the builder
pub struct WithUrlTemplate;
pub struct Complete;

pub struct ScanConfigBuilder<State = ()> {
    pub(crate) config: ScanConfig,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ScanConfigBuilder<()> {
    fn default() -> Self {
        Self {
            config: ScanConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl ScanConfig {
    /// Create a builder for configuring a `ScanConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScanConfigBuilder<()> {
        ScanConfigBuilder::default()
    }

    /// Check every cross-field constraint.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub(crate) fn validate(&self) -> Result<()> {
        validate_url_template(&self.url_template)?;

        if self.sparse_threshold == 0 {
            return Err(anyhow!("sparse_threshold must be at least 1"));
        }
        if self.retry_attempts == 0 {
            return Err(anyhow!("retry_attempts must be at least 1"));
        }
        if self.lanes == 0 {
            return Err(anyhow!("lanes must be at least 1"));
        }
        if self.lane_span == 0 {
            return Err(anyhow!("lane_span must be at least 1"));
        }
        if self.request_timeout_secs == 0 {
            return Err(anyhow!("request_timeout_secs must be at least 1"));
        }
        Ok(())
    }
}

impl ScanConfigBuilder<()> {
    pub fn url_template(mut self, template: impl Into<String>) -> ScanConfigBuilder<WithUrlTemplate> {
        self.config.url_template = template.into();
        ScanConfigBuilder {
            config: self.config,
            _phantom: PhantomData,
        }
    }
}

impl ScanConfigBuilder<WithUrlTemplate> {
    pub fn start_identifier(mut self, identifier: u64) -> ScanConfigBuilder<Complete> {
        self.config.start_identifier = identifier;
        ScanConfigBuilder {
            config: self.config,
            _phantom: PhantomData,
        }
    }
}

impl ScanConfigBuilder<Complete> {
    pub(crate) fn from_config(config: ScanConfig) -> Self {
        Self {
            config,
            _phantom: PhantomData,
        }
    }

    /// Override the URL template of an already complete builder
    #[must_use]
    pub fn with_url_template(mut self, template: impl Into<String>) -> Self {
        self.config.url_template = template.into();
        self
    }

    /// Override the starting identifier of an already complete builder
    #[must_use]
    pub fn restart_at(mut self, identifier: u64) -> Self {
        self.config.start_identifier = identifier;
        self
    }

    /// Validate and produce the immutable configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL template is unusable or a numeric option
    /// is out of range.
    pub fn build(self) -> Result<ScanConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

// Optional fields, settable in any state
impl<State> ScanConfigBuilder<State> {
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn target_hit_count(mut self, count: usize) -> Self {
        self.config.target_hit_count = count;
        self
    }

    #[must_use]
    pub fn max_probes(mut self, max: usize) -> Self {
        self.config.max_probes = max;
        self
    }

    #[must_use]
    pub fn per_probe_delay_ms(mut self, millis: u64) -> Self {
        self.config.per_probe_delay_ms = millis;
        self
    }

    #[must_use]
    pub fn sparse_threshold(mut self, probes: u64) -> Self {
        self.config.sparse_threshold = probes;
        self
    }

    #[must_use]
    pub fn jump_size(mut self, identifiers: u64) -> Self {
        self.config.jump_size = identifiers;
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn retry_attempts(mut self, attempts: u32) -> Self {
        self.config.retry_attempts = attempts;
        self
    }

    #[must_use]
    pub fn retry_backoff_ms(mut self, millis: u64) -> Self {
        self.config.retry_backoff_ms = millis;
        self
    }

    #[must_use]
    pub fn retry_backoff(mut self, kind: BackoffKind) -> Self {
        self.config.retry_backoff = kind;
        self
    }

    #[must_use]
    pub fn retry_backoff_max_ms(mut self, millis: u64) -> Self {
        self.config.retry_backoff_max_ms = millis;
        self
    }

    #[must_use]
    pub fn lanes(mut self, lanes: usize) -> Self {
        self.config.lanes = lanes;
        self
    }

    #[must_use]
    pub fn lane_span(mut self, identifiers: u64) -> Self {
        self.config.lane_span = identifiers;
        self
    }

    #[must_use]
    pub fn progress_interval(mut self, probes: usize) -> Self {
        self.config.progress_interval = probes;
        self
    }

    #[must_use]
    pub fn hit_report_interval(mut self, hits: usize) -> Self {
        self.config.hit_report_interval = hits;
        self
    }

    #[must_use]
    pub fn sample_hits(mut self, hits: usize) -> Self {
        self.config.sample_hits = hits;
        self
    }
}

use super::{Cors, CorsOptions, CorsPolicy};

/// Builder for creating [`Cors`] with a fluent API
///
/// Equivalent to filling in [`CorsOptions`] by hand; every setter takes raw
/// values and normalization happens in [`CorsBuilder::build`].
///
/// # Example
///
/// ```rust
/// use brrtcors::CorsBuilder;
///
/// let cors = CorsBuilder::new()
///     .allowed_origins(&["https://example.com", "https://api.example.com"])
///     .allowed_methods(&["GET", "POST", "PUT"])
///     .allowed_headers(&["content-type", "authorization"])
///     .allow_credentials(true)
///     .exposed_headers(&["x-total-count"])
///     .max_age(3600)
///     .build();
///
/// assert_eq!(
///     cors.policy().allowed_headers(),
///     ["Content-Type", "Authorization", "Origin"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CorsBuilder {
    options: CorsOptions,
    lock_methods: bool,
}

impl CorsBuilder {
    /// Create a builder with every option unset (documented defaults apply)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing options, e.g. ones loaded from `config.yaml`
    #[must_use]
    pub fn from_options(options: CorsOptions) -> Self {
        Self {
            options,
            lock_methods: false,
        }
    }

    /// Set allowed origins; `"*"` allows every origin
    #[must_use]
    pub fn allowed_origins(mut self, origins: &[&str]) -> Self {
        self.options.allowed_origins = origins.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set allowed methods (any case)
    #[must_use]
    pub fn allowed_methods(mut self, methods: &[&str]) -> Self {
        self.options.allowed_methods = methods.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set allowed request headers; `Origin` is always added
    #[must_use]
    pub fn allowed_headers(mut self, headers: &[&str]) -> Self {
        self.options.allowed_headers = headers.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Set headers exposed to scripts on actual requests
    #[must_use]
    pub fn exposed_headers(mut self, headers: &[&str]) -> Self {
        self.options.exposed_headers = headers.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Enable or disable `Access-Control-Allow-Credentials: true`
    ///
    /// Combining credentials with `"*"` is allowed: the request origin is
    /// echoed back, never a literal `*`.
    #[must_use]
    pub fn allow_credentials(mut self, allow: bool) -> Self {
        self.options.allow_credentials = allow;
        self
    }

    /// Set preflight cache duration in seconds; `<= 0` omits the header
    #[must_use]
    pub fn max_age(mut self, seconds: i64) -> Self {
        self.options.max_age = seconds;
        self
    }

    /// Reject every method, `OPTIONS` included
    #[must_use]
    pub fn lock_methods(mut self) -> Self {
        self.lock_methods = true;
        self
    }

    /// Normalize the options and build the filter
    #[must_use]
    pub fn build(self) -> Cors {
        let policy = CorsPolicy::from_options(&self.options);
        let policy = if self.lock_methods {
            policy.lock_methods()
        } else {
            policy
        };
        Cors::from_policy(policy)
    }
}

//! Configuration types for the dataset loader.

/// Configuration for [`DatasetLoader`](crate::DatasetLoader).
///
/// # Example
///
/// ```rust
/// use org_chart_loader::LoaderConfig;
///
/// let config = LoaderConfig::builder()
///     .with_delimiter(b';')
///     .with_header(false)
///     .with_trim_fields(true)
///     .build();
///
/// assert_eq!(config.delimiter, b';');
/// ```
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Whether the first row is a header to skip.
    pub has_header: bool,
    /// Trim surrounding whitespace from `name` and `designation`.
    /// Numeric fields are always trimmed.
    pub trim_fields: bool,
    /// Fail the load on a row that names itself as its manager.
    pub reject_self_managed: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            trim_fields: false,
            reject_self_managed: false,
        }
    }
}

impl LoaderConfig {
    /// Creates a new builder for LoaderConfig.
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::default()
    }
}

/// Builder for LoaderConfig.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfigBuilder {
    config: LoaderConfig,
}

impl LoaderConfigBuilder {
    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Sets whether the input starts with a header row.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.config.has_header = has_header;
        self
    }

    /// Enables or disables trimming of text fields.
    pub fn with_trim_fields(mut self, trim_fields: bool) -> Self {
        self.config.trim_fields = trim_fields;
        self
    }

    /// Enables or disables rejection of self-managed rows.
    pub fn with_reject_self_managed(mut self, reject: bool) -> Self {
        self.config.reject_self_managed = reject;
        self
    }

    /// Builds the LoaderConfig.
    pub fn build(self) -> LoaderConfig {
        self.config
    }
}

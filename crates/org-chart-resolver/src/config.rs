//! Configuration types for the subordinate resolver.

/// What to do when the reporting chain loops back on itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Stop and return [`ResolverError::CycleDetected`](crate::ResolverError::CycleDetected).
    #[default]
    Fail,
    /// Ignore the edge that closes the loop and keep going.
    Skip,
}

/// What to do with employee ids that occur on more than one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Emit every occurrence and walk its reports again.
    #[default]
    Keep,
    /// Emit each id once; later occurrences are not walked.
    Dedupe,
}

/// Configuration for the subordinate resolver.
///
/// # Example
///
/// ```rust
/// use org_chart_resolver::{CyclePolicy, DuplicatePolicy, ResolverConfig};
///
/// let config = ResolverConfig::builder()
///     .with_cycle_policy(CyclePolicy::Skip)
///     .with_duplicate_policy(DuplicatePolicy::Dedupe)
///     .with_max_depth(32)
///     .with_max_results(10_000)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Cycle handling.
    pub cycle_policy: CyclePolicy,
    /// Duplicate id handling.
    pub duplicate_policy: DuplicatePolicy,
    /// Maximum depth below the root (None = unlimited). The root is depth 0.
    pub max_depth: Option<usize>,
    /// Maximum closure size (None = unlimited).
    pub max_results: Option<usize>,
}

impl ResolverConfig {
    /// Creates a new builder for ResolverConfig.
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::default()
    }
}

/// Builder for ResolverConfig.
#[derive(Debug, Clone, Default)]
pub struct ResolverConfigBuilder {
    cycle_policy: CyclePolicy,
    duplicate_policy: DuplicatePolicy,
    max_depth: Option<usize>,
    max_results: Option<usize>,
}

impl ResolverConfigBuilder {
    /// Sets the cycle policy.
    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }

    /// Sets the duplicate id policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Sets the maximum traversal depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets the maximum number of ids in a closure.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Builds the ResolverConfig.
    pub fn build(self) -> ResolverConfig {
        ResolverConfig {
            cycle_policy: self.cycle_policy,
            duplicate_policy: self.duplicate_policy,
            max_depth: self.max_depth,
            max_results: self.max_results,
        }
    }
}

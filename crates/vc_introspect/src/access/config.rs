use log::Level;

use crate::access::PATH_DELIM;

/// Runtime settings of a [`PathAccessor`](crate::access::PathAccessor).
///
/// # Examples
///
/// ```
/// use vc_introspect::access::AccessorConfig;
///
/// let config = AccessorConfig::default()
///     .delimiter('/')
///     .failure_level(log::Level::Warn);
///
/// assert_eq!(config.get_delimiter(), '/');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorConfig {
    delimiter: char,
    failure_level: Level,
}

impl Default for AccessorConfig {
    /// `.` between segments, failures logged at [`Level::Debug`].
    #[inline]
    fn default() -> Self {
        Self {
            delimiter: PATH_DELIM,
            failure_level: Level::Debug,
        }
    }
}

impl AccessorConfig {
    /// Sets the character splitting string paths into segments.
    #[inline]
    pub const fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the level the lenient operations log their failures at.
    #[inline]
    pub const fn failure_level(mut self, level: Level) -> Self {
        self.failure_level = level;
        self
    }

    #[inline]
    pub const fn get_delimiter(&self) -> char {
        self.delimiter
    }

    #[inline]
    pub const fn get_failure_level(&self) -> Level {
        self.failure_level
    }
}

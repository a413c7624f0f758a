//! Provide the `path` interface for path access.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Delimiter between the segments of a path, e.g. `Foo.Bar.Baz`.
pub const PATH_DELIM: char = '.';

/// A type that can be read as a sequence of path segments.
///
/// Implemented for [`str`], [`String`] and [`ObjectPath`]. Empty segments
/// are never yielded, so `"A..B."` reads as `A`, `B`.
///
/// [`String`]: alloc::string::String
pub trait AccessPath: fmt::Display {
    /// Returns the segments of the path split at `delimiter`.
    ///
    /// A pre-split path such as [`ObjectPath`] ignores `delimiter`.
    fn segments(&self, delimiter: char) -> impl Iterator<Item = &str>;
}

impl AccessPath for str {
    #[inline]
    fn segments(&self, delimiter: char) -> impl Iterator<Item = &str> {
        self.split(delimiter).filter(|segment| !segment.is_empty())
    }
}

impl AccessPath for alloc::string::String {
    #[inline]
    fn segments(&self, delimiter: char) -> impl Iterator<Item = &str> {
        self.as_str().segments(delimiter)
    }
}

impl AccessPath for ObjectPath {
    #[inline]
    fn segments(&self, _: char) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|segment| &**segment)
    }
}

// -----------------------------------------------------------------------------
// ObjectPath

/// A path split once and kept for reuse.
///
/// Unlike a `&str`, an `ObjectPath` does not split itself again on every
/// access. It displays joined by the delimiter it was parsed with.
///
/// # Examples
///
/// ```
/// use vc_introspect::access::ObjectPath;
///
/// let path = ObjectPath::parse("BarContainer..BazContainer", '.');
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.to_string(), "BarContainer.BazContainer");
///
/// let path = path.concat(ObjectPath::parse("Name", '.'));
/// assert_eq!(path.iter().collect::<Vec<_>>(), ["BarContainer", "BazContainer", "Name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectPath {
    segments: Box<[Box<str>]>,
    delimiter: char,
}

impl ObjectPath {
    /// Splits `path` at `delimiter`, dropping empty segments.
    pub fn parse(path: &str, delimiter: char) -> Self {
        Self {
            segments: path.segments(delimiter).map(Box::from).collect(),
            delimiter,
        }
    }

    /// Returns the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over the segments in order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.segments.iter().map(|segment| &**segment)
    }

    /// Appends the segments of `other`, keeping this path's delimiter.
    pub fn concat(self, other: ObjectPath) -> Self {
        let mut segments: Vec<Box<str>> = self.segments.into_vec();
        segments.extend(other.segments);
        Self {
            segments: segments.into_boxed_slice(),
            delimiter: self.delimiter,
        }
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                fmt::Write::write_char(f, self.delimiter)?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

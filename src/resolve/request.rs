use crate::{format::spec::FormatSpec, foundation::error::MediafitResult};

/// Caller-supplied constraints for one resolution call.
///
/// Fixed dimensions and format-based sizing are mutually exclusive selection
/// paths: when either fixed dimension is nonzero, it takes precedence over
/// any [`FormatSpec`] sizing. Format candidates are evaluated in insertion
/// order; the first one satisfied wins.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenditionRequest {
    /// Explicitly requested file extensions, case-insensitive; empty = any.
    #[serde(default)]
    pub file_extensions: Vec<String>,
    /// Fixed target width; 0 = unset.
    #[serde(default)]
    pub fixed_width: u32,
    /// Fixed target height; 0 = unset.
    #[serde(default)]
    pub fixed_height: u32,
    /// Format candidates in priority order.
    #[serde(default)]
    pub formats: Vec<FormatSpec>,
    /// Also consider reserved thumbnail renditions.
    #[serde(default)]
    pub include_thumbnails: bool,
}

impl RenditionRequest {
    /// Empty request: no constraints, thumbnails excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given file extensions.
    pub fn with_file_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Request an exact target size; a zero axis stays unconstrained.
    pub fn with_fixed_size(mut self, width: u32, height: u32) -> Self {
        self.fixed_width = width;
        self.fixed_height = height;
        self
    }

    /// Append a format candidate.
    pub fn with_format(mut self, format: FormatSpec) -> Self {
        self.formats.push(format);
        self
    }

    /// Include reserved thumbnail renditions in the candidate set.
    pub fn with_thumbnails(mut self) -> Self {
        self.include_thumbnails = true;
        self
    }

    /// Validate the request, including every contained format spec.
    ///
    /// Call this before handing the request to the engine; the engine
    /// assumes validated input and reports no errors of its own.
    pub fn validate(&self) -> MediafitResult<()> {
        for format in &self.formats {
            format.validate()?;
        }
        Ok(())
    }

    /// True when either fixed dimension is set.
    pub(crate) fn has_fixed_size(&self) -> bool {
        self.fixed_width > 0 || self.fixed_height > 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/request.rs"]
mod tests;

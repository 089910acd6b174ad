use crate::{
    foundation::error::{MediafitError, MediafitResult},
    foundation::math,
};

/// Named size/ratio/extension constraint set, supplied by configuration and
/// consumed read-only by the resolution engine.
///
/// Dimensions are pixels. A zero dimension means unset (for the fixed
/// `width`/`height`) or unbounded (for the min/max bounds). `ratio` is width
/// divided by height (e.g. `1.778` for 16:9); 0 means unconstrained, and all
/// ratio comparisons use [`RATIO_TOLERANCE`](crate::RATIO_TOLERANCE).
///
/// Requests carry specs in priority order; the first spec a candidate
/// satisfies wins.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormatSpec {
    /// Catalog name of the spec.
    pub name: String,
    /// Fixed width; overrides both width bounds when nonzero.
    #[serde(default)]
    pub width: u32,
    /// Fixed height; overrides both height bounds when nonzero.
    #[serde(default)]
    pub height: u32,
    /// Minimum width bound.
    #[serde(default)]
    pub min_width: u32,
    /// Maximum width bound.
    #[serde(default)]
    pub max_width: u32,
    /// Minimum height bound.
    #[serde(default)]
    pub min_height: u32,
    /// Maximum height bound.
    #[serde(default)]
    pub max_height: u32,
    /// Width-to-height ratio constraint.
    #[serde(default)]
    pub ratio: f64,
    /// Allowed file extensions, case-insensitive; empty allows any.
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl FormatSpec {
    /// New spec with the given name and no constraints.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: 0,
            height: 0,
            min_width: 0,
            max_width: 0,
            min_height: 0,
            max_height: 0,
            ratio: 0.0,
            extensions: Vec::new(),
        }
    }

    /// Set a fixed width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set a fixed height.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the minimum width bound.
    pub fn with_min_width(mut self, min_width: u32) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the maximum width bound.
    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set the minimum height bound.
    pub fn with_min_height(mut self, min_height: u32) -> Self {
        self.min_height = min_height;
        self
    }

    /// Set the maximum height bound.
    pub fn with_max_height(mut self, max_height: u32) -> Self {
        self.max_height = max_height;
        self
    }

    /// Set the width-to-height ratio constraint.
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Restrict to the given file extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the spec.
    ///
    /// Rejected: a non-finite or negative ratio, and min/max bounds that
    /// exclude each other. Validation happens before a spec reaches the
    /// engine; the engine itself never reports errors.
    pub fn validate(&self) -> MediafitResult<()> {
        if !self.ratio.is_finite() || self.ratio < 0.0 {
            return Err(MediafitError::validation(format!(
                "format '{}' has invalid ratio {}",
                self.name, self.ratio
            )));
        }
        if self.min_width > 0 && self.max_width > 0 && self.min_width > self.max_width {
            return Err(MediafitError::validation(format!(
                "format '{}' has min_width > max_width",
                self.name
            )));
        }
        if self.min_height > 0 && self.max_height > 0 && self.min_height > self.max_height {
            return Err(MediafitError::validation(format!(
                "format '{}' has min_height > max_height",
                self.name
            )));
        }
        Ok(())
    }

    /// Effective minimum width: the fixed width when set, else the bound.
    pub fn effective_min_width(&self) -> u32 {
        if self.width > 0 { self.width } else { self.min_width }
    }

    /// Effective maximum width: the fixed width when set, else the bound.
    pub fn effective_max_width(&self) -> u32 {
        if self.width > 0 { self.width } else { self.max_width }
    }

    /// Effective minimum height: the fixed height when set, else the bound.
    pub fn effective_min_height(&self) -> u32 {
        if self.height > 0 {
            self.height
        } else {
            self.min_height
        }
    }

    /// Effective maximum height: the fixed height when set, else the bound.
    pub fn effective_max_height(&self) -> u32 {
        if self.height > 0 {
            self.height
        } else {
            self.max_height
        }
    }

    /// Effective ratio: the explicit ratio when set, else derived from the
    /// fixed width and height when both are set, else 0.
    pub fn effective_ratio(&self) -> f64 {
        if math::ratio_is_set(self.ratio) {
            self.ratio
        } else if self.width > 0 && self.height > 0 {
            f64::from(self.width) / f64::from(self.height)
        } else {
            0.0
        }
    }

    /// True when the spec constrains size or ratio at all.
    pub(crate) fn declares_sizing(&self) -> bool {
        self.effective_min_width() > 0
            || self.effective_max_width() > 0
            || self.effective_min_height() > 0
            || self.effective_max_height() > 0
            || math::ratio_is_set(self.effective_ratio())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/format/spec.rs"]
mod tests;

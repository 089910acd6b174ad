use std::cmp::Ordering;

use crate::{
    foundation::error::{MediafitError, MediafitResult},
    foundation::math,
    media::extension,
};

/// Opaque locator for a rendition's backing byte source.
///
/// The content-store collaborator mints these; the engine only carries them
/// through into the resolved descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RenditionHandle(String);

impl RenditionHandle {
    /// Construct a handle from a stable store locator.
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// Access the raw locator.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Crop window in source pixels, applied before any downscale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CropRegion {
    /// Left edge in pixels.
    pub left: u32,
    /// Top edge in pixels.
    pub top: u32,
    /// Window width in pixels, always > 0.
    pub width: u32,
    /// Window height in pixels, always > 0.
    pub height: u32,
}

impl CropRegion {
    /// Construct a crop window; zero-sized windows are rejected.
    pub fn new(left: u32, top: u32, width: u32, height: u32) -> MediafitResult<Self> {
        if width == 0 || height == 0 {
            return Err(MediafitError::validation(
                "crop region width/height must be > 0",
            ));
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }
}

/// Immutable metadata of one stored rendition.
///
/// Non-image renditions carry zero width/height; they sort smallest and never
/// satisfy size-matching paths.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenditionInfo {
    /// Width in pixels (0 for non-image renditions).
    pub width: u32,
    /// Height in pixels (0 for non-image renditions).
    pub height: u32,
    /// Store file name, extension included.
    pub file_name: String,
    /// Backing byte-source locator.
    pub handle: RenditionHandle,
}

impl RenditionInfo {
    /// Construct rendition metadata.
    pub fn new(
        width: u32,
        height: u32,
        file_name: impl Into<String>,
        handle: RenditionHandle,
    ) -> Self {
        Self {
            width,
            height,
            file_name: file_name.into(),
            handle,
        }
    }
}

/// One resolvable rendition: a stored file, or a synthesized downscale target
/// derived from one.
///
/// Ordering and matching always operate on the common
/// `(width, height, file name, extension)` projection, regardless of variant.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum RenditionDescriptor {
    /// Stored rendition, usable as-is.
    Concrete(RenditionInfo),
    /// Synthesized downscale target over a stored rendition. Materializing
    /// the pixels is left to an external image-processing step.
    Virtual {
        /// Stored rendition the target derives from.
        source: RenditionInfo,
        /// Target width in pixels, always > 0.
        width: u32,
        /// Target height in pixels, always > 0.
        height: u32,
        /// Crop window carried over from a seeded cropped candidate.
        crop: Option<CropRegion>,
    },
}

impl RenditionDescriptor {
    /// Effective width: the target width for virtual descriptors.
    pub fn width(&self) -> u32 {
        match self {
            Self::Concrete(info) => info.width,
            Self::Virtual { width, .. } => *width,
        }
    }

    /// Effective height: the target height for virtual descriptors.
    pub fn height(&self) -> u32 {
        match self {
            Self::Concrete(info) => info.height,
            Self::Virtual { height, .. } => *height,
        }
    }

    /// File name of the backing stored rendition.
    pub fn file_name(&self) -> &str {
        &self.source_info().file_name
    }

    /// Lower-cased file extension of the backing rendition.
    pub fn extension(&self) -> String {
        extension::extension_of(self.file_name())
    }

    /// Backing byte-source handle.
    pub fn handle(&self) -> &RenditionHandle {
        &self.source_info().handle
    }

    /// Metadata of the stored rendition backing this descriptor.
    pub fn source_info(&self) -> &RenditionInfo {
        match self {
            Self::Concrete(info) => info,
            Self::Virtual { source, .. } => source,
        }
    }

    /// Crop window, present only on virtual descriptors seeded with one.
    pub fn crop(&self) -> Option<CropRegion> {
        match self {
            Self::Concrete(_) => None,
            Self::Virtual { crop, .. } => *crop,
        }
    }

    /// True when both effective dimensions are known and nonzero.
    pub fn is_image(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }

    /// Width-to-height ratio; 0.0 when either dimension is zero.
    pub fn ratio(&self) -> f64 {
        if !self.is_image() {
            return 0.0;
        }
        f64::from(self.width()) / f64::from(self.height())
    }

    /// Pixel area, the primary ordering key.
    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// True when the descriptor equals the fixed dimensions on every set
    /// axis; a zero axis is not constrained.
    pub(crate) fn matches_fixed(&self, width: u32, height: u32) -> bool {
        if !self.is_image() {
            return false;
        }
        (width == 0 || self.width() == width) && (height == 0 || self.height() == height)
    }

    /// True when the descriptor falls inside the given bounds (0 =
    /// unbounded) and, when `ratio` is set, matches it within
    /// [`RATIO_TOLERANCE`](crate::RATIO_TOLERANCE).
    pub(crate) fn matches_bounds(
        &self,
        min_width: u32,
        min_height: u32,
        max_width: u32,
        max_height: u32,
        ratio: f64,
    ) -> bool {
        if !self.is_image() {
            return false;
        }
        if self.width() < min_width || self.height() < min_height {
            return false;
        }
        if max_width > 0 && self.width() > max_width {
            return false;
        }
        if max_height > 0 && self.height() > max_height {
            return false;
        }
        !math::ratio_is_set(ratio) || math::ratio_matches(self.ratio(), ratio)
    }
}

impl Ord for RenditionDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.area()
            .cmp(&other.area())
            .then_with(|| self.file_name().cmp(other.file_name()))
    }
}

impl PartialOrd for RenditionDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/rendition.rs"]
mod tests;

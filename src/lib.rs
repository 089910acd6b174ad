//! Mediafit resolves which stored or synthesized variant ("rendition") of a
//! media asset best satisfies a set of caller-supplied constraints.
//!
//! # Resolution overview
//!
//! 1. **Materialize**: snapshot the asset's stored renditions once
//!    (`MediaAsset -> candidate set`), ordered by pixel area
//! 2. **Filter**: compute the effective file-extension set and drop
//!    candidates outside it
//! 3. **Match**: exact match against fixed dimensions or [`FormatSpec`]
//!    candidates in caller priority order
//! 4. **Synthesize**: when nothing matches exactly, derive a downscaled
//!    virtual descriptor from a large-enough stored rendition
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical inputs resolve to identical
//!   descriptors; candidate scans always run in one fixed ascending order.
//! - **No IO in resolution**: the engine works on snapshots; only the format
//!   catalog loader touches the filesystem.
//! - **No pixel work**: a virtual rendition is a size descriptor handed to a
//!   later image-processing step, never actual scaling.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod format;
mod foundation;
mod media;
mod resolve;

pub use format::catalog::FormatCatalog;
pub use format::spec::FormatSpec;
pub use foundation::error::{MediafitError, MediafitResult};
pub use foundation::math::RATIO_TOLERANCE;
pub use media::asset::{MediaAsset, StaticMediaAsset};
pub use media::extension::{
    IMAGE_EXTENSIONS, THUMBNAIL_NAME_PREFIX, extension_of, is_image_extension, is_thumbnail_name,
};
pub use media::rendition::{CropRegion, RenditionDescriptor, RenditionHandle, RenditionInfo};
pub use resolve::engine::{RenditionResolver, Resolved};
pub use resolve::request::RenditionRequest;

use std::{
    collections::BTreeSet,
    sync::{Arc, OnceLock},
};

use crate::{
    format::spec::FormatSpec,
    foundation::math,
    media::asset::MediaAsset,
    media::extension,
    media::rendition::{CropRegion, RenditionDescriptor},
    resolve::request::RenditionRequest,
};

/// Successful resolution: the winning descriptor plus the format spec it was
/// matched against, when format-based matching was in play.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Resolved {
    /// Winning rendition, stored or synthesized.
    pub rendition: RenditionDescriptor,
    /// Format spec the rendition satisfied.
    pub format: Option<FormatSpec>,
}

impl Resolved {
    fn untagged(rendition: RenditionDescriptor) -> Self {
        Self {
            rendition,
            format: None,
        }
    }

    fn tagged(rendition: RenditionDescriptor, format: &FormatSpec) -> Self {
        Self {
            rendition,
            format: Some(format.clone()),
        }
    }
}

/// Resolves the best-matching rendition of one media asset.
///
/// Construction snapshots only the designated original. The stored rendition
/// list is materialized lazily, at most once per thumbnail-flag value, and
/// reused across any number of [`resolve`](Self::resolve) calls; a racing
/// double-init recomputes the identical set, so resolution is safe to share
/// across threads.
pub struct RenditionResolver<'a> {
    asset: &'a dyn MediaAsset,
    original: Option<RenditionDescriptor>,
    seeded: Vec<RenditionDescriptor>,
    /// One cell per `include_thumbnails` value: `[false, true]`.
    candidates: [OnceLock<Arc<[RenditionDescriptor]>>; 2],
}

impl<'a> RenditionResolver<'a> {
    /// Resolver over the asset's stored renditions.
    pub fn new(asset: &'a dyn MediaAsset) -> Self {
        let original = asset.original().map(RenditionDescriptor::Concrete);
        Self {
            asset,
            original,
            seeded: Vec::new(),
            candidates: [OnceLock::new(), OnceLock::new()],
        }
    }

    /// Resolver that additionally offers a cropped window of the asset's
    /// original rendition as a candidate.
    ///
    /// The seeded candidate is virtual, sized to the crop window, and any
    /// rendition derived from it carries the crop region. Assets without a
    /// usable original get no seed.
    pub fn with_crop(asset: &'a dyn MediaAsset, crop: CropRegion) -> Self {
        let mut resolver = Self::new(asset);
        if let Some(original) = resolver.asset.original()
            && original.width > 0
            && original.height > 0
        {
            resolver.seeded.push(RenditionDescriptor::Virtual {
                source: original,
                width: crop.width,
                height: crop.height,
                crop: Some(crop),
            });
        }
        resolver
    }

    /// Resolve the best-matching rendition for `request`.
    ///
    /// `None` is the expected no-match outcome, never an error; malformed
    /// requests are caught beforehand by
    /// [`RenditionRequest::validate`](crate::RenditionRequest::validate).
    #[tracing::instrument(skip(self, request))]
    pub fn resolve(&self, request: &RenditionRequest) -> Option<Resolved> {
        let extensions = match effective_extensions(request) {
            Some(extensions) => extensions,
            None => {
                tracing::debug!("requested and format-declared extensions do not intersect");
                return None;
            }
        };

        let candidates = self.candidates(request.include_thumbnails);
        let filtered = filter_by_extension(&candidates, &extensions);

        if !is_size_matching(request, &extensions) {
            return self.original_or_first(&filtered).map(Resolved::untagged);
        }

        if let Some(resolved) = self.exact_match(&filtered, request) {
            return Some(resolved);
        }
        virtual_match(&filtered, request)
    }

    /// Ordered candidate set for the given thumbnail flag, built on first
    /// use and cached for the resolver's lifetime.
    fn candidates(&self, include_thumbnails: bool) -> Arc<[RenditionDescriptor]> {
        self.candidates[usize::from(include_thumbnails)]
            .get_or_init(|| self.build_candidates(include_thumbnails))
            .clone()
    }

    fn build_candidates(&self, include_thumbnails: bool) -> Arc<[RenditionDescriptor]> {
        let mut set: Vec<RenditionDescriptor> = self
            .asset
            .renditions()
            .into_iter()
            .filter(|info| include_thumbnails || !extension::is_thumbnail_name(&info.file_name))
            .map(RenditionDescriptor::Concrete)
            .chain(self.seeded.iter().cloned())
            .collect();
        set.sort();
        set.dedup();
        tracing::trace!(
            count = set.len(),
            include_thumbnails,
            "materialized rendition candidates"
        );
        set.into()
    }

    /// The designated original when it survived filtering, else the first
    /// (smallest) filtered candidate.
    fn original_or_first(&self, filtered: &[RenditionDescriptor]) -> Option<RenditionDescriptor> {
        if let Some(original) = &self.original
            && filtered.contains(original)
        {
            return Some(original.clone());
        }
        filtered.first().cloned()
    }

    /// A stored candidate satisfying the request without any scaling.
    fn exact_match(
        &self,
        filtered: &[RenditionDescriptor],
        request: &RenditionRequest,
    ) -> Option<Resolved> {
        if request.has_fixed_size() {
            return filtered
                .iter()
                .find(|candidate| candidate.matches_fixed(request.fixed_width, request.fixed_height))
                .cloned()
                .map(Resolved::untagged);
        }

        if !request.formats.is_empty() {
            return request.formats.iter().find_map(|format| {
                filtered
                    .iter()
                    .find(|candidate| {
                        candidate.matches_bounds(
                            format.effective_min_width(),
                            format.effective_min_height(),
                            format.effective_max_width(),
                            format.effective_max_height(),
                            format.effective_ratio(),
                        )
                    })
                    .cloned()
                    .map(|rendition| Resolved::tagged(rendition, format))
            });
        }

        // No sizing in play; same fallback as the no-size path.
        self.original_or_first(filtered).map(Resolved::untagged)
    }
}

/// A synthesized downscale from a stored candidate at least as large as the
/// target on every constrained axis.
fn virtual_match(filtered: &[RenditionDescriptor], request: &RenditionRequest) -> Option<Resolved> {
    if request.has_fixed_size() {
        let dest_ratio = if request.fixed_width > 0 && request.fixed_height > 0 {
            f64::from(request.fixed_width) / f64::from(request.fixed_height)
        } else {
            0.0
        };
        return derive_virtual(filtered, request.fixed_width, request.fixed_height, dest_ratio)
            .map(Resolved::untagged);
    }

    request.formats.iter().find_map(|format| {
        derive_virtual(
            filtered,
            format.effective_min_width(),
            format.effective_min_height(),
            format.effective_ratio(),
        )
        .map(|rendition| Resolved::tagged(rendition, format))
    })
}

/// Find the first candidate at least as large as the destination (a zero
/// destination axis is always satisfied; the ratio must match when set) and
/// derive the downscale descriptor from it.
fn derive_virtual(
    filtered: &[RenditionDescriptor],
    dest_width: u32,
    dest_height: u32,
    dest_ratio: f64,
) -> Option<RenditionDescriptor> {
    let source = filtered
        .iter()
        .find(|candidate| candidate.matches_bounds(dest_width, dest_height, 0, 0, dest_ratio))?;
    build_virtual(source, dest_width, dest_height, dest_ratio)
}

/// Fill the missing target dimension from the ratio and wrap `source` into a
/// virtual descriptor; `None` when no positive target size results.
fn build_virtual(
    source: &RenditionDescriptor,
    dest_width: u32,
    dest_height: u32,
    dest_ratio: f64,
) -> Option<RenditionDescriptor> {
    let ratio = if math::ratio_is_set(dest_ratio) {
        dest_ratio
    } else {
        source.ratio()
    };

    let mut width = dest_width;
    let mut height = dest_height;
    if height == 0 && width > 0 {
        height = (f64::from(width) / ratio).round() as u32;
    }
    if width == 0 && height > 0 {
        width = (f64::from(height) * ratio).round() as u32;
    }
    if width == 0 || height == 0 {
        return None;
    }

    tracing::debug!(
        source = source.file_name(),
        width,
        height,
        "derived virtual rendition"
    );
    Some(RenditionDescriptor::Virtual {
        source: source.source_info().clone(),
        width,
        height,
        crop: source.crop(),
    })
}

/// Merge requested and format-declared extensions (lower-cased).
///
/// Both sides set: their intersection, or `None` when it is empty (the
/// request is unsatisfiable). One side set: that side. Neither: the empty
/// allow-all set.
fn effective_extensions(request: &RenditionRequest) -> Option<BTreeSet<String>> {
    let requested: BTreeSet<String> = request
        .file_extensions
        .iter()
        .map(|ext| ext.to_ascii_lowercase())
        .collect();
    let declared: BTreeSet<String> = request
        .formats
        .iter()
        .flat_map(|format| format.extensions.iter())
        .map(|ext| ext.to_ascii_lowercase())
        .collect();

    if !requested.is_empty() && !declared.is_empty() {
        let intersection: BTreeSet<String> = requested.intersection(&declared).cloned().collect();
        if intersection.is_empty() {
            None
        } else {
            Some(intersection)
        }
    } else if !requested.is_empty() {
        Some(requested)
    } else {
        Some(declared)
    }
}

/// Keep candidates whose extension is allowed; the empty set allows all.
/// Size order is preserved.
fn filter_by_extension(
    candidates: &[RenditionDescriptor],
    extensions: &BTreeSet<String>,
) -> Vec<RenditionDescriptor> {
    if extensions.is_empty() {
        return candidates.to_vec();
    }
    candidates
        .iter()
        .filter(|candidate| extensions.contains(&candidate.extension()))
        .cloned()
        .collect()
}

/// A request is size-matching only when it could target an image (an
/// image-type extension is allowed, or a fixed dimension is set) and some
/// size restriction is actually in effect.
///
/// The empty effective set stands for "any extension" and therefore allows
/// image types.
fn is_size_matching(request: &RenditionRequest, extensions: &BTreeSet<String>) -> bool {
    let any_image = extensions.is_empty()
        || extensions.iter().any(|ext| extension::is_image_extension(ext));
    if !any_image && !request.has_fixed_size() {
        return false;
    }

    request.has_fixed_size() || request.formats.iter().any(FormatSpec::declares_sizing)
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/engine.rs"]
mod tests;

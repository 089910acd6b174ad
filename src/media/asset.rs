use crate::media::rendition::RenditionInfo;

/// Read-only contract the content store fulfils for one media asset.
///
/// Implementations surface a snapshot of the asset's stored renditions. The
/// engine materializes that snapshot at most once per resolver and thumbnail
/// flag, and never goes back to the store while matching.
pub trait MediaAsset {
    /// All stored renditions, in no particular order. The designated
    /// original is expected to be part of this list.
    fn renditions(&self) -> Vec<RenditionInfo>;

    /// The designated original rendition, when the asset has one.
    fn original(&self) -> Option<RenditionInfo>;
}

/// In-memory [`MediaAsset`] for tests, demos, and stores that already hold
/// rendition metadata.
#[derive(Clone, Debug, Default)]
pub struct StaticMediaAsset {
    renditions: Vec<RenditionInfo>,
    original: Option<RenditionInfo>,
}

impl StaticMediaAsset {
    /// Build an asset from rendition metadata and an optional original.
    ///
    /// `original`, when given, should also appear in `renditions`; the
    /// engine only treats it specially in the no-size fallback.
    pub fn new(renditions: Vec<RenditionInfo>, original: Option<RenditionInfo>) -> Self {
        Self {
            renditions,
            original,
        }
    }
}

impl MediaAsset for StaticMediaAsset {
    fn renditions(&self) -> Vec<RenditionInfo> {
        self.renditions.clone()
    }

    fn original(&self) -> Option<RenditionInfo> {
        self.original.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/asset.rs"]
mod tests;

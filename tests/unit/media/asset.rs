use super::*;
use crate::media::rendition::RenditionHandle;

#[test]
fn static_asset_hands_out_snapshots() {
    let original = RenditionInfo::new(800, 600, "original.jpg", RenditionHandle::new("/a/original.jpg"));
    let web = RenditionInfo::new(400, 300, "web.jpg", RenditionHandle::new("/a/web.jpg"));
    let asset = StaticMediaAsset::new(vec![original.clone(), web], Some(original.clone()));

    assert_eq!(asset.renditions().len(), 2);
    assert_eq!(asset.original(), Some(original));
}

#[test]
fn default_asset_is_empty() {
    let asset = StaticMediaAsset::default();
    assert!(asset.renditions().is_empty());
    assert!(asset.original().is_none());
}

//! Resolve against format specs taken from a JSON catalog.
//!
//! Run with `cargo run --example catalog_resolve`.

use mediafit::{
    FormatCatalog, MediafitResult, RenditionHandle, RenditionInfo, RenditionRequest,
    RenditionResolver, StaticMediaAsset,
};

const CATALOG_JSON: &str = r#"[
    {
        "name": "teaser",
        "min_width": 400,
        "min_height": 300,
        "max_width": 400,
        "extensions": ["jpg", "png"]
    },
    {
        "name": "hero-wide",
        "min_width": 960,
        "ratio": 1.778,
        "extensions": ["jpg"]
    }
]"#;

fn main() -> MediafitResult<()> {
    tracing_subscriber::fmt().init();

    let catalog = FormatCatalog::from_json(CATALOG_JSON)?;

    let original = RenditionInfo::new(
        1920,
        1080,
        "original.jpg",
        RenditionHandle::new("/content/dam/launch/original.jpg"),
    );
    let asset = StaticMediaAsset::new(
        vec![
            original.clone(),
            RenditionInfo::new(
                800,
                600,
                "web.jpg",
                RenditionHandle::new("/content/dam/launch/web.jpg"),
            ),
        ],
        Some(original),
    );
    let resolver = RenditionResolver::new(&asset);

    // Try the teaser format first, fall back to the wide hero format.
    let request = RenditionRequest::new()
        .with_format(catalog.get("teaser")?.clone())
        .with_format(catalog.get("hero-wide")?.clone());

    match resolver.resolve(&request) {
        Some(resolved) => println!(
            "matched format '{}': {}x{} from '{}'",
            resolved.format.as_ref().map_or("-", |f| f.name.as_str()),
            resolved.rendition.width(),
            resolved.rendition.height(),
            resolved.rendition.file_name(),
        ),
        None => println!("no rendition satisfies the requested formats"),
    }

    Ok(())
}

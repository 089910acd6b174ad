//! Resolve renditions for an in-memory asset and print the outcomes.
//!
//! Run with `cargo run --example resolve_one`.

use mediafit::{
    MediafitResult, RenditionDescriptor, RenditionHandle, RenditionInfo, RenditionRequest,
    RenditionResolver, StaticMediaAsset,
};

fn main() -> MediafitResult<()> {
    tracing_subscriber::fmt().init();

    let original = RenditionInfo::new(
        1600,
        1200,
        "original.jpg",
        RenditionHandle::new("/content/dam/hero/original.jpg"),
    );
    let asset = StaticMediaAsset::new(
        vec![
            original.clone(),
            RenditionInfo::new(
                400,
                300,
                "web.jpg",
                RenditionHandle::new("/content/dam/hero/web.jpg"),
            ),
            RenditionInfo::new(
                48,
                48,
                "thumbnail.48.48.png",
                RenditionHandle::new("/content/dam/hero/thumbnail.48.48.png"),
            ),
        ],
        Some(original),
    );
    let resolver = RenditionResolver::new(&asset);

    // Exact hit on a stored rendition.
    print_outcome(
        "fixed 400x300",
        resolver.resolve(&RenditionRequest::new().with_fixed_size(400, 300)),
    );

    // No stored 800-wide rendition: a virtual downscale of the original.
    print_outcome(
        "fixed 800 wide",
        resolver.resolve(&RenditionRequest::new().with_fixed_size(800, 0)),
    );

    // No size constraints at all: the designated original wins.
    print_outcome("unconstrained", resolver.resolve(&RenditionRequest::new()));

    Ok(())
}

fn print_outcome(label: &str, resolved: Option<mediafit::Resolved>) {
    match resolved {
        Some(resolved) => {
            let kind = match &resolved.rendition {
                RenditionDescriptor::Concrete(_) => "stored",
                RenditionDescriptor::Virtual { .. } => "virtual",
            };
            println!(
                "{label}: {kind} {}x{} from '{}'",
                resolved.rendition.width(),
                resolved.rendition.height(),
                resolved.rendition.file_name(),
            );
        }
        None => println!("{label}: no match"),
    }
}

use super::*;

#[test]
fn builder_sets_constraints() {
    let spec = FormatSpec::new("teaser")
        .with_min_width(400)
        .with_max_width(800)
        .with_ratio(4.0 / 3.0)
        .with_extensions(["jpg", "png"]);

    assert_eq!(spec.name, "teaser");
    assert_eq!(spec.min_width, 400);
    assert_eq!(spec.max_width, 800);
    assert_eq!(spec.extensions, vec!["jpg", "png"]);
    assert!(spec.validate().is_ok());
}

#[test]
fn negative_or_non_finite_ratio_is_rejected() {
    assert!(FormatSpec::new("bad").with_ratio(-1.0).validate().is_err());
    assert!(
        FormatSpec::new("bad")
            .with_ratio(f64::NAN)
            .validate()
            .is_err()
    );
    assert!(
        FormatSpec::new("bad")
            .with_ratio(f64::INFINITY)
            .validate()
            .is_err()
    );
    assert!(FormatSpec::new("ok").with_ratio(0.0).validate().is_ok());
}

#[test]
fn crossed_bounds_are_rejected() {
    assert!(
        FormatSpec::new("bad")
            .with_min_width(800)
            .with_max_width(400)
            .validate()
            .is_err()
    );
    assert!(
        FormatSpec::new("bad")
            .with_min_height(600)
            .with_max_height(300)
            .validate()
            .is_err()
    );
}

#[test]
fn fixed_dimensions_collapse_the_effective_bounds() {
    let spec = FormatSpec::new("banner")
        .with_width(960)
        .with_min_width(100)
        .with_max_width(2000);

    assert_eq!(spec.effective_min_width(), 960);
    assert_eq!(spec.effective_max_width(), 960);
    assert_eq!(spec.effective_min_height(), 0);
    assert_eq!(spec.effective_max_height(), 0);
}

#[test]
fn effective_ratio_prefers_explicit_then_derives_from_fixed_size() {
    let explicit = FormatSpec::new("wide").with_ratio(16.0 / 9.0).with_width(100).with_height(100);
    assert!((explicit.effective_ratio() - 16.0 / 9.0).abs() < 1e-9);

    let derived = FormatSpec::new("square").with_width(200).with_height(100);
    assert!((derived.effective_ratio() - 2.0).abs() < 1e-9);

    let unset = FormatSpec::new("loose").with_min_width(10);
    assert_eq!(unset.effective_ratio(), 0.0);
}

#[test]
fn sizing_declaration_tracks_any_effective_constraint() {
    assert!(!FormatSpec::new("any").declares_sizing());
    assert!(
        !FormatSpec::new("ext-only")
            .with_extensions(["pdf"])
            .declares_sizing()
    );
    assert!(FormatSpec::new("w").with_width(10).declares_sizing());
    assert!(FormatSpec::new("minh").with_min_height(10).declares_sizing());
    assert!(FormatSpec::new("r").with_ratio(1.0).declares_sizing());
}

#[test]
fn specs_deserialize_with_sparse_fields() {
    let spec: FormatSpec =
        serde_json::from_str(r#"{"name":"teaser","min_width":400,"ratio":1.333}"#).unwrap();
    assert_eq!(spec.name, "teaser");
    assert_eq!(spec.min_width, 400);
    assert_eq!(spec.max_width, 0);
    assert!(spec.extensions.is_empty());
    assert!(spec.validate().is_ok());
}

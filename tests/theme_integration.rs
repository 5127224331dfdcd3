//! End-to-end tests for token resolution and variant composition.

use proptest::prelude::*;
use undertone::{
    presets, ColorMode, ComponentStyle, StyleRule, Theme, ThemeError, TokenDef, TokenTable,
    VariantFn,
};

fn overlap_theme() -> Theme {
    // base, size and variant all set "color" and "h" so merge order is visible.
    Theme::builder()
        .component(
            "Button",
            ComponentStyle::new(StyleRule::new().prop("color", "base").prop("h", "40px"))
                .size("xl", StyleRule::new().prop("color", "size").prop("h", "60px"))
                .variant(
                    "outline",
                    StyleRule::new().prop("color", "variant").prop("h", "62px"),
                ),
        )
        .build()
        .unwrap()
}

#[test]
fn build_rejects_duplicate_token_names() {
    let result = TokenTable::build([TokenDef::new("x", "#111"), TokenDef::new("x", "#222")]);
    assert!(matches!(
        result,
        Err(ThemeError::DuplicateToken { name }) if name == "x"
    ));
}

#[test]
fn button_outline_xl_carries_all_three_fragments() {
    let theme = presets::docs_site();
    let style = theme
        .compose("Button", Some("outline"), Some("xl"), None, ColorMode::Light)
        .unwrap();

    // size fragment
    assert_eq!(style.value("h"), Some("60px"));
    assert_eq!(style.value("min-w"), Some("16"));
    // variant fragment
    assert_eq!(style.value("border-width"), Some("2px"));
    // nothing half-resolved: serializing must show no token references
    let json = serde_json::to_string(&style).unwrap();
    assert!(!json.contains("ink"));
}

#[test]
fn code_installer_resolves_dark_color() {
    let theme = presets::docs_site();
    let style = theme
        .compose("Code", Some("installer"), None, None, ColorMode::Dark)
        .unwrap();
    assert_eq!(style.value("color"), Some("white"));

    let light = theme
        .compose("Code", Some("installer"), None, None, ColorMode::Light)
        .unwrap();
    assert_eq!(light.value("color"), Some("black"));
}

#[test]
fn unknown_variant_is_an_error() {
    let theme = presets::docs_site();
    let err = theme
        .compose("Button", Some("does-not-exist"), None, None, ColorMode::Light)
        .unwrap_err();
    assert_eq!(
        err,
        ThemeError::UnknownVariant {
            component: "Button".to_string(),
            variant: "does-not-exist".to_string()
        }
    );
}

#[test]
fn merge_order_is_base_then_size_then_variant() {
    let theme = overlap_theme();

    // base + size: size wins
    let style = theme
        .compose("Button", None, Some("xl"), None, ColorMode::Light)
        .unwrap();
    assert_eq!(style.value("color"), Some("size"));

    // base + variant: variant wins
    let style = theme
        .compose("Button", Some("outline"), None, None, ColorMode::Light)
        .unwrap();
    assert_eq!(style.value("color"), Some("variant"));

    // base + size + variant: variant wins over both
    let style = theme
        .compose("Button", Some("outline"), Some("xl"), None, ColorMode::Light)
        .unwrap();
    assert_eq!(style.value("color"), Some("variant"));
    assert_eq!(style.value("h"), Some("62px"));
}

#[test]
fn preset_composes_cleanly_in_both_modes() {
    let theme = presets::docs_site();
    let requests: &[(&str, Option<&str>, Option<&str>)] = &[
        ("Link", None, None),
        ("Code", Some("installer"), None),
        ("Button", Some("outline"), Some("xl")),
        ("Button", Some("clipboard-copy"), None),
    ];

    for mode in [ColorMode::Light, ColorMode::Dark] {
        for &(component, variant, size) in requests {
            let style = theme
                .compose(component, variant, size, None, mode)
                .unwrap_or_else(|e| panic!("{component} under {mode:?}: {e}"));
            assert!(!style.is_empty());
        }
    }
}

#[test]
fn describe_reports_every_token_and_component() {
    let theme = presets::docs_site();
    let listing = theme.describe();
    for token in theme.tokens().names() {
        assert!(listing.contains(token), "missing token {token}");
    }
    for component in ["Link", "Code", "Button"] {
        assert!(listing.contains(component));
    }
}

// Property tests over generated token tables.

fn arb_token() -> impl Strategy<Value = TokenDef> {
    (
        "[a-z_]{1,12}",
        "#[0-9a-f]{6}",
        proptest::option::of("#[0-9a-f]{6}"),
    )
        .prop_map(|(name, default, dark)| TokenDef {
            name,
            default,
            dark,
        })
}

proptest! {
    #[test]
    fn resolve_is_pure(def in arb_token(), mode in prop_oneof![Just(ColorMode::Light), Just(ColorMode::Dark)]) {
        let name = def.name.clone();
        let table = TokenTable::build([def]).unwrap();
        let first = table.resolve(&name, mode).unwrap().to_string();
        let second = table.resolve(&name, mode).unwrap().to_string();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn dark_without_override_inherits_light(def in arb_token()) {
        let mut def = def;
        def.dark = None;
        let name = def.name.clone();
        let table = TokenTable::build([def]).unwrap();
        prop_assert_eq!(
            table.resolve(&name, ColorMode::Dark).unwrap(),
            table.resolve(&name, ColorMode::Light).unwrap()
        );
    }

    #[test]
    fn dark_override_is_honored(def in arb_token(), dark in "#[0-9a-f]{6}") {
        let mut def = def;
        def.dark = Some(dark.clone());
        let name = def.name.clone();
        let default = def.default.clone();
        let table = TokenTable::build([def]).unwrap();
        prop_assert_eq!(table.resolve(&name, ColorMode::Dark).unwrap(), dark.as_str());
        prop_assert_eq!(table.resolve(&name, ColorMode::Light).unwrap(), default.as_str());
    }

    #[test]
    fn literal_overrides_never_touch_the_table(value in "[a-z_]{1,12}") {
        // Even when the literal happens to equal a registered token name.
        let theme = Theme::builder()
            .token(value.clone(), "#123456")
            .component(
                "Chip",
                ComponentStyle::new(StyleRule::new().prop("color", value.clone())),
            )
            .build()
            .unwrap();
        let style = theme.compose("Chip", None, None, None, ColorMode::Dark).unwrap();
        prop_assert_eq!(style.value("color"), Some(value.as_str()));
    }
}

// The color scheme argument passes through to variant functions untouched.

fn scheme_echo(_mode: ColorMode, scheme: Option<&str>) -> StyleRule {
    StyleRule::new().prop("accent", scheme.unwrap_or("default"))
}

#[test]
fn color_scheme_reaches_dynamic_variants() {
    let theme = Theme::builder()
        .component(
            "Badge",
            ComponentStyle::new(StyleRule::new()).variant("accented", scheme_echo as VariantFn),
        )
        .build()
        .unwrap();

    let style = theme
        .compose("Badge", Some("accented"), None, Some("pink"), ColorMode::Light)
        .unwrap();
    assert_eq!(style.value("accent"), Some("pink"));

    let style = theme
        .compose("Badge", Some("accented"), None, None, ColorMode::Light)
        .unwrap();
    assert_eq!(style.value("accent"), Some("default"));
}

//! Built-in themes.

use crate::component::{ComponentStyle, VariantFn};
use crate::mode::ColorMode;
use crate::style::StyleRule;
use crate::theme::Theme;

// Palette values referenced by more than one token or component. Scale names
// the host platform defines itself (blackAlpha.*, whiteAlpha.*, "md") stay
// opaque strings.
const BRAND_500: &str = "#F545A1";
const CHARCOAL: &str = "#111";
const CANVAS: &str = "#ffffff";
const TEXT: &str = "#444";
const TEXT_LIGHTER: &str = "#555";
const TEXT_LIGHTEST: &str = "#666";
const TEXT_DARKER: &str = "#222";

/// The documentation-site theme: eleven semantic color tokens plus the
/// `Link`, `Code` and `Button` components.
///
/// Dark values lean on the host's alpha scales so text and borders blend with
/// whatever sits behind them; tokens without a dark entry intentionally keep
/// their light value in dark mode.
///
/// # Example
///
/// ```rust
/// use undertone::{presets, ColorMode};
///
/// let theme = presets::docs_site();
/// assert_eq!(theme.resolve("t_text", ColorMode::Light).unwrap(), "#444");
///
/// let button = theme
///     .compose("Button", Some("outline"), Some("xl"), None, ColorMode::Light)
///     .unwrap();
/// assert_eq!(button.value("h"), Some("60px"));
/// assert_eq!(button.value("border-width"), Some("2px"));
/// ```
pub fn docs_site() -> Theme {
    Theme::builder()
        .token_dark("t_border_color", "blackAlpha.50", "whiteAlpha.300")
        .token_dark("t_strong", TEXT_DARKER, "whiteAlpha.900")
        .token_dark("t_text_docs", TEXT_LIGHTER, "whiteAlpha.800")
        .token_dark("t_text", TEXT, "whiteAlpha.800")
        .token_dark("t_weak", TEXT_LIGHTER, "whiteAlpha.800")
        .token_dark("t_weakest", TEXT_LIGHTEST, "whiteAlpha.800")
        .token_dark("t_background", CANVAS, "transparent")
        .token_dark("t_background_docs", CANVAS, CHARCOAL)
        .token_dark("t_background_article", "white", CHARCOAL)
        .token_dark("ink", TEXT, CANVAS)
        .token_dark("inverse_ink", CANVAS, TEXT)
        .component(
            "Link",
            ComponentStyle::new(
                StyleRule::new()
                    .prop("color", BRAND_500)
                    .prop("transition", "color 200ms")
                    .nested("_hover", StyleRule::new().prop("color", BRAND_500))
                    .nested("_focus", StyleRule::new().prop("box-shadow", "none")),
            ),
        )
        .component(
            "Code",
            ComponentStyle::new(StyleRule::new()).variant("installer", installer as VariantFn),
        )
        .component(
            "Button",
            ComponentStyle::new(StyleRule::new())
                .size(
                    "xl",
                    StyleRule::new()
                        .prop("h", "60px")
                        .prop("min-w", "16")
                        .prop("font-size", "md")
                        .prop("px", "7"),
                )
                .variant(
                    "outline",
                    StyleRule::new()
                        .prop("border-width", "2px")
                        .nested("_hover", StyleRule::new().prop("text-decoration", "none")),
                )
                .variant("clipboard-copy", clipboard_copy as VariantFn),
        )
        .build()
        .expect("preset token names are unique")
}

/// Unstyled inline code for the install command, readable in either mode.
fn installer(mode: ColorMode, _scheme: Option<&str>) -> StyleRule {
    StyleRule::new()
        .prop("border", "none")
        .prop("background", "none")
        .prop("color", mode.pick("black", "white"))
        .prop("font-size", "16")
}

/// Copy-to-clipboard button: inverted ink with mode-aware hover/active states.
fn clipboard_copy(mode: ColorMode, _scheme: Option<&str>) -> StyleRule {
    StyleRule::new()
        .token("bg", "ink")
        .token("color", "inverse_ink")
        .nested("_focus", StyleRule::new().prop("shadow", "none"))
        .nested(
            "_hover",
            StyleRule::new().prop("bg", mode.pick("blackAlpha.700", "whiteAlpha.900")),
        )
        .nested(
            "_active",
            StyleRule::new().prop("bg", mode.pick("blackAlpha.800", "whiteAlpha.800")),
        )
}

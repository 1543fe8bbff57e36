//! # Colorblind transforms
//!
//! Two kinds of remapping are offered for the four [`ColorblindType`]s:
//!
//! - `General` is a heuristic: a color is bucketed into a hue family by its
//!   dominant channel and replaced by a fixed, distinguishable substitute.
//!   Colors outside the known families pass through untouched.
//! - `Protanopia`, `Deuteranopia` and `Tritanopia` are simulated physiologically:
//!   RGB is projected into LMS cone space, one cone response is removed or
//!   reweighted, and the result is projected back and clamped.
//!
//! Widgets should not transform colors one by one. The root reads a
//! [`SemanticPalette`] for the active accessibility mode and publishes it as
//! custom properties with [`root_custom_properties`].
//!
//! ```rust
//! use safar_core::*;
//!
//! let brand = Color::from_css("rgb(0, 212, 124)");
//! assert_eq!(transform(brand, ColorblindType::General), Color::from_hex("#2563eb"));
//! ```

use serde::{Deserialize, Serialize};

use crate::Color;

/// Brand green used on buttons, markers and highlights.
pub const BRAND_GREEN: Color = Color::from_rgb(0, 212, 124);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorblindType {
    #[default]
    General,
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl ColorblindType {
    pub const ALL: [ColorblindType; 4] = [
        ColorblindType::General,
        ColorblindType::Protanopia,
        ColorblindType::Deuteranopia,
        ColorblindType::Tritanopia,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ColorblindType::General => "general",
            ColorblindType::Protanopia => "protanopia",
            ColorblindType::Deuteranopia => "deuteranopia",
            ColorblindType::Tritanopia => "tritanopia",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key.trim())
    }
}

/// Which palette the application root publishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessibilityMode {
    #[default]
    Standard,
    Colorblind,
    HighContrast,
}

impl AccessibilityMode {
    pub fn key(self) -> &'static str {
        match self {
            AccessibilityMode::Standard => "standard",
            AccessibilityMode::Colorblind => "colorblind",
            AccessibilityMode::HighContrast => "high-contrast",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "standard" => Some(AccessibilityMode::Standard),
            "colorblind" => Some(AccessibilityMode::Colorblind),
            "high-contrast" => Some(AccessibilityMode::HighContrast),
            _ => None,
        }
    }
}

type Mat3 = [[f64; 3]; 3];

const RGB_TO_LMS: Mat3 = [
    [17.8824, 43.5161, 4.11935],
    [3.45565, 27.1554, 3.86714],
    [0.0299566, 0.184309, 1.46709],
];

const LMS_TO_RGB: Mat3 = [
    [0.0809444479, -0.130504409, 0.116721066],
    [-0.0102485335, 0.0540193266, -0.113614708],
    [-0.000365296938, -0.00412161469, 0.693511405],
];

// L cone missing; rebuilt from M and S.
const PROTANOPIA: Mat3 = [[0.0, 2.02344, -2.52581], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

// M cone missing; rebuilt from L and S.
const DEUTERANOPIA: Mat3 = [[1.0, 0.0, 0.0], [0.494207, 0.0, 1.24827], [0.0, 0.0, 1.0]];

// S cone missing; rebuilt from L and M.
const TRITANOPIA: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-0.395913, 0.801109, 0.0]];

fn mul(m: &Mat3, v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

fn to_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round() as u8
}

fn simulate(color: Color, deficiency: &Mat3) -> Color {
    let rgb = [color.0 as f64, color.1 as f64, color.2 as f64];
    let lms = mul(&RGB_TO_LMS, rgb);
    let out = mul(&LMS_TO_RGB, mul(deficiency, lms));
    Color(
        to_channel(out[0]),
        to_channel(out[1]),
        to_channel(out[2]),
        color.3,
    )
}

/// Hue buckets recognised by the general remap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HueFamily {
    Green,
    YellowOrange,
    Red,
    Other,
}

pub fn classify(color: Color) -> HueFamily {
    let (r, g, b) = (color.0 as i32, color.1 as i32, color.2 as i32);
    if g >= 100 && g > r + 40 && g > b + 40 {
        HueFamily::Green
    } else if r > 200 && g >= 100 && b < 100 {
        HueFamily::YellowOrange
    } else if r > 150 && g < 100 && b < 100 {
        HueFamily::Red
    } else {
        HueFamily::Other
    }
}

fn remap_general(color: Color) -> Color {
    let replacement = match classify(color) {
        HueFamily::Green => Color::from_rgb(0x25, 0x63, 0xeb),
        HueFamily::Red => Color::from_rgb(0xea, 0x58, 0x0c),
        HueFamily::YellowOrange => Color::from_rgb(0xfa, 0xcc, 0x15),
        HueFamily::Other => return color,
    };
    replacement.with_alpha(color.3)
}

/// Remaps `color` for the given deficiency. Alpha is preserved.
pub fn transform(color: Color, kind: ColorblindType) -> Color {
    match kind {
        ColorblindType::General => remap_general(color),
        ColorblindType::Protanopia => simulate(color, &PROTANOPIA),
        ColorblindType::Deuteranopia => simulate(color, &DEUTERANOPIA),
        ColorblindType::Tritanopia => simulate(color, &TRITANOPIA),
    }
}

/// Hex convenience used by theme tables; malformed input is treated as black.
pub fn transform_hex(hex: &str, kind: ColorblindType) -> String {
    transform(Color::from_hex(hex), kind).to_hex()
}

/// UI-semantic colors published at the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SemanticPalette {
    pub success: Color,
    pub warning: Color,
    pub info: Color,
    pub error: Color,
    pub brand: Color,
}

impl SemanticPalette {
    pub const STANDARD: SemanticPalette = SemanticPalette {
        success: Color::from_rgb(0x16, 0xa3, 0x4a),
        warning: Color::from_rgb(0xf5, 0x9e, 0x0b),
        info: Color::from_rgb(0x3b, 0x82, 0xf6),
        error: Color::from_rgb(0xdc, 0x26, 0x26),
        brand: BRAND_GREEN,
    };

    pub const HIGH_CONTRAST: SemanticPalette = SemanticPalette {
        success: Color::from_rgb(0x00, 0xe6, 0x76),
        warning: Color::from_rgb(0xff, 0xea, 0x00),
        info: Color::from_rgb(0x40, 0xc4, 0xff),
        error: Color::from_rgb(0xff, 0x17, 0x44),
        brand: Color::from_rgb(0xff, 0xff, 0xff),
    };

    /// Pre-computed substitutions; only `brand` goes through [`transform`].
    pub fn for_colorblind(kind: ColorblindType) -> SemanticPalette {
        let (success, warning, info, error) = match kind {
            ColorblindType::General => (0x2563eb, 0xeab308, 0x0891b2, 0xea580c),
            ColorblindType::Protanopia => (0x0072b2, 0xe69f00, 0x56b4e9, 0xd55e00),
            ColorblindType::Deuteranopia => (0x0072b2, 0xe69f00, 0x56b4e9, 0xcc79a7),
            ColorblindType::Tritanopia => (0x009e73, 0xd55e00, 0x0072b2, 0xe41a1c),
        };
        SemanticPalette {
            success: from_u32(success),
            warning: from_u32(warning),
            info: from_u32(info),
            error: from_u32(error),
            brand: transform(BRAND_GREEN, kind),
        }
    }

    pub fn for_mode(mode: AccessibilityMode, kind: ColorblindType) -> SemanticPalette {
        match mode {
            AccessibilityMode::Standard => Self::STANDARD,
            AccessibilityMode::Colorblind => Self::for_colorblind(kind),
            AccessibilityMode::HighContrast => Self::HIGH_CONTRAST,
        }
    }
}

fn from_u32(rgb: u32) -> Color {
    Color::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// `--color-*` custom properties for the application root, in a stable order.
pub fn root_custom_properties(palette: &SemanticPalette) -> Vec<(&'static str, String)> {
    vec![
        ("--color-brand", palette.brand.to_hex()),
        ("--color-success", palette.success.to_hex()),
        ("--color-warning", palette.warning.to_hex()),
        ("--color-info", palette.info.to_hex()),
        ("--color-error", palette.error.to_hex()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_maps_brand_green_to_blue() {
        let out = transform(Color::from_css("rgb(0,212,124)"), ColorblindType::General);
        assert_eq!(out.to_hex(), "#2563eb");
    }

    #[test]
    fn general_passes_unknown_colors_through() {
        let grey = Color::from_hex("#808080");
        assert_eq!(transform(grey, ColorblindType::General), grey);
        assert_eq!(classify(Color::from_hex("#ef4444")), HueFamily::Red);
        assert_eq!(classify(Color::from_hex("#f59e0b")), HueFamily::YellowOrange);
    }

    #[test]
    fn simulation_is_deterministic_and_clamped() {
        for kind in ColorblindType::ALL {
            for hex in ["#ff0000", "#00ff00", "#0000ff", "#ffffff", "#00d47c", "#123456"] {
                let c = Color::from_hex(hex);
                let a = transform(c, kind);
                let b = transform(c, kind);
                assert_eq!(a, b, "{hex} under {kind:?}");
                assert_eq!(a.3, 255);
            }
        }
        // Blue channel comes out near -768 and +768 before clamping.
        assert_eq!(transform_hex("#ff0000", ColorblindType::Tritanopia), "#7e7e00");
        assert_eq!(transform_hex("#00ff00", ColorblindType::Tritanopia), "#8181ff");
        assert_eq!(transform_hex("#ff0000", ColorblindType::Deuteranopia), "#4b4b00");
    }

    #[test]
    fn black_stays_black_under_simulation() {
        for kind in [
            ColorblindType::Protanopia,
            ColorblindType::Deuteranopia,
            ColorblindType::Tritanopia,
        ] {
            assert_eq!(transform(Color::BLACK, kind), Color::BLACK);
        }
    }

    #[test]
    fn malformed_hex_is_black_before_transform() {
        assert_eq!(transform_hex("not-a-color", ColorblindType::Protanopia), "#000000");
        assert_eq!(transform_hex("#12", ColorblindType::Tritanopia), "#000000");
    }

    #[test]
    fn keys_round_trip() {
        for kind in ColorblindType::ALL {
            assert_eq!(ColorblindType::from_key(kind.key()), Some(kind));
        }
        assert_eq!(
            AccessibilityMode::from_key("high-contrast"),
            Some(AccessibilityMode::HighContrast)
        );
        assert_eq!(AccessibilityMode::from_key("sepia"), None);
    }

    #[test]
    fn general_palette_exports_root_properties() {
        let palette = SemanticPalette::for_mode(AccessibilityMode::Colorblind, ColorblindType::General);
        let css = root_custom_properties(&palette)
            .into_iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(css, @r"
        --color-brand: #2563eb;
        --color-success: #2563eb;
        --color-warning: #eab308;
        --color-info: #0891b2;
        --color-error: #ea580c;
        ");
    }

    #[test]
    fn high_contrast_ignores_colorblind_type() {
        for kind in ColorblindType::ALL {
            assert_eq!(
                SemanticPalette::for_mode(AccessibilityMode::HighContrast, kind),
                SemanticPalette::HIGH_CONTRAST
            );
        }
        assert!(SemanticPalette::HIGH_CONTRAST.warning.contrast_ratio(Color::BLACK) > 7.0);
    }
}

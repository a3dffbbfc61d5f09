//! Named color palettes.
//!
//! The built-in table is an immutable process-wide registry: 19 palettes of
//! 8 colors each, in a fixed order that is part of the visual design
//! (bars are drawn left to right in palette order). Additional palettes can
//! be loaded from a JSON file at runtime.

use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::color::Rgb;
use crate::error::{RenderError, RenderResult};

/// A named, ordered sequence of bar colors.
#[derive(Debug, Clone)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<Rgb>,
}

impl Palette {
    fn from_hex_table(name: &str, hex: &[&str]) -> RenderResult<Self> {
        let colors = hex
            .iter()
            .map(|h| Rgb::from_hex(h))
            .collect::<RenderResult<Vec<_>>>()?;
        Ok(Palette {
            name: name.to_string(),
            colors,
        })
    }
}

/// Built-in palette table, (name, 8 hex colors) in display order.
const BUILTIN_TABLE: &[(&str, [&str; 8])] = &[
    // The classics
    (
        "Crimson_Slate",
        [
            "#F42E1D", "#E86C5E", "#97524C", "#AFB1B5", "#84898D", "#606469", "#363E48", "#1C1D22",
        ],
    ),
    (
        "Retro_Sunset",
        [
            "#D62828", "#B53139", "#822F35", "#521B29", "#291528", "#D67D34", "#F79D40", "#F7E1B5",
        ],
    ),
    (
        "Warm_Industrial",
        [
            "#F23022", "#F27138", "#F59E4C", "#FADC38", "#AAB0B6", "#787C81", "#4B4E53", "#222327",
        ],
    ),
    (
        "Ocean_Depths",
        [
            "#0D3B66", "#2678B2", "#3590D6", "#64C5EB", "#B2DDE8", "#1C374D", "#15222E", "#0B1116",
        ],
    ),
    (
        "Monolith",
        [
            "#FFFFFF", "#D6D6D6", "#9E9E9E", "#757575", "#545454", "#363636", "#1C1C1C", "#080808",
        ],
    ),
    (
        "Cyberpunk_Neon",
        [
            "#FF0055", "#FF00AA", "#BC00DD", "#7700E6", "#3300FF", "#0055FF", "#00AAFF", "#00FFFF",
        ],
    ),
    (
        "Forest_Canopy",
        [
            "#386641", "#6A994E", "#A7C957", "#F2E8CF", "#BC4749", "#7F4F24", "#582F0E", "#281105",
        ],
    ),
    (
        "Cotton_Candy",
        [
            "#FFC8DD", "#FFAFCC", "#BDE0FE", "#A2D2FF", "#CDB4DB", "#FFC8DD", "#FFAFCC", "#A2D2FF",
        ],
    ),
    (
        "Matcha_Latte",
        [
            "#3F4238", "#5F6F52", "#A9B388", "#FEFAE0", "#F9EBC7", "#B99470", "#FEFAE0", "#A9B388",
        ],
    ),
    // Aesthetic & trendy
    (
        "Deep_Sea",
        [
            "#001219", "#005F73", "#0A9396", "#94D2BD", "#E9D8A6", "#EE9B00", "#CA6702", "#9B2226",
        ],
    ),
    (
        "Vaporwave_Sunset",
        [
            "#240046", "#3C096C", "#5A189A", "#7B2CBF", "#9D4EDD", "#C77DFF", "#E0AAFF", "#FF9E00",
        ],
    ),
    (
        "Lofi_Beats",
        [
            "#2B2D42", "#8D99AE", "#EDF2F4", "#EF233C", "#D90429", "#540D6E", "#EE4266", "#FFD23F",
        ],
    ),
    (
        "Molten_Lava",
        [
            "#050505", "#2A2A2A", "#4A0E0E", "#8B0000", "#CD3700", "#FF4500", "#FFA500", "#FFD700",
        ],
    ),
    (
        "Dried_Lavender",
        [
            "#231942", "#4A3B69", "#6B5077", "#8D6B8D", "#B08BA3", "#D4ACB6", "#E9DCEB", "#F8F1F5",
        ],
    ),
    (
        "Acid_Matrix",
        [
            "#000000", "#0F290F", "#1B4D1B", "#286E28", "#3D8C3D", "#56AC56", "#74CC74", "#00FF41",
        ],
    ),
    (
        "Cold_Brew",
        [
            "#3E2723", "#4E342E", "#5D4037", "#6D4C41", "#795548", "#8D6E63", "#A1887F", "#D7CCC8",
        ],
    ),
    (
        "Neon_Tokyo",
        [
            "#050510", "#121226", "#222240", "#2D2D55", "#00F0FF", "#FF003C", "#FDFDFD", "#7000FF",
        ],
    ),
    (
        "Swamp_Witch",
        [
            "#1A2F1A", "#2D472D", "#3F5E3F", "#4F764F", "#5C8D5C", "#6B9E6B", "#8DA88D", "#C2B280",
        ],
    ),
    (
        "Peach_Fuzz",
        [
            "#603813", "#855E42", "#A67C52", "#C9A66B", "#EBC9A5", "#FFE8D6", "#FFF5EE", "#FFFFFF",
        ],
    ),
];

/// The built-in palettes, in table order. Initialized once, never mutated.
pub fn builtin_palettes() -> &'static [Palette] {
    static PALETTES: OnceLock<Vec<Palette>> = OnceLock::new();
    PALETTES.get_or_init(|| {
        BUILTIN_TABLE
            .iter()
            .map(|(name, hex)| {
                // The table is compile-time data; a parse failure here is a
                // defect in the table itself, not a runtime condition.
                Palette::from_hex_table(name, hex)
                    .unwrap_or_else(|e| panic!("invalid built-in palette {}: {}", name, e))
            })
            .collect()
    })
}

/// User palette file schema.
#[derive(Debug, Deserialize)]
struct PaletteFile {
    palettes: Vec<PaletteEntry>,
}

#[derive(Debug, Deserialize)]
struct PaletteEntry {
    name: String,
    colors: Vec<String>,
}

/// Load additional palettes from a JSON file.
///
/// Schema: `{"palettes": [{"name": "...", "colors": ["#RRGGBB", ...]}]}`.
/// Unlike the built-ins, user palettes may have any positive color count.
pub fn load_palette_file(path: impl AsRef<Path>) -> RenderResult<Vec<Palette>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| RenderError::PaletteFile(e.to_string()))?;
    let file: PaletteFile = serde_json::from_str(&content)?;

    let mut palettes = Vec::with_capacity(file.palettes.len());
    for entry in file.palettes {
        if entry.colors.is_empty() {
            return Err(RenderError::InvalidPalette {
                name: entry.name,
                message: "palette has no colors".to_string(),
            });
        }
        let colors = entry
            .colors
            .iter()
            .map(|h| Rgb::from_hex(h))
            .collect::<RenderResult<Vec<_>>>()
            .map_err(|e| RenderError::InvalidPalette {
                name: entry.name.clone(),
                message: e.to_string(),
            })?;
        palettes.push(Palette {
            name: entry.name,
            colors,
        });
    }
    Ok(palettes)
}

//! Naming screen colors.
//!
//! Two classifiers live here. [`nearest_named_color`] picks the closest entry
//! of a fixed X11-derived palette and reports the name a viewer would use for
//! it ("Light Blue" for dodger blue). [`hsv_bucket`] is the coarse
//! hue-range classifier.

use illumify_model::Hsv;
use tracing::warn;

/// A palette entry: the X11 color and the name shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub x11_name: &'static str,
    pub rgb: [u8; 3],
    /// What the color reads as, e.g. "Light Red" for salmon.
    pub display_name: &'static str,
}

const fn entry(x11_name: &'static str, rgb: [u8; 3], display_name: &'static str) -> PaletteEntry {
    PaletteEntry {
        x11_name,
        rgb,
        display_name,
    }
}

/// Ordered palette. Order matters: ties go to the earlier entry.
pub static PALETTE: &[PaletteEntry] = &[
    // Pinks
    entry("pink", [255, 192, 203], "Pink"),
    entry("light pink", [255, 182, 193], "Light Pink"),
    entry("hot pink", [255, 105, 180], "Pink"),
    entry("deep pink", [255, 20, 147], "Dark Pink"),
    entry("pale violet red", [219, 112, 147], "Dark Pink"),
    entry("medium violet red", [199, 21, 133], "Dark Pink"),

    // Reds
    entry("red", [255, 0, 0], "Red"),
    entry("dark red", [139, 0, 0], "Dark Red"),
    entry("light salmon", [255, 160, 122], "Light Red"),
    entry("salmon", [255, 128, 114], "Light Red"),
    entry("dark salmon", [233, 150, 122], "Light Red"),
    entry("crimson", [220, 20, 60], "Light Red"),
    entry("firebrick", [178, 34, 34], "Red"),

    // Oranges
    entry("orange", [255, 165, 0], "Orange"),
    entry("coral", [255, 127, 80], "Light Orange"),
    entry("dark orange", [255, 140, 0], "Orange"),
    entry("orange red", [255, 69, 0], "Orange"),
    entry("tomato", [255, 99, 71], "Light Orange"),

    // Yellows
    entry("yellow", [255, 255, 0], "Yellow"),
    entry("light yellow", [255, 255, 224], "Light Yellow"),
    entry("gold", [255, 215, 0], "Yellow"),
    entry("papaya whip", [255, 239, 213], "Light Yellow"),
    entry("lemon chiffon", [255, 250, 205], "Light Yellow"),
    entry("khaki", [240, 230, 140], "Light Yellow"),
    entry("pale golden rod", [238, 232, 170], "Light Yellow"),

    // Browns
    entry("bisque", [255, 228, 196], "Light Brown"),
    entry("blanched almond", [255, 235, 205], "Light Brown"),
    entry("burly wood", [222, 184, 135], "Light Brown"),
    entry("maroon", [128, 0, 0], "Dark Brown"),
    entry("sienna", [160, 82, 45], "Brown"),
    entry("saddle brown", [139, 69, 19], "Brown"),
    entry("chocolate", [210, 105, 30], "Brown"),
    entry("peru", [205, 133, 63], "Brown"),
    entry("wheat", [245, 222, 173], "Light Brown"),

    // Greens
    entry("lime", [0, 255, 0], "Green"),
    entry("dark olive green", [85, 107, 47], "Dark Green"),
    entry("olive", [128, 128, 0], "Green"),
    entry("olive drab", [107, 142, 35], "Green"),
    entry("yellow green", [154, 205, 50], "Light Green"),
    entry("lime green", [50, 205, 50], "Green"),
    entry("lawn green", [124, 252, 0], "Light Green"),
    entry("chartreuse", [127, 255, 0], "Light Green"),
    entry("green yellow", [173, 255, 47], "Light Green"),
    entry("spring green", [0, 255, 127], "Light Green"),
    entry("light green", [144, 238, 144], "Light Green"),
    entry("forest green", [34, 139, 34], "Green"),
    entry("green", [0, 128, 0], "Green"),
    entry("dark green", [0, 100, 0], "Dark Green"),

    // Cyans
    entry("aqua", [0, 255, 255], "Light Blue"),
    entry("aquamarine", [127, 255, 212], "Light Blue"),
    entry("light cyan", [224, 255, 225], "Light Blue"),
    entry("turquoise", [64, 224, 208], "Light Blue"),
    entry("dark turquoise", [0, 206, 209], "Light Blue"),
    entry("cadet blue", [95, 158, 160], "Light Blue"),

    // Blues
    entry("blue", [0, 0, 255], "Blue"),
    entry("light blue", [173, 216, 230], "Light Blue"),
    entry("light steel blue", [176, 196, 222], "Light Blue"),
    entry("sky blue", [135, 206, 235], "Light Blue"),
    entry("deep sky blue", [0, 191, 255], "Light Blue"),
    entry("dodger blue", [30, 144, 255], "Light Blue"),
    entry("cornflower blue", [100, 149, 237], "Light Blue"),
    entry("steel blue", [70, 130, 180], "Light Blue"),
    entry("royal blue", [65, 105, 225], "Light Blue"),
    entry("medium blue", [0, 0, 205], "Blue"),
    entry("dark blue", [0, 0, 139], "Dark Blue"),
    entry("midnight blue", [25, 25, 112], "Dark Blue"),

    // Purples, violets and magentas
    entry("purple", [128, 0, 128], "Purple"),
    entry("blue violet", [138, 43, 226], "Purple"),
    entry("thistle", [216, 191, 216], "Light Purple"),
    entry("plum", [221, 160, 221], "Light Purple"),
    entry("violet", [238, 130, 238], "Light Purple"),
    entry("orchid", [218, 112, 214], "Light Purple"),
    entry("fuchsia", [255, 0, 255], "Light Purple"),
    entry("medium orchid", [186, 85, 211], "Light Purple"),
    entry("medium purple", [147, 112, 219], "Light Purple"),
    entry("dark violet", [148, 0, 211], "Purple"),
    entry("dark orchid", [153, 50, 204], "Purple"),
    entry("dark magenta", [139, 0, 139], "Purple"),
    entry("indigo", [75, 0, 130], "Dark Purple"),

    // Whites
    entry("white", [255, 255, 255], "White"),
    entry("alice blue", [240, 248, 255], "White"),
    entry("azure", [240, 255, 255], "White"),
    entry("beige", [245, 245, 220], "White"),
    entry("ivory", [255, 255, 240], "White"),
    entry("floral white", [255, 250, 240], "White"),

    // Greys and black
    entry("gray", [128, 128, 128], "Gray"),
    entry("black", [0, 0, 0], "Black"),
    entry("light gray", [211, 211, 211], "Light Gray"),
    entry("dark gray", [169, 169, 169], "Gray"),
    entry("silver", [192, 192, 192], "Light Gray"),
    entry("dim gray", [105, 105, 105], "Dark Gray"),
];

/// Closest palette entry and its distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteMatch {
    pub entry: &'static PaletteEntry,
    /// Sum of absolute channel differences.
    pub distance: u32,
}

/// Sum of absolute channel differences.
pub fn manhattan_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| u32::from(x.abs_diff(*y)))
        .sum()
}

/// Find the palette entry closest to `rgb`. The first entry wins a tie.
pub fn nearest_palette_entry(rgb: [u8; 3]) -> PaletteMatch {
    let mut best = PaletteMatch {
        entry: &PALETTE[0],
        distance: manhattan_distance(rgb, PALETTE[0].rgb),
    };
    for candidate in &PALETTE[1..] {
        let distance = manhattan_distance(rgb, candidate.rgb);
        if distance < best.distance {
            best = PaletteMatch {
                entry: candidate,
                distance,
            };
        }
    }
    best
}

/// Display name of the palette color closest to `(r, g, b)`.
pub fn nearest_named_color(r: u8, g: u8, b: u8) -> &'static str {
    nearest_palette_entry([r, g, b]).entry.display_name
}

/// Coarse color name from HSV: black, grey and white by value and saturation,
/// otherwise by hue range.
pub fn hsv_bucket(hsv: Hsv) -> &'static str {
    let Hsv { h, s, v } = hsv;
    if !(0.0..=360.0).contains(&h) {
        warn!(hue = h, "hue is not between 0 and 360");
    }

    if v < 0.2 {
        "black"
    } else if s < 0.2 && v < 0.85 {
        "grey"
    } else if s < 0.15 && v > 0.85 {
        "white"
    } else if (0.0..30.0).contains(&h) {
        "red"
    } else if (30.0..60.0).contains(&h) {
        "orange"
    } else if (60.0..110.0).contains(&h) {
        "yellow"
    } else if (110.0..180.0).contains(&h) {
        "green"
    } else if (180.0..240.0).contains(&h) {
        "cyan"
    } else if (240.0..300.0).contains(&h) {
        "blue"
    } else if (300.0..360.0).contains(&h) {
        "magenta"
    } else {
        "unknown?"
    }
}

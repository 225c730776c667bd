use std::collections::BTreeSet;

use crate::models::answers::ColorChoice;

/// Literal tokens matchable for a curated color family, keyed by the
/// family's lower-cased label. A free-form word that happens to spell a
/// family name expands the same way a curated pick does.
fn family_synonyms(token: &str) -> Option<&'static [&'static str]> {
    let synonyms: &[&str] = match token {
        "white" => &["white", "ivory", "cream"],
        "black" => &["black"],
        "blue" => &["blue", "navy", "teal", "turquoise", "aqua", "sky"],
        "red" => &["red", "burgundy", "maroon", "wine"],
        "pink" => &["pink", "blush", "rose", "magenta"],
        "green" => &["green", "emerald", "olive", "sage"],
        "beige" => &["beige", "tan", "camel", "sand"],
        "pastel" => &["pastel", "light", "baby"],
        "jewel" => &["jewel", "emerald", "sapphire", "ruby"],
        "neutral" => &["neutral", "black", "white", "beige", "grey", "gray"],
        "flower" => &["floral", "flower"],
        _ => return None,
    };
    Some(synonyms)
}

/// Expands requested colors into the full set of matchable lower-case
/// tokens. Words outside the curated families pass through as their own
/// literal; the "Any" sentinel contributes nothing (the scorer skips the
/// facet entirely when it is present).
pub fn expand_colors(colors: &[ColorChoice]) -> BTreeSet<String> {
    let mut expanded = BTreeSet::new();
    for color in colors {
        if matches!(color, ColorChoice::Any) {
            continue;
        }
        let token = color.label().to_lowercase();
        match family_synonyms(&token) {
            Some(synonyms) => expanded.extend(synonyms.iter().map(|s| s.to_string())),
            None => {
                expanded.insert(token);
            }
        }
    }
    expanded
}

const WARM: &[&str] = &["red", "orange", "yellow", "pink", "coral", "peach"];
const COOL: &[&str] = &["blue", "green", "purple", "teal", "navy", "mint"];
const NEUTRAL: &[&str] = &[
    "black", "white", "gray", "beige", "brown", "tan", "cream", "ivory",
];
const METALLIC: &[&str] = &["gold", "silver", "bronze", "copper", "metallic"];

const FAMILIES: [&[&str]; 4] = [WARM, COOL, NEUTRAL, METALLIC];

/// Whether two lower-case color words read as the same coarse family
/// (warm/cool/neutral/metallic). Membership is tested by substring so
/// compound labels like "navy blue" still land in a family.
pub fn same_family(a: &str, b: &str) -> bool {
    FAMILIES.iter().any(|family| {
        family.iter().any(|c| a.contains(c)) && family.iter().any(|c| b.contains(c))
    })
}

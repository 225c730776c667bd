use std::collections::HashSet;

use crate::models::accessory::Accessory;
use crate::models::product::Product;

use super::colors;

/// How many accessory picks a product page shows.
const PICK_COUNT: usize = 3;

/// Additive relevance score for one accessory against one product. No facet
/// is a hard filter here; every accessory gets a score, possibly zero.
fn score_accessory(accessory: &Accessory, product: &Product) -> u32 {
    let mut score = 0;
    let category = product.category.to_lowercase();

    // Strong signal: the accessory is tagged for the product's occasion.
    if !category.is_empty()
        && accessory
            .occasions
            .iter()
            .any(|o| o.to_lowercase() == category)
    {
        score += 5;
    }

    // Color compatibility: containment either way, or same coarse family.
    if let Some(color) = product.color.as_deref() {
        let product_color = color.to_lowercase();
        let compatible = accessory.colors.iter().any(|c| {
            let c = c.to_lowercase();
            c.contains(&product_color)
                || product_color.contains(&c)
                || colors::same_family(&product_color, &c)
        });
        if compatible {
            score += 3;
        }
    }

    // Style keywords appearing in the product copy.
    if !product.description.is_empty() {
        let description = product.description.to_lowercase();
        if accessory
            .styles
            .iter()
            .any(|s| description.contains(&s.to_lowercase()))
        {
            score += 2;
        }
    }

    // Category-specific pairings.
    score += match category.as_str() {
        "evening" => match accessory.category.as_str() {
            "jewelry" => 4,
            "bags" => 3,
            "beauty" => 2,
            _ => 0,
        },
        "summer" => {
            let mut bonus = if accessory.category == "hats" { 4 } else { 0 };
            if accessory.occasions.iter().any(|o| o == "summer" || o == "beach") {
                bonus += 3;
            }
            bonus
        }
        "holiday" => match accessory.category.as_str() {
            "jewelry" => 3,
            "bags" => 2,
            "beauty" => 2,
            _ => 0,
        },
        "casual" => {
            let mut bonus = if accessory.category == "outerwear" { 4 } else { 0 };
            if accessory.occasions.iter().any(|o| o == "casual" || o == "daily") {
                bonus += 3;
            }
            bonus
        }
        _ => 0,
    };

    score
}

/// Scores every accessory against the product and picks a diverse top
/// three: the first pass accepts at most one item per accessory category;
/// a second pass tops up by score alone when fewer than three categories
/// were represented. Scores are internal and stripped from the result.
pub fn recommend_accessories<'a>(
    accessories: &'a [Accessory],
    product: &Product,
) -> Vec<&'a Accessory> {
    let mut scored: Vec<(&Accessory, u32)> = accessories
        .iter()
        .map(|a| (a, score_accessory(a, product)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut picked: Vec<&Accessory> = Vec::with_capacity(PICK_COUNT);
    let mut seen_categories: HashSet<&str> = HashSet::new();

    for (accessory, _) in &scored {
        if picked.len() >= PICK_COUNT {
            break;
        }
        if seen_categories.insert(accessory.category.as_str()) {
            picked.push(accessory);
        }
    }

    if picked.len() < PICK_COUNT {
        for (accessory, _) in &scored {
            if picked.len() >= PICK_COUNT {
                break;
            }
            if !picked.iter().any(|p| p.id == accessory.id) {
                picked.push(accessory);
            }
        }
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accessory(id: &str, category: &str, payload: serde_json::Value) -> Accessory {
        let mut value = serde_json::json!({
            "id": id,
            "name": format!("Accessory {id}"),
            "category": category,
        });
        value
            .as_object_mut()
            .unwrap()
            .extend(payload.as_object().unwrap().clone());
        serde_json::from_value(value).unwrap()
    }

    fn product(payload: serde_json::Value) -> Product {
        serde_json::from_value(payload).unwrap()
    }

    fn evening_product() -> Product {
        product(serde_json::json!({
            "id": "p1",
            "title": "Velvet Evening Gown",
            "description": "An elegant velvet gown",
            "category": "Evening",
            "price": 200.0,
            "color": "Navy"
        }))
    }

    #[test]
    fn test_occasion_tag_outweighs_category_bonus() {
        let tagged = accessory("a1", "hats", serde_json::json!({ "occasions": ["evening"] }));
        let jewelry = accessory("a2", "jewelry", serde_json::json!({}));
        let p = evening_product();
        assert_eq!(score_accessory(&tagged, &p), 5);
        assert_eq!(score_accessory(&jewelry, &p), 4);
    }

    #[test]
    fn test_color_compatibility_by_family() {
        // Mint and navy share the cool family; no substring relation.
        let scarf = accessory("a1", "outerwear", serde_json::json!({ "colors": ["mint"] }));
        assert_eq!(score_accessory(&scarf, &evening_product()), 3);

        let warm = accessory("a2", "outerwear", serde_json::json!({ "colors": ["coral"] }));
        assert_eq!(score_accessory(&warm, &evening_product()), 0);
    }

    #[test]
    fn test_style_keyword_matches_description() {
        let clutch = accessory(
            "a1",
            "bags",
            serde_json::json!({ "styles": ["elegant", "minimal"] }),
        );
        // 3 for the evening->bags pairing, 2 for the style hit.
        assert_eq!(score_accessory(&clutch, &evening_product()), 5);
    }

    #[test]
    fn test_summer_bonuses_stack() {
        let sunhat = accessory(
            "a1",
            "hats",
            serde_json::json!({ "occasions": ["summer", "beach"] }),
        );
        let p = product(serde_json::json!({
            "id": "p2",
            "title": "Linen Sundress",
            "category": "Summer",
            "price": 80.0
        }));
        // 5 occasion match + 4 hats bonus + 3 summer/beach tag bonus.
        assert_eq!(score_accessory(&sunhat, &p), 12);
    }

    #[test]
    fn test_first_pass_spreads_across_categories() {
        let accessories = vec![
            accessory("j1", "jewelry", serde_json::json!({ "occasions": ["evening"] })),
            accessory("j2", "jewelry", serde_json::json!({ "occasions": ["evening"] })),
            accessory("b1", "bags", serde_json::json!({})),
            accessory("h1", "hats", serde_json::json!({})),
            accessory("o1", "outerwear", serde_json::json!({})),
        ];
        let picks = recommend_accessories(&accessories, &evening_product());
        let categories: HashSet<&str> = picks.iter().map(|a| a.category.as_str()).collect();
        assert_eq!(picks.len(), 3);
        // Three distinct categories even though j2 outscores b1/h1/o1.
        assert_eq!(categories.len(), 3);
        assert_eq!(picks[0].id, "j1");
    }

    #[test]
    fn test_second_pass_tops_up_when_categories_run_out() {
        let accessories = vec![
            accessory("j1", "jewelry", serde_json::json!({})),
            accessory("j2", "jewelry", serde_json::json!({})),
            accessory("j3", "jewelry", serde_json::json!({})),
            accessory("j4", "jewelry", serde_json::json!({})),
            accessory("j5", "jewelry", serde_json::json!({})),
            accessory("h1", "hats", serde_json::json!({})),
        ];
        let picks = recommend_accessories(&accessories, &evening_product());
        assert_eq!(picks.len(), 3);
        // Two categories exist, so the hat fills one diversity slot and the
        // remaining slot goes back to the best jewelry.
        let jewelry = picks.iter().filter(|a| a.category == "jewelry").count();
        let hats = picks.iter().filter(|a| a.category == "hats").count();
        assert_eq!(jewelry, 2);
        assert_eq!(hats, 1);
    }

    #[test]
    fn test_small_catalog_returns_everything() {
        let accessories = vec![
            accessory("j1", "jewelry", serde_json::json!({})),
            accessory("h1", "hats", serde_json::json!({})),
        ];
        let picks = recommend_accessories(&accessories, &evening_product());
        assert_eq!(picks.len(), 2);
    }
}

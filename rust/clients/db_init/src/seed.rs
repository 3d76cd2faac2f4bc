use bson::DateTime;
use db_utils::schemas::{Food, Nutrition};

/// Sample foods inserted into a development database.
///
/// Nothing guards against re-insertion: every development run adds these again.
pub fn sample_foods() -> Vec<Food> {
    vec![Food {
        _id: None,
        name: "苹果".to_string(),
        barcode: None,
        brand: "新鲜水果".to_string(),
        category: "水果".to_string(),
        nutrition: Nutrition {
            calories: 52.0,
            protein: 0.3,
            fat: 0.2,
            carbohydrates: 14.0,
            fiber: 2.4,
        },
        serving_size: "100g".to_string(),
        tags: vec![
            "健康".to_string(),
            "天然".to_string(),
            "低卡路里".to_string(),
        ],
        is_verified: true,
        created_at: Some(DateTime::now()),
    }]
}

use crate::models::DishRecord;

/// Equality where a missing value never matches, not even another missing value
#[inline]
pub fn attribute_matches(left: Option<&str>, right: Option<&str>) -> bool {
    matches!((left, right), (Some(a), Some(b)) if a == b)
}

/// Check if a dish is similar to the seed dish
///
/// Similar means sharing the cuisine or the diet type. The seed itself is
/// never similar to itself.
#[inline]
pub fn is_similar(candidate: &DishRecord, seed: &DishRecord) -> bool {
    if candidate.dish_name == seed.dish_name {
        return false;
    }

    attribute_matches(candidate.cuisine.as_deref(), seed.cuisine.as_deref())
        || attribute_matches(candidate.diet_type.as_deref(), seed.diet_type.as_deref())
}

/// Dishes from `catalog` similar to `seed`, in catalog order
pub fn candidate_set<'a>(catalog: &'a [DishRecord], seed: &DishRecord) -> Vec<&'a DishRecord> {
    catalog
        .iter()
        .filter(|record| is_similar(record, seed))
        .collect()
}

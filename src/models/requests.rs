use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Request for dish recommendations
///
/// A missing `favorite_dish` key is `None`; an explicit `null` is
/// `Some(None)` and is looked up like any other unknown name.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(required)]
    #[serde(default, deserialize_with = "present_field")]
    pub favorite_dish: Option<Option<String>>,
}

fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

use serde::{Deserialize, Serialize};

/// A single affiliate catalog entry.
///
/// Static entries are immutable once constructed. Remotely fetched entries
/// bypass this type entirely and travel as opaque JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: String,
    pub affiliate_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub commission: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_is_omitted_when_absent() {
        let product = Product {
            id: 1,
            title: "Digital Marketing Course".to_string(),
            price: "$97.00".to_string(),
            affiliate_link: "https://clickbank.com/xxxxx".to_string(),
            image: None,
            commission: "50%".to_string(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("image").is_none());
        assert_eq!(json["title"], "Digital Marketing Course");
        assert_eq!(json["commission"], "50%");
    }
}

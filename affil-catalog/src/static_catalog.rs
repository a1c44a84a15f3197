use rand::Rng;

use crate::product::Product;

/// Fixed in-memory product list, built once at startup and shared read-only
/// across requests.
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Builds a catalog from an arbitrary product list. The list must be
    /// non-empty so `pick_random` always has something to return.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { products })
    }

    /// The built-in Amazon mock list.
    pub fn amazon() -> Self {
        Self {
            products: vec![
                Product {
                    id: 1,
                    title: "Smart Watch Fitness Tracker".to_string(),
                    price: "$49.99".to_string(),
                    affiliate_link: "https://amzn.to/xxxxx".to_string(),
                    image: Some("https://example.com/smartwatch.jpg".to_string()),
                    commission: "8%".to_string(),
                },
                Product {
                    id: 2,
                    title: "Wireless Bluetooth Earbuds".to_string(),
                    price: "$34.99".to_string(),
                    affiliate_link: "https://amzn.to/yyyyy".to_string(),
                    image: Some("https://example.com/earbuds.jpg".to_string()),
                    commission: "10%".to_string(),
                },
                Product {
                    id: 3,
                    title: "Portable Phone Charger".to_string(),
                    price: "$24.99".to_string(),
                    affiliate_link: "https://amzn.to/zzzzz".to_string(),
                    image: Some("https://example.com/charger.jpg".to_string()),
                    commission: "12%".to_string(),
                },
            ],
        }
    }

    /// The built-in ClickBank mock list, used when the marketplace adapter
    /// runs without a live upstream.
    pub fn clickbank() -> Self {
        Self {
            products: vec![
                Product {
                    id: 1,
                    title: "Digital Marketing Course".to_string(),
                    price: "$97.00".to_string(),
                    affiliate_link: "https://clickbank.com/xxxxx".to_string(),
                    image: None,
                    commission: "50%".to_string(),
                },
                Product {
                    id: 2,
                    title: "Weight Loss Program".to_string(),
                    price: "$47.00".to_string(),
                    affiliate_link: "https://clickbank.com/yyyyy".to_string(),
                    image: None,
                    commission: "75%".to_string(),
                },
            ],
        }
    }

    /// Full ordered product list.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// One product chosen uniformly at random.
    pub fn pick_random(&self) -> Result<&Product, CatalogError> {
        if self.products.is_empty() {
            return Err(CatalogError::Empty);
        }
        let idx = rand::thread_rng().gen_range(0..self.products.len());
        Ok(&self.products[idx])
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog is empty: no products configured")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_list() {
        assert!(matches!(
            StaticCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_amazon_catalog_has_three_complete_products() {
        let catalog = StaticCatalog::amazon();
        let products = catalog.list_all();

        assert_eq!(products.len(), 3);
        assert_eq!(catalog.len(), products.len());
        for product in products {
            assert!(!product.title.is_empty());
            assert!(!product.price.is_empty());
            assert!(!product.affiliate_link.is_empty());
        }
    }

    #[test]
    fn test_pick_random_returns_member_of_catalog() {
        let catalog = StaticCatalog::amazon();
        let ids: Vec<u32> = catalog.list_all().iter().map(|p| p.id).collect();

        for _ in 0..50 {
            let picked = catalog.pick_random().unwrap();
            assert!(ids.contains(&picked.id));
        }
    }

    #[test]
    fn test_clickbank_catalog_entries_have_no_image() {
        let catalog = StaticCatalog::clickbank();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.list_all().iter().all(|p| p.image.is_none()));
    }
}

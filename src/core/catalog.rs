use crate::core::{Product, RecordFetcher, Result};
use std::sync::Arc;

// Presentation component for a product listing. It depends on the
// fetch capability only through its contract; the concrete fetcher is
// injected at construction and never named here.
pub struct CatalogScreen {
    fetcher: Arc<dyn RecordFetcher<Record = Product>>,
    user_id: String,
    products: Vec<Product>,
}

impl CatalogScreen {
    pub fn new(
        fetcher: Arc<dyn RecordFetcher<Record = Product>>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            user_id: user_id.into(),
            products: Vec::new(),
        }
    }

    // Replaces the displayed products on success; a failed refresh
    // leaves the previous listing untouched.
    pub async fn refresh(&mut self) -> Result<()> {
        let products = self.fetcher.fetch(&self.user_id).await?;
        tracing::info!(count = products.len(), "catalog refreshed");
        self.products = products;
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::KitError;

    struct CannedFetcher {
        products: Vec<Product>,
    }

    #[async_trait::async_trait]
    impl RecordFetcher for CannedFetcher {
        type Record = Product;

        async fn fetch(&self, _user_id: &str) -> Result<Vec<Product>> {
            Ok(self.products.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait::async_trait]
    impl RecordFetcher for FailingFetcher {
        type Record = Product;

        async fn fetch(&self, _user_id: &str) -> Result<Vec<Product>> {
            Err(KitError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![Product {
            name: "Keyboard".to_string(),
            cost: 4500,
            image: Vec::new(),
        }]
    }

    #[tokio::test]
    async fn test_refresh_loads_products_through_the_contract() {
        let fetcher = Arc::new(CannedFetcher {
            products: sample_products(),
        });
        let mut screen = CatalogScreen::new(fetcher, "user-1");

        assert!(screen.products().is_empty());
        screen.refresh().await.unwrap();

        assert_eq!(screen.products().len(), 1);
        assert_eq!(screen.products()[0].name, "Keyboard");
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_listing() {
        let fetcher = Arc::new(CannedFetcher {
            products: sample_products(),
        });
        let mut screen = CatalogScreen::new(fetcher, "user-1");
        screen.refresh().await.unwrap();

        screen.fetcher = Arc::new(FailingFetcher);
        assert!(screen.refresh().await.is_err());
        assert_eq!(screen.products().len(), 1);
    }
}

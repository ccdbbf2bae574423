//! Tests for catalog view assembly and the administrative write path.

#[cfg(test)]
mod tests {
    use crate::catalog::{
        CartLine, CatalogRepositoryTrait, CatalogService, CatalogServiceTrait, Category,
        Collection, MainCategory, NewProduct, Portfolio, Product, ProductFilter, ProductQuery,
        Review, Store,
    };
    use crate::errors::{DatabaseError, Error, Result, ValidationError};
    use crate::fx::CurrencyServiceTrait;
    use crate::localization::{Language, LocalizedText};
    use async_trait::async_trait;
    use furniglass_translation::{TranslationError, TranslatorTrait};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock CatalogRepository ---
    #[derive(Default)]
    struct MockCatalogRepository {
        products: Vec<Product>,
        categories: Vec<Category>,
        portfolios: Vec<Portfolio>,
        stores: Vec<Store>,
        last_query: Mutex<Option<ProductQuery>>,
        inserted: Mutex<Vec<Product>>,
        updated: Mutex<Vec<Product>>,
    }

    #[async_trait]
    impl CatalogRepositoryTrait for MockCatalogRepository {
        fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
            *self.last_query.lock().unwrap() = Some(query.clone());
            Ok(self.products.clone())
        }

        fn get_product(&self, product_id: &str) -> Result<Option<Product>> {
            Ok(self.products.iter().find(|p| p.id == product_id).cloned())
        }

        fn search_products(&self, _term: &str, limit: usize) -> Result<Vec<Product>> {
            Ok(self.products.iter().take(limit).cloned().collect())
        }

        fn search_categories(&self, _term: &str, limit: usize) -> Result<Vec<Category>> {
            Ok(self.categories.iter().take(limit).cloned().collect())
        }

        fn search_portfolios(&self, _term: &str, limit: usize) -> Result<Vec<Portfolio>> {
            Ok(self.portfolios.iter().take(limit).cloned().collect())
        }

        fn list_main_categories(&self) -> Result<Vec<MainCategory>> {
            Ok(Vec::new())
        }

        fn list_categories(&self) -> Result<Vec<Category>> {
            Ok(self.categories.clone())
        }

        fn list_collections(&self) -> Result<Vec<Collection>> {
            Ok(Vec::new())
        }

        fn list_portfolios(&self) -> Result<Vec<Portfolio>> {
            Ok(self.portfolios.clone())
        }

        fn list_reviews(&self) -> Result<Vec<Review>> {
            Ok(Vec::new())
        }

        fn list_stores(&self) -> Result<Vec<Store>> {
            Ok(self.stores.clone())
        }

        fn list_articles(&self) -> Result<Vec<crate::catalog::Article>> {
            Ok(Vec::new())
        }

        async fn insert_product(&self, product: Product) -> Result<Product> {
            self.inserted.lock().unwrap().push(product.clone());
            Ok(product)
        }

        async fn update_product(&self, product: Product) -> Result<Product> {
            self.updated.lock().unwrap().push(product.clone());
            Ok(product)
        }
    }

    // --- Mock CurrencyService ---
    struct MockCurrencyService {
        rate: Decimal,
    }

    #[async_trait]
    impl CurrencyServiceTrait for MockCurrencyService {
        async fn current_rate(&self) -> Result<Decimal> {
            Ok(self.rate)
        }

        async fn set_rate(&self, _input: &str) -> Result<crate::fx::ExchangeRate> {
            unimplemented!()
        }

        async fn to_display(&self, reference_price: Decimal) -> Result<Decimal> {
            Ok(reference_price * self.rate)
        }

        async fn to_reference(&self, display_price: Decimal) -> Result<Decimal> {
            Ok(display_price / self.rate)
        }
    }

    // --- Mock Translator ---
    struct MockTranslator {
        fail: bool,
    }

    #[async_trait]
    impl TranslatorTrait for MockTranslator {
        async fn translate(
            &self,
            text: &str,
            target_lang: &str,
        ) -> std::result::Result<String, TranslationError> {
            if self.fail {
                return Err(TranslationError::Request("connection refused".to_string()));
            }
            Ok(format!("{}-{}", text, target_lang))
        }
    }

    // ==================== Helper Functions ====================

    fn cluster(uz: &str, ru: Option<&str>, en: Option<&str>) -> LocalizedText {
        LocalizedText {
            base: Some(uz.to_string()),
            uz: Some(uz.to_string()),
            ru: ru.map(str::to_string),
            en: en.map(str::to_string),
        }
    }

    fn make_product(id: &str, name: LocalizedText, price: Decimal) -> Product {
        Product {
            id: id.to_string(),
            name,
            description: LocalizedText::default(),
            material: LocalizedText::default(),
            warranty: LocalizedText::default(),
            price,
            size: None,
            category_id: "cat-1".to_string(),
            is_bestseller: false,
            images: vec!["products/stol.webp".to_string()],
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn make_store(id: &str, address: LocalizedText) -> Store {
        Store {
            id: id.to_string(),
            name: cluster("Furni Glass Chilonzor", None, None),
            address,
            working_hours: cluster("09:00 - 20:00", None, None),
            phone: Some("+998 90 123 45 67".to_string()),
            email: None,
            latitude: Some(41.28),
            longitude: Some(69.2),
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn new_product(name_uz: &str, price: Decimal) -> NewProduct {
        NewProduct {
            name_uz: name_uz.to_string(),
            description_uz: None,
            material_uz: None,
            warranty_uz: None,
            price,
            size: None,
            category_id: "cat-1".to_string(),
            is_bestseller: false,
            images: Vec::new(),
        }
    }

    fn service(
        repository: Arc<MockCatalogRepository>,
        rate: Decimal,
        translator_fails: bool,
    ) -> CatalogService {
        CatalogService::new(
            repository,
            Arc::new(MockCurrencyService { rate }),
            Arc::new(MockTranslator {
                fail: translator_fails,
            }),
        )
    }

    // ==================== Listing Tests ====================

    #[tokio::test]
    async fn test_filter_bounds_converted_to_reference_currency() {
        let repository = Arc::new(MockCatalogRepository::default());
        let service = service(repository.clone(), dec!(12000), false);

        let filter = ProductFilter {
            min_price: Some(dec!(600_000)),
            max_price: Some(dec!(1_200_000)),
            ..Default::default()
        };
        service.list_products(&filter, Language::Uz).await.unwrap();

        let query = repository.last_query.lock().unwrap().clone().unwrap();
        assert_eq!(query.min_price, Some(dec!(50)));
        assert_eq!(query.max_price, Some(dec!(100)));
    }

    #[tokio::test]
    async fn test_listing_localizes_and_converts_price() {
        let repository = Arc::new(MockCatalogRepository {
            products: vec![make_product(
                "p-1",
                cluster("Stol", Some("Стол"), None),
                dec!(150),
            )],
            ..Default::default()
        });
        let service = service(repository, dec!(12000), false);

        let views = service
            .list_products(&ProductFilter::default(), Language::Ru)
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, "Стол");
        assert_eq!(views[0].price, dec!(1_800_000));
    }

    #[tokio::test]
    async fn test_listing_price_is_not_rounded() {
        let repository = Arc::new(MockCatalogRepository {
            products: vec![make_product("p-1", cluster("Stol", None, None), dec!(150.5))],
            ..Default::default()
        });
        let service = service(repository, dec!(11999), false);

        let views = service
            .list_products(&ProductFilter::default(), Language::Uz)
            .await
            .unwrap();

        assert_eq!(views[0].price, dec!(1_805_849.5));
    }

    #[tokio::test]
    async fn test_get_product_absent_is_none() {
        let repository = Arc::new(MockCatalogRepository::default());
        let service = service(repository, dec!(12000), false);

        assert!(service
            .get_product("missing", Language::Uz)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_store_listing_resolves_per_language() {
        let repository = Arc::new(MockCatalogRepository {
            stores: vec![make_store(
                "s-1",
                cluster("Chilonzor 5", Some("Чиланзар 5"), None),
            )],
            ..Default::default()
        });
        let service = service(repository, dec!(12000), false);

        let ru = service.list_stores(Language::Ru).unwrap();
        assert_eq!(ru[0].address, "Чиланзар 5");

        // No English variant: falls back to the Uzbek source.
        let en = service.list_stores(Language::En).unwrap();
        assert_eq!(en[0].address, "Chilonzor 5");
    }

    // ==================== Search Tests ====================

    #[tokio::test]
    async fn test_search_rounds_to_whole_display_units() {
        let repository = Arc::new(MockCatalogRepository {
            products: vec![make_product(
                "p-1",
                cluster("Stol", None, None),
                dec!(150.0004),
            )],
            ..Default::default()
        });
        let service = service(repository, dec!(12000), false);

        let results = service.search("stol", Language::Uz).await.unwrap();

        // 150.0004 * 12000 = 1 800 004.8 -> 1 800 005
        assert_eq!(results.products[0].price, Some(1_800_005));
    }

    #[tokio::test]
    async fn test_search_short_term_returns_empty() {
        let repository = Arc::new(MockCatalogRepository {
            products: vec![make_product("p-1", cluster("Stol", None, None), dec!(150))],
            ..Default::default()
        });
        let service = service(repository, dec!(12000), false);

        let results = service.search(" s ", Language::Uz).await.unwrap();

        assert!(results.products.is_empty());
        assert!(results.categories.is_empty());
        assert!(results.portfolios.is_empty());
    }

    // ==================== Cart Tests ====================

    #[tokio::test]
    async fn test_cart_total_prices_in_display_currency() {
        let repository = Arc::new(MockCatalogRepository {
            products: vec![
                make_product("p-1", cluster("Stol", None, None), dec!(150)),
                make_product("p-2", cluster("Stul", None, None), dec!(40)),
            ],
            ..Default::default()
        });
        let service = service(repository, dec!(12000), false);

        let lines = vec![
            CartLine {
                product_id: "p-1".to_string(),
                quantity: 2,
            },
            CartLine {
                product_id: "p-2".to_string(),
                quantity: 1,
            },
        ];
        let quote = service.cart_total(&lines, Language::Uz).await.unwrap();

        assert_eq!(quote.lines.len(), 2);
        assert_eq!(quote.lines[0].subtotal, dec!(3_600_000));
        assert_eq!(quote.total, dec!(4_080_000));
    }

    #[tokio::test]
    async fn test_cart_total_drops_missing_products() {
        let repository = Arc::new(MockCatalogRepository {
            products: vec![make_product("p-1", cluster("Stol", None, None), dec!(150))],
            ..Default::default()
        });
        let service = service(repository, dec!(12000), false);

        let lines = vec![
            CartLine {
                product_id: "p-1".to_string(),
                quantity: 1,
            },
            CartLine {
                product_id: "deleted".to_string(),
                quantity: 3,
            },
        ];
        let quote = service.cart_total(&lines, Language::Uz).await.unwrap();

        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.total, dec!(1_800_000));
    }

    // ==================== Admin Write Path Tests ====================

    #[tokio::test]
    async fn test_create_product_derives_translations() {
        let repository = Arc::new(MockCatalogRepository::default());
        let service = service(repository.clone(), dec!(12000), false);

        let mut input = new_product("Stol", dec!(150));
        input.description_uz = Some("Yog'och stol".to_string());
        service.create_product(input).await.unwrap();

        let inserted = repository.inserted.lock().unwrap();
        let product = &inserted[0];
        assert_eq!(product.name.uz.as_deref(), Some("Stol"));
        assert_eq!(product.name.base.as_deref(), Some("Stol"));
        assert_eq!(product.name.ru.as_deref(), Some("Stol-ru"));
        assert_eq!(product.name.en.as_deref(), Some("Stol-en"));
        assert_eq!(product.description.ru.as_deref(), Some("Yog'och stol-ru"));
        // No material supplied: the whole cluster stays empty.
        assert_eq!(product.material, LocalizedText::default());
    }

    #[tokio::test]
    async fn test_create_product_survives_translator_failure() {
        let repository = Arc::new(MockCatalogRepository::default());
        let service = service(repository.clone(), dec!(12000), true);

        service
            .create_product(new_product("Stol", dec!(150)))
            .await
            .unwrap();

        let inserted = repository.inserted.lock().unwrap();
        let product = &inserted[0];
        assert_eq!(product.name.uz.as_deref(), Some("Stol"));
        assert_eq!(product.name.ru, None);
        assert_eq!(product.name.en, None);
    }

    #[tokio::test]
    async fn test_create_product_requires_uzbek_name() {
        let repository = Arc::new(MockCatalogRepository::default());
        let service = service(repository.clone(), dec!(12000), false);

        let result = service.create_product(new_product("   ", dec!(150))).await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
        assert!(repository.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_product_rejects_negative_price() {
        let repository = Arc::new(MockCatalogRepository::default());
        let service = service(repository, dec!(12000), false);

        let result = service.create_product(new_product("Stol", dec!(-1))).await;

        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let repository = Arc::new(MockCatalogRepository::default());
        let service = service(repository, dec!(12000), false);

        let result = service
            .update_product("missing", new_product("Stol", dec!(150)))
            .await;

        assert!(matches!(
            result,
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_identity_and_creation_time() {
        let existing = make_product("p-1", cluster("Stol", Some("Стол"), None), dec!(150));
        let created_at = existing.created_at;
        let repository = Arc::new(MockCatalogRepository {
            products: vec![existing],
            ..Default::default()
        });
        let service = service(repository.clone(), dec!(12000), false);

        service
            .update_product("p-1", new_product("Yangi stol", dec!(175)))
            .await
            .unwrap();

        let updated = repository.updated.lock().unwrap();
        assert_eq!(updated[0].id, "p-1");
        assert_eq!(updated[0].created_at, created_at);
        assert_eq!(updated[0].name.uz.as_deref(), Some("Yangi stol"));
        assert_eq!(updated[0].price, dec!(175));
    }
}

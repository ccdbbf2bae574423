use super::catalog_model::*;
use crate::errors::Result;
use crate::localization::Language;
use async_trait::async_trait;

/// Trait defining the contract for catalog storage operations.
///
/// Queries take reference-currency bounds; converting user input happens
/// before a [`ProductQuery`] is built, never inside the store.
#[async_trait]
pub trait CatalogRepositoryTrait: Send + Sync {
    fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>>;
    fn get_product(&self, product_id: &str) -> Result<Option<Product>>;

    fn search_products(&self, term: &str, limit: usize) -> Result<Vec<Product>>;
    fn search_categories(&self, term: &str, limit: usize) -> Result<Vec<Category>>;
    fn search_portfolios(&self, term: &str, limit: usize) -> Result<Vec<Portfolio>>;

    fn list_main_categories(&self) -> Result<Vec<MainCategory>>;
    fn list_categories(&self) -> Result<Vec<Category>>;
    fn list_collections(&self) -> Result<Vec<Collection>>;
    fn list_portfolios(&self) -> Result<Vec<Portfolio>>;
    fn list_reviews(&self) -> Result<Vec<Review>>;
    fn list_stores(&self) -> Result<Vec<Store>>;
    fn list_articles(&self) -> Result<Vec<Article>>;

    async fn insert_product(&self, product: Product) -> Result<Product>;
    async fn update_product(&self, product: Product) -> Result<Product>;
}

/// Trait defining the contract for catalog read-side assembly and the
/// administrative write path.
#[async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    async fn list_products(
        &self,
        filter: &ProductFilter,
        language: Language,
    ) -> Result<Vec<ProductView>>;
    async fn get_product(&self, product_id: &str, language: Language)
        -> Result<Option<ProductView>>;
    async fn search(&self, term: &str, language: Language) -> Result<SearchResults>;
    async fn cart_total(&self, lines: &[CartLine], language: Language) -> Result<CartQuote>;

    fn list_main_categories(&self, language: Language) -> Result<Vec<MainCategoryView>>;
    fn list_categories(&self, language: Language) -> Result<Vec<CategoryView>>;
    fn list_collections(&self, language: Language) -> Result<Vec<CollectionView>>;
    fn list_portfolios(&self, language: Language) -> Result<Vec<PortfolioView>>;
    fn list_reviews(&self, language: Language) -> Result<Vec<ReviewView>>;
    fn list_stores(&self, language: Language) -> Result<Vec<StoreView>>;
    fn list_articles(&self, language: Language) -> Result<Vec<ArticleView>>;

    async fn create_product(&self, new_product: NewProduct) -> Result<Product>;
    async fn update_product(&self, product_id: &str, update: NewProduct) -> Result<Product>;
}

use super::catalog_model::*;
use super::catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
use crate::constants::{
    SEARCH_CATEGORY_LIMIT, SEARCH_MIN_TERM_LEN, SEARCH_PORTFOLIO_LIMIT, SEARCH_PRODUCT_LIMIT,
};
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::fx::CurrencyServiceTrait;
use crate::localization::{resolve_text, Language, LocalizedText, TextAttribute};
use async_trait::async_trait;
use furniglass_translation::TranslatorTrait;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Assembles language- and currency-correct catalog views and runs the
/// administrative write path.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn CatalogRepositoryTrait>,
    currency: Arc<dyn CurrencyServiceTrait>,
    translator: Arc<dyn TranslatorTrait>,
}

impl CatalogService {
    pub fn new(
        repository: Arc<dyn CatalogRepositoryTrait>,
        currency: Arc<dyn CurrencyServiceTrait>,
        translator: Arc<dyn TranslatorTrait>,
    ) -> Self {
        Self {
            repository,
            currency,
            translator,
        }
    }

    /// Best-effort machine translation. A failure is logged and treated as
    /// "no translation"; it never surfaces to the save path.
    async fn translate_or_skip(&self, text: &str, target_lang: &str) -> Option<String> {
        match self.translator.translate(text, target_lang).await {
            Ok(translated) => Some(translated),
            Err(e) => {
                log::warn!("Auto-translation to '{}' failed: {}. Skipping.", target_lang, e);
                None
            }
        }
    }

    /// Builds a full attribute cluster from operator-supplied Uzbek text.
    /// The legacy base field is kept in sync with the Uzbek variant.
    async fn localize_cluster(&self, source: Option<String>) -> LocalizedText {
        match source {
            Some(text) if !text.trim().is_empty() => {
                let ru = self.translate_or_skip(&text, Language::Ru.code()).await;
                let en = self.translate_or_skip(&text, Language::En.code()).await;
                LocalizedText {
                    base: Some(text.clone()),
                    uz: Some(text),
                    ru,
                    en,
                }
            }
            _ => LocalizedText::default(),
        }
    }

    fn validate(new_product: &NewProduct) -> Result<()> {
        if new_product.name_uz.trim().is_empty() {
            return Err(ValidationError::MissingField("name_uz".to_string()).into());
        }
        if new_product.price < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Product price must not be negative, got {}",
                new_product.price
            ))
            .into());
        }
        Ok(())
    }

    async fn build_product(
        &self,
        id: String,
        created_at: chrono::NaiveDateTime,
        new_product: NewProduct,
    ) -> Product {
        Product {
            id,
            name: self.localize_cluster(Some(new_product.name_uz)).await,
            description: self.localize_cluster(new_product.description_uz).await,
            material: self.localize_cluster(new_product.material_uz).await,
            warranty: self.localize_cluster(new_product.warranty_uz).await,
            price: new_product.price,
            size: new_product.size,
            category_id: new_product.category_id,
            is_bestseller: new_product.is_bestseller,
            images: new_product.images,
            created_at,
        }
    }

    /// Converts the visitor-entered display-currency bounds into the
    /// reference-currency query the store executes.
    async fn build_query(&self, filter: &ProductFilter) -> Result<ProductQuery> {
        let min_price = match filter.min_price {
            Some(bound) => Some(self.currency.to_reference(bound).await?),
            None => None,
        };
        let max_price = match filter.max_price {
            Some(bound) => Some(self.currency.to_reference(bound).await?),
            None => None,
        };

        Ok(ProductQuery {
            category_id: filter.category_id.clone(),
            min_price,
            max_price,
            material: filter.material.clone(),
            size: filter.size.clone(),
            search: filter.search.clone(),
        })
    }
}

fn product_view(product: &Product, language: Language, rate: Decimal) -> ProductView {
    ProductView {
        id: product.id.clone(),
        name: resolve_text(product, TextAttribute::Name, language),
        description: resolve_text(product, TextAttribute::Description, language),
        material: resolve_text(product, TextAttribute::Material, language),
        warranty: resolve_text(product, TextAttribute::Warranty, language),
        price: product.price * rate,
        size: product.size.clone(),
        category_id: product.category_id.clone(),
        is_bestseller: product.is_bestseller,
        images: product.images.clone(),
    }
}

#[async_trait]
impl CatalogServiceTrait for CatalogService {
    async fn list_products(
        &self,
        filter: &ProductFilter,
        language: Language,
    ) -> Result<Vec<ProductView>> {
        let query = self.build_query(filter).await?;
        let products = self.repository.list_products(&query)?;

        // One rate read covers the whole result set so every price on the
        // page reflects the same moment.
        let rate = self.currency.current_rate().await?;
        Ok(products
            .iter()
            .map(|product| product_view(product, language, rate))
            .collect())
    }

    async fn get_product(
        &self,
        product_id: &str,
        language: Language,
    ) -> Result<Option<ProductView>> {
        match self.repository.get_product(product_id)? {
            Some(product) => {
                let rate = self.currency.current_rate().await?;
                Ok(Some(product_view(&product, language, rate)))
            }
            None => Ok(None),
        }
    }

    async fn search(&self, term: &str, language: Language) -> Result<SearchResults> {
        let term = term.trim();
        if term.chars().count() < SEARCH_MIN_TERM_LEN {
            return Ok(SearchResults::default());
        }

        let rate = self.currency.current_rate().await?;

        let products = self
            .repository
            .search_products(term, SEARCH_PRODUCT_LIMIT)?
            .iter()
            .map(|product| ProductHit {
                id: product.id.clone(),
                name: resolve_text(product, TextAttribute::Name, language),
                // Search is the one surface that rounds, to whole display
                // units.
                price: (product.price * rate).round().to_i64(),
                image: product.images.first().cloned(),
                category_id: product.category_id.clone(),
            })
            .collect();

        let categories = self
            .repository
            .search_categories(term, SEARCH_CATEGORY_LIMIT)?
            .iter()
            .map(|category| CategoryHit {
                id: category.id.clone(),
                name: resolve_text(category, TextAttribute::Name, language),
                image: category.image.clone(),
            })
            .collect();

        let portfolios = self
            .repository
            .search_portfolios(term, SEARCH_PORTFOLIO_LIMIT)?
            .iter()
            .map(|portfolio| PortfolioHit {
                id: portfolio.id.clone(),
                title: resolve_text(portfolio, TextAttribute::Title, language),
                image: portfolio.after_image.clone(),
            })
            .collect();

        Ok(SearchResults {
            products,
            categories,
            portfolios,
        })
    }

    async fn cart_total(&self, lines: &[CartLine], language: Language) -> Result<CartQuote> {
        let rate = self.currency.current_rate().await?;

        let mut quote = CartQuote::default();
        for line in lines {
            let Some(product) = self.repository.get_product(&line.product_id)? else {
                log::debug!("Cart line for missing product {}, dropping", line.product_id);
                continue;
            };

            let unit_price = product.price * rate;
            let subtotal = unit_price * Decimal::from(line.quantity);
            quote.total += subtotal;
            quote.lines.push(CartQuoteLine {
                product_id: product.id.clone(),
                name: resolve_text(&product, TextAttribute::Name, language),
                unit_price,
                quantity: line.quantity,
                subtotal,
            });
        }

        Ok(quote)
    }

    fn list_main_categories(&self, language: Language) -> Result<Vec<MainCategoryView>> {
        Ok(self
            .repository
            .list_main_categories()?
            .iter()
            .map(|main_category| MainCategoryView {
                id: main_category.id.clone(),
                name: resolve_text(main_category, TextAttribute::Name, language),
                description: resolve_text(main_category, TextAttribute::Description, language),
                slug: main_category.slug.clone(),
                icon: main_category.icon.clone(),
            })
            .collect())
    }

    fn list_categories(&self, language: Language) -> Result<Vec<CategoryView>> {
        Ok(self
            .repository
            .list_categories()?
            .iter()
            .map(|category| CategoryView {
                id: category.id.clone(),
                name: resolve_text(category, TextAttribute::Name, language),
                slug: category.slug.clone(),
                image: category.image.clone(),
            })
            .collect())
    }

    fn list_collections(&self, language: Language) -> Result<Vec<CollectionView>> {
        Ok(self
            .repository
            .list_collections()?
            .iter()
            .map(|collection| CollectionView {
                id: collection.id.clone(),
                name: resolve_text(collection, TextAttribute::Name, language),
                description: resolve_text(collection, TextAttribute::Description, language),
                slug: collection.slug.clone(),
                category_type: collection.category_type.clone(),
                image: collection.image.clone(),
            })
            .collect())
    }

    fn list_portfolios(&self, language: Language) -> Result<Vec<PortfolioView>> {
        Ok(self
            .repository
            .list_portfolios()?
            .iter()
            .map(|portfolio| PortfolioView {
                id: portfolio.id.clone(),
                title: resolve_text(portfolio, TextAttribute::Title, language),
                description: resolve_text(portfolio, TextAttribute::Description, language),
                room_type: portfolio.room_type.clone(),
                before_image: portfolio.before_image.clone(),
                after_image: portfolio.after_image.clone(),
            })
            .collect())
    }

    fn list_reviews(&self, language: Language) -> Result<Vec<ReviewView>> {
        Ok(self
            .repository
            .list_reviews()?
            .iter()
            .map(|review| ReviewView {
                id: review.id.clone(),
                reviewer_name: review.reviewer_name.clone(),
                text: resolve_text(review, TextAttribute::Text, language),
                rating: review.rating,
            })
            .collect())
    }

    fn list_stores(&self, language: Language) -> Result<Vec<StoreView>> {
        Ok(self
            .repository
            .list_stores()?
            .iter()
            .map(|store| StoreView {
                id: store.id.clone(),
                name: resolve_text(store, TextAttribute::Name, language),
                address: resolve_text(store, TextAttribute::Address, language),
                working_hours: resolve_text(store, TextAttribute::WorkingHours, language),
                phone: store.phone.clone(),
                email: store.email.clone(),
                latitude: store.latitude,
                longitude: store.longitude,
            })
            .collect())
    }

    fn list_articles(&self, language: Language) -> Result<Vec<ArticleView>> {
        Ok(self
            .repository
            .list_articles()?
            .iter()
            .map(|article| ArticleView {
                id: article.id.clone(),
                title: resolve_text(article, TextAttribute::Title, language),
                content: resolve_text(article, TextAttribute::Content, language),
                slug: article.slug.clone(),
                category: article.category.clone(),
                featured: article.featured,
            })
            .collect())
    }

    async fn create_product(&self, new_product: NewProduct) -> Result<Product> {
        Self::validate(&new_product)?;

        let product = self
            .build_product(
                Uuid::new_v4().to_string(),
                chrono::Utc::now().naive_utc(),
                new_product,
            )
            .await;

        self.repository.insert_product(product).await
    }

    async fn update_product(&self, product_id: &str, update: NewProduct) -> Result<Product> {
        Self::validate(&update)?;

        let existing = self.repository.get_product(product_id)?.ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!("Product {}", product_id)))
        })?;

        let product = self
            .build_product(existing.id, existing.created_at, update)
            .await;

        self.repository.update_product(product).await
    }
}

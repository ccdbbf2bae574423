//! Catalog module - translatable entities, storage traits, and the
//! read-side assembly of localized, currency-correct views.

mod catalog_model;
mod catalog_service;
mod catalog_traits;

#[cfg(test)]
mod catalog_service_tests;

pub use catalog_model::{
    Article, ArticleView, CartLine, CartQuote, CartQuoteLine, Category, CategoryHit, CategoryView,
    Collection, CollectionView, MainCategory, MainCategoryView, NewProduct, Portfolio,
    PortfolioHit, PortfolioView, Product, ProductFilter, ProductHit, ProductQuery, ProductView,
    Review, ReviewView, SearchResults, Store, StoreView,
};
pub use catalog_service::CatalogService;
pub use catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};

use crate::localization::{Localized, LocalizedText, TextAttribute};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==================== Translatable entities ====================

/// Top-level storefront section (Cafe & Restaurant, Home, Clinic, ...).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MainCategory {
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub slug: String,
    pub icon: Option<String>,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
}

impl Localized for MainCategory {
    fn localized_field(&self, attribute: TextAttribute) -> Option<&LocalizedText> {
        match attribute {
            TextAttribute::Name => Some(&self.name),
            TextAttribute::Description => Some(&self.description),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: LocalizedText,
    pub slug: String,
    pub image: Option<String>,
    pub main_category_id: Option<String>,
}

impl Localized for Category {
    fn localized_field(&self, attribute: TextAttribute) -> Option<&LocalizedText> {
        match attribute {
            TextAttribute::Name => Some(&self.name),
            _ => None,
        }
    }
}

/// Catalog product. The price is persisted in the reference currency;
/// display prices are always derived at read time.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub material: LocalizedText,
    pub warranty: LocalizedText,
    pub price: Decimal,
    pub size: Option<String>,
    pub category_id: String,
    pub is_bestseller: bool,
    pub images: Vec<String>,
    pub created_at: NaiveDateTime,
}

impl Localized for Product {
    fn localized_field(&self, attribute: TextAttribute) -> Option<&LocalizedText> {
        match attribute {
            TextAttribute::Name => Some(&self.name),
            TextAttribute::Description => Some(&self.description),
            TextAttribute::Material => Some(&self.material),
            TextAttribute::Warranty => Some(&self.warranty),
            _ => None,
        }
    }
}

/// Themed product collection (sofa collections, table collections, ...).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub slug: String,
    pub category_type: Option<String>,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Localized for Collection {
    fn localized_field(&self, attribute: TextAttribute) -> Option<&LocalizedText> {
        match attribute {
            TextAttribute::Name => Some(&self.name),
            TextAttribute::Description => Some(&self.description),
            _ => None,
        }
    }
}

/// Completed interior project with before/after shots.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub room_type: Option<String>,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Localized for Portfolio {
    fn localized_field(&self, attribute: TextAttribute) -> Option<&LocalizedText> {
        match attribute {
            TextAttribute::Title => Some(&self.title),
            TextAttribute::Description => Some(&self.description),
            _ => None,
        }
    }
}

/// Customer testimonial. The reviewer's name is not translatable.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub reviewer_name: String,
    pub text: LocalizedText,
    pub rating: i32,
    pub main_category_id: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Localized for Review {
    fn localized_field(&self, attribute: TextAttribute) -> Option<&LocalizedText> {
        match attribute {
            TextAttribute::Text => Some(&self.text),
            _ => None,
        }
    }
}

/// Physical store location.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: LocalizedText,
    pub address: LocalizedText,
    pub working_hours: LocalizedText,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: NaiveDateTime,
}

impl Localized for Store {
    fn localized_field(&self, attribute: TextAttribute) -> Option<&LocalizedText> {
        match attribute {
            TextAttribute::Name => Some(&self.name),
            TextAttribute::Address => Some(&self.address),
            TextAttribute::WorkingHours => Some(&self.working_hours),
            _ => None,
        }
    }
}

/// Inspiration article (trends, tips, ...).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub slug: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub featured: bool,
    pub created_at: NaiveDateTime,
}

impl Localized for Article {
    fn localized_field(&self, attribute: TextAttribute) -> Option<&LocalizedText> {
        match attribute {
            TextAttribute::Title => Some(&self.title),
            TextAttribute::Content => Some(&self.content),
            _ => None,
        }
    }
}

// ==================== Administrative input ====================

/// Operator input for creating or replacing a product. Text arrives in
/// Uzbek only; the other language variants are derived best-effort at save
/// time.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name_uz: String,
    pub description_uz: Option<String>,
    pub material_uz: Option<String>,
    pub warranty_uz: Option<String>,
    pub price: Decimal,
    pub size: Option<String>,
    pub category_id: String,
    pub is_bestseller: bool,
    pub images: Vec<String>,
}

// ==================== Catalog browsing ====================

/// Request-side product filter. Price bounds arrive in display currency,
/// exactly as the visitor typed them.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub category_id: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub material: Option<String>,
    pub size: Option<String>,
    pub search: Option<String>,
}

/// Storage-side product query. Price bounds are in the reference currency
/// the store persists, converted before the query is constructed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub category_id: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub material: Option<String>,
    pub size: Option<String>,
    pub search: Option<String>,
}

// ==================== View models ====================

/// Language- and currency-correct product projection handed to
/// presentation. The price is in display currency, unrounded.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub material: String,
    pub warranty: String,
    pub price: Decimal,
    pub size: Option<String>,
    pub category_id: String,
    pub is_bestseller: bool,
    pub images: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MainCategoryView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CollectionView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub category_type: Option<String>,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub room_type: Option<String>,
    pub before_image: Option<String>,
    pub after_image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub id: String,
    pub reviewer_name: String,
    pub text: String,
    pub rating: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StoreView {
    pub id: String,
    pub name: String,
    pub address: String,
    pub working_hours: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub category: Option<String>,
    pub featured: bool,
}

// ==================== Search ====================

/// Search hit for a product. The price is in display currency, rounded to
/// whole units; this is the one surface that rounds.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductHit {
    pub id: String,
    pub name: String,
    pub price: Option<i64>,
    pub image: Option<String>,
    pub category_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CategoryHit {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHit {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub products: Vec<ProductHit>,
    pub categories: Vec<CategoryHit>,
    pub portfolios: Vec<PortfolioHit>,
}

// ==================== Cart pricing ====================

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CartQuoteLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
}

/// Cart priced in display currency at the current rate. Lines whose
/// product no longer exists are dropped rather than failing the quote.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartQuote {
    pub lines: Vec<CartQuoteLine>,
    pub total: Decimal,
}

//! Localization module - language selection and translatable-field resolution.

mod localization_model;
pub mod messages;


pub use localization_model::{resolve_text, Language, Localized, LocalizedText, TextAttribute};
pub use messages::message;

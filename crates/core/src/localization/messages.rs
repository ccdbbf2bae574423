//! Static UI strings in the three storefront languages.

use super::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Per-key strings indexed `[uz, ru, en]`.
static MESSAGES: OnceLock<HashMap<&'static str, [&'static str; 3]>> = OnceLock::new();

fn get_messages() -> &'static HashMap<&'static str, [&'static str; 3]> {
    MESSAGES.get_or_init(|| {
        let mut map = HashMap::new();

        // Navigation
        map.insert("nav.home", ["Asosiy", "Главная", "Home"]);
        map.insert("nav.about", ["Biz haqimizda", "О нас", "About Us"]);
        map.insert("nav.products", ["Mahsulotlar", "Продукция", "Products"]);
        map.insert("nav.portfolio", ["Portfolio", "Портфолио", "Portfolio"]);
        map.insert("nav.contact", ["Aloqa", "Контакты", "Contact"]);
        map.insert("nav.cart", ["Savatcha", "Корзина", "Cart"]);
        map.insert("nav.search", ["Qidiruv", "Поиск", "Search"]);
        map.insert("nav.more", ["Ko'proq", "Ещё", "More"]);

        // Common
        map.insert("common.learn_more", ["Batafsil", "Подробнее", "Learn More"]);
        map.insert(
            "common.view_all",
            ["Barchasini ko'rish", "Смотреть все", "View All"],
        );
        map.insert(
            "common.order_now",
            ["Buyurtma berish", "Заказать", "Order Now"],
        );
        map.insert(
            "common.contact_us",
            ["Bog'lanish", "Связаться", "Contact Us"],
        );
        map.insert("common.all", ["Barchasi", "Все", "All"]);
        map.insert("common.price", ["Narx", "Цена", "Price"]);
        map.insert("common.sum", ["so'm", "сум", "sum"]);
        map.insert("common.send", ["Yuborish", "Отправить", "Send"]);
        map.insert("common.phone", ["Telefon", "Телефон", "Phone"]);
        map.insert("common.address", ["Manzil", "Адрес", "Address"]);
        map.insert(
            "common.working_hours",
            ["Ish vaqti", "Часы работы", "Working Hours"],
        );

        map
    })
}

/// Looks up a static UI string by dot-separated key.
///
/// Unknown keys are returned verbatim so a missing entry shows up on the
/// page instead of blanking it out.
pub fn message<'a>(key: &'a str, language: Language) -> &'a str {
    let index = match language {
        Language::Uz => 0,
        Language::Ru => 1,
        Language::En => 2,
    };

    match get_messages().get(key) {
        Some(entry) => entry[index],
        None => key,
    }
}

//! `sitetrust locales` – the language switcher.

use sitetrust_core::locale::Locale;

pub fn run_locales(active: Locale) {
    for locale in Locale::ALL {
        let marker = if locale == active { "*" } else { " " };
        println!("{marker} {:<8} {}", locale.code(), locale.label());
    }
}

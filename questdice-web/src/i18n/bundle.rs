use crate::i18n::locales::{is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let translations = load_translations(lang)?;
    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: "en".to_string(),
        translations: Value::Object(serde_json::Map::new()),
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> =
        RefCell::new(build_bundle("en").unwrap_or_else(empty_bundle));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Set the current language for internationalization
///
/// Unknown codes are ignored. In the browser the `<html lang>` attribute is
/// updated to match.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("ignoring unsupported locale {lang:?}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            with_bundle(|read| {
                let _ = el.set_attribute("lang", &read.lang);
            });
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

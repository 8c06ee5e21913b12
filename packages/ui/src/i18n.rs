use std::time::Duration;

use dioxus::prelude::*;

use crate::prefs::{use_preferences, Preferences, LANG_KEY};

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    Ru,
    Uz,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::Uz => "uz",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" => Some(Lang::Ru),
            "uz" | "uz-uz" => Some(Lang::Uz),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Lang::Ru => Lang::Uz,
            Lang::Uz => Lang::Ru,
        }
    }
}

/// One translatable string, both renditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub key: &'static str,
    pub ru: &'static str,
    pub uz: &'static str,
}

/// Static key → text table. A single table serves the whole app; adding a
/// key or a language variant is a data change here, nowhere else.
#[derive(Clone, PartialEq)]
pub struct Dictionary {
    entries: &'static [Entry],
}

impl Dictionary {
    pub fn new(entries: &'static [Entry]) -> Self {
        Self { entries }
    }

    /// The dashboard's shipped table.
    pub fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    /// Exact lookup; `None` leaves the caller's content untouched.
    pub fn get(&self, lang: Lang, key: &str) -> Option<&'static str> {
        let entry = self.entries.iter().find(|e| e.key == key)?;
        Some(match lang {
            Lang::Ru => entry.ru,
            Lang::Uz => entry.uz,
        })
    }

    /// Lookup with the display fallback chain: requested language, then
    /// Russian, then the key itself.
    pub fn resolve<'a>(&self, lang: Lang, key: &'a str) -> &'a str {
        self.get(lang, key)
            .or_else(|| self.get(Lang::Ru, key))
            .unwrap_or(key)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Provide `Signal<Lang>` and the dictionary to the component tree and
/// apply the stored preference (or `default_lang`) once after mount.
///
/// The default language is an explicit configuration value; pages that
/// ship with an Uzbek-first UI pass `default_lang: Lang::Uz`.
#[component]
pub fn I18nProvider(
    #[props(default)] default_lang: Lang,
    #[props(default)] dictionary: Dictionary,
    children: Element,
) -> Element {
    let prefs = use_preferences();
    let lang = use_signal(|| default_lang);
    use_context_provider(|| lang);
    use_context_provider(|| dictionary);

    use_effect(move || {
        let prefs = prefs.clone();
        spawn(async move {
            let saved = prefs.get(LANG_KEY).await;
            let resolved = saved
                .as_deref()
                .and_then(Lang::from_code)
                .unwrap_or(default_lang);
            apply(lang, &prefs, resolved).await;
        });
    });

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing I18nProvider context, using local Lang::Ru signal");
    use_signal(|| Lang::Ru)
}

pub fn set_lang(lang: Lang) {
    let sig = use_lang();
    let prefs = use_preferences();
    spawn(async move {
        apply(sig, &prefs, lang).await;
    });
}

/// Single apply point: signal, persisted value, and root attribute move
/// together so they can never disagree. Every `t` call site re-renders
/// from the new language on the signal write.
async fn apply(mut sig: Signal<Lang>, prefs: &Preferences, lang: Lang) {
    sig.set(lang);
    prefs.set(LANG_KEY, lang.code()).await;
    crate::dom::set_root_attr("data-lang", lang.code()).await;
}

/// Translate a key for a given language using the dictionary in context
/// (the builtin table when no provider is present).
pub fn t(lang: Lang, key: &str) -> String {
    let dict = try_use_context::<Dictionary>().unwrap_or_default();
    dict.resolve(lang, key).to_string()
}

/// `#langBtn`: flips between Russian and Uzbek with a short cosmetic
/// pulse on the control.
#[component]
pub fn LangToggle() -> Element {
    let lang_sig = use_lang();
    let lang = lang_sig();
    let mut pulsing = use_signal(|| false);

    rsx! {
        button {
            id: "langBtn",
            class: if pulsing() { "icon_btn lang_btn pulse" } else { "icon_btn lang_btn" },
            "aria-label": "Switch language",
            onclick: move |_| {
                set_lang(lang.toggle());
                pulsing.set(true);
                spawn(async move {
                    gloo_timers::future::sleep(Duration::from_millis(220)).await;
                    pulsing.set(false);
                });
            },
            {lang.code().to_ascii_uppercase()}
        }
    }
}

const BUILTIN: &[Entry] = &[
    // Shell / nav
    Entry { key: "brand", ru: "O‘ztemiryo‘lkonteyner AJ", uz: "O‘ztemiryo‘lkonteyner AJ" },
    Entry { key: "subtitle", ru: "Платформа контейнерных операций", uz: "Konteyner operatsiyalar platformasi" },
    Entry { key: "menu", ru: "Меню", uz: "Menyu" },
    Entry { key: "dash", ru: "Dashboard", uz: "Dashboard" },
    Entry { key: "r1", ru: "Отчёт 1", uz: "Hisobot 1" },
    Entry { key: "r2", ru: "Отчёт 2", uz: "Hisobot 2" },
    Entry { key: "q", ru: "Квартальный", uz: "Kvartalniy" },
    Entry { key: "branches", ru: "Филиалы", uz: "Filiallar" },
    Entry { key: "admin", ru: "Админ", uz: "ADMIN" },
    Entry { key: "user", ru: "FILIAL", uz: "FILIAL" },
    Entry { key: "account", ru: "Аккаунт", uz: "Hisob" },
    Entry { key: "logout", ru: "Выйти", uz: "Chiqish" },
    // Report table 1
    Entry { key: "t1_title", ru: "Таблица №1 — отчёты по датам", uz: "Hisobot №1 — sanalar bo‘yicha hisobotlar" },
    Entry { key: "t1_help", ru: "Нажмите на кнопку “Отправили X/Y”, чтобы увидеть кто отправил и кто нет.", uz: "“Jo‘natgan X/Y” tugmasini bosing — kim jo‘natgan, kim jo‘natmagan ko‘rasiz." },
    Entry { key: "col_no", ru: "№", uz: "№" },
    Entry { key: "col_date", ru: "Дата / Месяц / Год", uz: "Sana / Oy / Yil" },
    Entry { key: "col_status", ru: "Статус филиалов", uz: "Filiallar holati" },
    Entry { key: "col_last", ru: "Последняя отправка", uz: "Oxirgi jo‘natish" },
    Entry { key: "col_action", ru: "Действие", uz: "Amal" },
    Entry { key: "year", ru: "Год", uz: "Yil" },
    Entry { key: "month", ru: "Месяц", uz: "Oy" },
    Entry { key: "sent", ru: "Отправили", uz: "Jo‘natgan" },
    Entry { key: "not_sent", ru: "Не отправили", uz: "Jo‘natmagan" },
    Entry { key: "details", ru: "Подробнее", uz: "Batafsil" },
    Entry { key: "modal_title", ru: "Статус филиалов", uz: "Filiallar holati" },
    Entry { key: "none_sent", ru: "Никто не отправил", uz: "Hech kim jo‘natmagan" },
    Entry { key: "all_sent", ru: "Все отправили", uz: "Hamma jo‘natgan" },
    Entry { key: "view", ru: "Посмотреть", uz: "Ko‘rish" },
    Entry { key: "empty", ru: "Пока нет отчётов Таблицы 1.", uz: "Hali Jadval 1 bo‘yicha hisobot yo‘q." },
    // Pagination
    Entry { key: "page", ru: "Страница", uz: "Sahifa" },
    Entry { key: "total", ru: "Всего", uz: "Jami" },
    Entry { key: "prev", ru: "Назад", uz: "Oldingi" },
    Entry { key: "next", ru: "Вперёд", uz: "Keyingi" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        assert_eq!(Lang::from_code("ru"), Some(Lang::Ru));
        assert_eq!(Lang::from_code("uz"), Some(Lang::Uz));
        assert_eq!(Lang::from_code("UZ"), Some(Lang::Uz));
        assert_eq!(Lang::from_code("en"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Lang::Ru.toggle().toggle(), Lang::Ru);
        assert_eq!(Lang::Uz.toggle().toggle(), Lang::Uz);
    }

    #[test]
    fn lookup_returns_the_requested_language() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.get(Lang::Ru, "r1"), Some("Отчёт 1"));
        assert_eq!(dict.get(Lang::Uz, "r1"), Some("Hisobot 1"));
    }

    #[test]
    fn missing_key_is_none_so_callers_can_skip() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.get(Lang::Ru, "no.such.key"), None);
        assert_eq!(dict.get(Lang::Uz, "no.such.key"), None);
    }

    #[test]
    fn resolve_falls_back_to_the_key() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.resolve(Lang::Uz, "branches"), "Filiallar");
        assert_eq!(dict.resolve(Lang::Uz, "no.such.key"), "no.such.key");
    }

    #[test]
    fn custom_tables_are_injectable() {
        static SMALL: &[Entry] = &[Entry { key: "hello", ru: "Привет", uz: "Salom" }];
        let dict = Dictionary::new(SMALL);
        assert_eq!(dict.get(Lang::Uz, "hello"), Some("Salom"));
        assert_eq!(dict.get(Lang::Uz, "brand"), None);
    }
}

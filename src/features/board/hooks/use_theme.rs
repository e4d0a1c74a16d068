use leptos::prelude::*;
use crate::core::models::Theme;
use crate::core::services::{apply_theme, load_theme, save_theme};

pub struct ThemeHook {
    pub theme: ReadSignal<Theme>,
    pub toggle: Callback<()>,
}

pub fn use_theme(storage_key: String) -> ThemeHook {
    let initial = load_theme(&storage_key);
    apply_theme(initial);
    let (theme, set_theme) = signal(initial);

    let toggle = Callback::new(move |_: ()| {
        let next = theme.get_untracked().toggled();
        save_theme(&storage_key, next);
        apply_theme(next);
        set_theme.set(next);
    });

    ThemeHook { theme, toggle }
}

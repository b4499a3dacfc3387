use leptos::{either::Either, prelude::*};
use leptos_router::{components::*, hooks::use_location};
use leptos_use::{use_window_size, UseWindowSizeReturn};

use crate::nav::{is_active, NavEntry, Viewport, NAV_ENTRIES};

use super::Theme;

#[component]
pub fn Header(theme: Signal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let is_mobile = Memo::new(move |_| Viewport::from_width(width.get()).is_mobile());

    // leaving mobile layout closes the drawer
    Effect::watch(
        move || is_mobile.get(),
        move |mobile, _, _| {
            if !*mobile {
                set_menu_open.set(false);
            }
        },
        false,
    );

    let theme_toggle = move || {
        view! {
            <button
                class="px-3 py-2 rounded-md border border-muted/30 hover:bg-brightBlack/20 transition-colors duration-200"
                aria-label=move || match theme.get() {
                    Theme::Dark => "Switch to light mode",
                    Theme::Light => "Switch to dark mode",
                }
                on:click=move |_| set_theme.set(theme.get_untracked().toggled())
            >
                {move || match theme.get() {
                    Theme::Dark => "☀",
                    Theme::Light => "☾",
                }}
            </button>
        }
    };

    view! {
        <header class="sticky top-0 z-10 shadow-lg backdrop-blur-sm">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <A href="/" attr:class="text-2xl font-bold text-cyan">
                    "Peter Muturi"
                </A>
                {move || {
                    if is_mobile.get() {
                        Either::Left(
                            view! {
                                <div class="flex items-center gap-2">
                                    {theme_toggle()}
                                    <button
                                        class="px-3 py-2 rounded-md border border-muted/30"
                                        aria-label=move || {
                                            if menu_open.get() { "Close menu" } else { "Open menu" }
                                        }
                                        on:click=move |_| set_menu_open.update(|o| *o = !*o)
                                    >
                                        {move || if menu_open.get() { "✕" } else { "☰" }}
                                    </button>
                                </div>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <nav class="flex items-center gap-6">
                                    {NAV_ENTRIES
                                        .iter()
                                        .map(|entry| view! { <NavLink entry=*entry /> })
                                        .collect_view()}
                                    {theme_toggle()}
                                </nav>
                            },
                        )
                    }
                }}
            </div>
            {move || {
                (is_mobile.get() && menu_open.get())
                    .then(|| {
                        view! {
                            <nav
                                class="flex flex-col gap-4 px-6 pb-4"
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {NAV_ENTRIES
                                    .iter()
                                    .map(|entry| view! { <NavLink entry=*entry /> })
                                    .collect_view()}
                            </nav>
                        }
                    })
            }}
        </header>
    }
}

#[component]
fn NavLink(entry: NavEntry) -> impl IntoView {
    let pathname = use_location().pathname;
    let active = move || is_active(entry.path, &pathname.get());
    view! {
        <A
            href=entry.path
            attr:class=move || {
                if active() {
                    "font-medium text-cyan border-b-2 border-cyan"
                } else {
                    "font-medium hover:text-cyan transition-colors duration-200"
                }
            }
        >
            {entry.label}
        </A>
    }
}

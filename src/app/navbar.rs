use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{NAV_LINKS, OWNER_INITIALS};
use crate::theme::use_theme;

const SCROLLED_AFTER_PX: f64 = 50.0;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let is_dark = theme.is_dark();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y.get() > SCROLLED_AFTER_PX;

    view! {
        <nav class="navbar fixed top-0 inset-x-0 z-[999] py-4" class:scrolled=scrolled>
            <div class="container flex items-center justify-between">
                <a href="#hero" class="logo text-2xl font-bold font-mono">
                    {OWNER_INITIALS}
                </a>
                <div class="flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href() class="nav-link font-medium">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="nav-toggle text-xl"
                        aria-label="Toggle color theme"
                        on:click=move |_| theme.toggle()
                    >
                        {move || {
                            if is_dark.get() {
                                view! { <span class="spin-in" title="Light mode">"☀️"</span> }.into_any()
                            } else {
                                view! { <span class="spin-in" title="Dark mode">"🌙"</span> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
        </nav>
    }
}

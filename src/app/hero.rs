use std::time::Duration;

use leptos::{either::Either, prelude::*};

use super::motion::use_scroll_progress;
use crate::content::{
    SocialKind, SocialLink, HERO_DESCRIPTION, HERO_SUBTITLE, HERO_TITLE, SOCIAL_LINKS,
    TERMINAL_BUTTONS, TERMINAL_SNIPPET,
};
use crate::motion::TerminalPose;
use crate::typewriter::{Typewriter, TYPE_INTERVAL};

/// Reveals the next step of the text. Returns `true` once the timer should
/// stop: the text is complete, or the owning view has been disposed and the
/// writer is gone. A disposed writer leaves both signals untouched.
fn advance(
    writer: StoredValue<Typewriter>,
    set_typed: WriteSignal<String>,
    set_typing: WriteSignal<bool>,
) -> bool {
    let Some(step) = writer.try_update_value(|w| w.tick().map(str::to_owned)) else {
        return true;
    };
    if let Some(text) = step {
        let _ = set_typed.try_set(text);
    }
    if writer.try_with_value(Typewriter::is_typing) == Some(true) {
        return false;
    }
    let _ = set_typing.try_set(false);
    true
}

fn stop(handle: StoredValue<Option<IntervalHandle>>) {
    if let Some(Some(h)) = handle.try_get_value() {
        h.clear();
    }
}

fn teardown(writer: StoredValue<Typewriter>, handle: StoredValue<Option<IntervalHandle>>) {
    writer.try_update_value(Typewriter::cancel);
    stop(handle);
}

/// Types `source` out once per mount.
///
/// The interval handle has exactly one owner: it is cleared when the text is
/// complete or when the owning view is cleaned up, whichever comes first. A tick
/// that still arrives after disposal finds no stored state and does nothing.
pub fn use_typewriter(source: &'static str, interval: Duration) -> (Signal<String>, Signal<bool>) {
    let (typed, set_typed) = signal(String::new());
    let (typing, set_typing) = signal(!source.is_empty());
    let writer = StoredValue::new(Typewriter::new(source));
    let handle = StoredValue::new(None::<IntervalHandle>);

    Effect::watch(
        || (),
        move |_, _, _| {
            let started = set_interval_with_handle(
                move || {
                    if advance(writer, set_typed, set_typing) {
                        stop(handle);
                    }
                },
                interval,
            );
            match started {
                Ok(h) => handle.set_value(Some(h)),
                Err(e) => log::warn!("couldn't start typed text timer: {e:?}"),
            }
        },
        true,
    );

    on_cleanup(move || teardown(writer, handle));

    (typed.into(), typing.into())
}

fn social_icon(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::GitHub => "devicon-github-plain",
        SocialKind::LinkedIn => "devicon-linkedin-plain",
        SocialKind::Twitter => "devicon-twitter-original",
    }
}

#[component]
pub fn SocialLinks(
    links: &'static [SocialLink],
    #[prop(optional)] extra_class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex gap-4 {extra_class}")>
            {links
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="social-link text-2xl"
                            aria-label=link.label
                        >
                            <i class=social_icon(link.kind)></i>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let (typed, typing) = use_typewriter(TERMINAL_SNIPPET, TYPE_INTERVAL);
    let progress = use_scroll_progress();
    let terminal_style = move || TerminalPose::at(progress.get()).style();

    view! {
        <section id="hero" class="hero relative overflow-hidden">
            <div class="background-grid absolute inset-0"></div>
            <div class="container relative z-10 grid lg:grid-cols-2 gap-16 items-center">
                <div class="enter-left">
                    <h1 class="gradient-text text-5xl lg:text-6xl font-bold enter-up delay-200">
                        {HERO_TITLE}
                    </h1>
                    <h2 class="text-secondary text-2xl font-medium mb-6 enter-up delay-400">
                        {HERO_SUBTITLE}
                    </h2>
                    <p class="text-secondary text-lg max-w-xl mb-8 enter-up delay-600">
                        {HERO_DESCRIPTION}
                    </p>
                    <SocialLinks links=SOCIAL_LINKS extra_class="enter-up delay-800" />
                </div>
                <div class="enter-up delay-400">
                    <div class="terminal-card terminal" style=terminal_style>
                        <div class="flex gap-2 mb-4">
                            {TERMINAL_BUTTONS
                                .iter()
                                .map(|color| {
                                    view! {
                                        <div
                                            class="terminal-button w-3 h-3 rounded-full"
                                            style=format!("background-color: {color};")
                                        ></div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <pre class="whitespace-pre-wrap">
                            {move || typed.get()}
                            {move || {
                                if typing.get() {
                                    Either::Left(view! { <span class="cursor"></span> })
                                } else {
                                    Either::Right(())
                                }
                            }}
                        </pre>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_stops_when_complete() {
        let owner = Owner::new();
        owner.with(|| {
            let (typed, set_typed) = signal(String::new());
            let (typing, set_typing) = signal(true);
            let writer = StoredValue::new(Typewriter::new("hi"));

            assert!(!advance(writer, set_typed, set_typing));
            assert_eq!(typed.get_untracked(), "h");
            assert!(typing.get_untracked());

            assert!(advance(writer, set_typed, set_typing));
            assert_eq!(typed.get_untracked(), "hi");
            assert!(!typing.get_untracked());
        });
    }

    #[test]
    fn test_late_tick_after_teardown_is_noop() {
        // with sandboxed arenas (ssr), owners only share an arena under a common root
        Owner::new().with(|| {
            // the signals outlive the typing task so late writes would be visible
            let page = Owner::new();
            let (typed, set_typed, typing, set_typing) = page.with(|| {
                let (typed, set_typed) = signal(String::new());
                let (typing, set_typing) = signal(true);
                (typed, set_typed, typing, set_typing)
            });

            let task = Owner::new();
            let writer = task.with(|| {
                let writer = StoredValue::new(Typewriter::new("hello"));
                let handle = StoredValue::new(None::<IntervalHandle>);
                on_cleanup(move || teardown(writer, handle));
                writer
            });

            assert!(!advance(writer, set_typed, set_typing));
            assert!(!advance(writer, set_typed, set_typing));
            assert_eq!(typed.get_untracked(), "he");

            task.cleanup();

            assert!(advance(writer, set_typed, set_typing));
            assert_eq!(typed.get_untracked(), "he");
            assert!(typing.get_untracked());
            assert_eq!(writer.try_update_value(|w| w.tick().map(str::to_owned)), None);
        });
    }
}

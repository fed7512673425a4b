use leptos::{html, prelude::*};

use super::motion::use_reveal_once;
use crate::content::{experiences, ExperienceEntry};
use crate::motion::stagger_delay;

#[component]
pub fn TechTags(tech: &'static [&'static str], #[prop(optional)] offset: usize) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mt-4">
            {tech
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    view! {
                        <span class="tech-tag reveal" style=stagger_delay(offset + i, 100)>
                            {*t}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TimelineItem(entry: ExperienceEntry, index: usize) -> impl IntoView {
    let is_left = index % 2 == 0;
    view! {
        <div
            class="timeline-item reveal"
            class:left=is_left
            class:right=!is_left
            style=stagger_delay(index, 200)
        >
            <div class="timeline-content">
                <h3 class="text-xl font-semibold">{entry.role}</h3>
                <div class="text-primary font-medium">{entry.company}</div>
                <div class="text-secondary font-mono text-sm mb-3">{entry.period.to_string()}</div>
                <p class="text-secondary leading-relaxed">{entry.description}</p>
                <TechTags tech=entry.tech offset=index />
            </div>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let timeline_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(timeline_ref);

    view! {
        <section id="experience">
            <div class="container">
                <h2 class="section-title text-4xl font-bold text-center">
                    "Professional " <span class="gradient-text">"Experience"</span>
                </h2>
                <div node_ref=timeline_ref class="timeline" class:revealed=move || revealed.get()>
                    {experiences()
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <TimelineItem entry=entry index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_renders_every_experience() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Experience /> }.to_html());
        assert_eq!(html.matches("timeline-item").count(), experiences().len());
        for entry in experiences() {
            assert!(html.contains(entry.role));
            assert!(html.contains(&entry.period.to_string()));
        }
        let tags = experiences().iter().map(|e| e.tech.len()).sum::<usize>();
        assert_eq!(html.matches("tech-tag").count(), tags);
    }
}

use leptos::{html, prelude::*};

use super::motion::use_reveal_once;
use crate::content::{Skill, SkillCategory, SKILL_CATEGORIES};
use crate::motion::stagger_delay;

#[component]
fn SkillBar(skill: Skill, index: usize, revealed: Signal<bool>) -> impl IntoView {
    // bars grow from zero the first time the section is seen
    let style = move || {
        let width = if revealed.get() { skill.level } else { 0 };
        format!("width: {width}%; {}", stagger_delay(index, 100))
    };
    view! {
        <div class="skill-item">
            <div class="flex justify-between text-sm mb-1">
                <span>{skill.name}</span>
                <span class="text-secondary font-mono">{format!("{}%", skill.level)}</span>
            </div>
            <div class="skill-bar h-2 rounded-full overflow-hidden">
                <div class="skill-level h-full rounded-full" style=style></div>
            </div>
        </div>
    }
}

#[component]
fn CategoryCard(category: SkillCategory, index: usize, revealed: Signal<bool>) -> impl IntoView {
    view! {
        <div class="skill-category reveal" style=stagger_delay(index, 100)>
            <h3 class="category-title text-lg font-semibold mb-4">{category.name}</h3>
            <div class="flex flex-col gap-4">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| view! { <SkillBar skill=*skill index=i revealed=revealed /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(container_ref);

    view! {
        <section id="skills">
            <div node_ref=container_ref class="container" class:revealed=move || revealed.get()>
                <h2 class="section-title text-4xl font-bold text-center">"Skills"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! { <CategoryCard category=*category index=index revealed=revealed /> }
                        })
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
    fn test_renders_every_skill() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Skills /> }.to_html());
        assert_eq!(
            html.matches("skill-category").count(),
            SKILL_CATEGORIES.len()
        );
        let skills = SKILL_CATEGORIES
            .iter()
            .map(|c| c.skills.len())
            .sum::<usize>();
        assert_eq!(html.matches("skill-item").count(), skills);
        // bars start empty until the section is seen
        assert_eq!(html.matches("width: 0%").count(), skills);
    }
}

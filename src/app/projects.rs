use leptos::{html, prelude::*};

use super::experience::TechTags;
use super::motion::use_reveal_once;
use crate::content::{Project, PROJECTS};
use crate::motion::stagger_delay;

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    view! {
        <article class="project-card reveal" style=stagger_delay(index, 200)>
            <div
                class="project-image h-48 bg-cover bg-center"
                style=format!("background-image: url('{}');", project.image)
            ></div>
            <div class="p-6">
                <h3 class="text-xl font-semibold">{project.title}</h3>
                <p class="text-secondary leading-relaxed">{project.description}</p>
                <TechTags tech=project.tech offset=index />
                <div class="flex gap-4 mt-6">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link"
                    >
                        <i class="devicon-github-plain"></i>
                        <span>"Code"</span>
                    </a>
                    <a
                        href=project.demo
                        target="_blank"
                        rel="noopener noreferrer"
                        class="project-link"
                    >
                        <span>"↗"</span>
                        <span>"Demo"</span>
                    </a>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(grid_ref);

    view! {
        <section id="projects">
            <div class="container">
                <h2 class="section-title text-4xl font-bold text-center">
                    "Featured " <span class="gradient-text">"Projects"</span>
                </h2>
                <div
                    node_ref=grid_ref
                    class="grid md:grid-cols-2 lg:grid-cols-3 gap-8"
                    class:revealed=move || revealed.get()
                >
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project=project index=index /> })
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
    fn test_renders_every_project() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Projects /> }.to_html());
        assert_eq!(html.matches("project-card").count(), PROJECTS.len());
        for project in PROJECTS {
            assert!(html.contains(project.title));
            assert!(html.contains(project.demo));
        }
    }
}

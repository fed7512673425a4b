use leptos::{html, prelude::*};
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use super::motion::{use_reveal_once, use_scroll_progress};
use crate::content::{ABOUT_BADGES, ABOUT_TECHNOLOGIES, OWNER_NAME};
use crate::motion::{stagger_delay, tilt, AvatarPose};

const MAX_TILT_DEG: f64 = 6.0;

#[component]
pub fn About() -> impl IntoView {
    let progress = use_scroll_progress();
    let avatar_ref = NodeRef::<html::Div>::new();
    let content_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(content_ref);

    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(avatar_ref);

    let avatar_style = move || {
        let pose = AvatarPose::at(progress.get());
        let pose = if is_outside.get() {
            pose
        } else {
            pose.leaning(tilt(
                (element_x.get(), element_y.get()),
                (element_width.get(), element_height.get()),
                MAX_TILT_DEG,
            ))
        };
        pose.style()
    };

    view! {
        <section id="about">
            <div class="container grid lg:grid-cols-2 gap-16 items-center">
                <div class="flex justify-center">
                    <div node_ref=avatar_ref class="avatar-frame relative" style=avatar_style>
                        <div class="avatar-images">
                            <img src="/avatar.png" alt=OWNER_NAME />
                            <img src="/avatar-hover.png" alt=format!("{OWNER_NAME} Hover") />
                        </div>
                        <div class="floating-card left-0 top-[20%]" class:revealed=move || revealed.get()>
                            {ABOUT_BADGES[0]}
                        </div>
                        <div class="floating-card right-0 bottom-[20%]" class:revealed=move || revealed.get()>
                            {ABOUT_BADGES[1]}
                        </div>
                    </div>
                </div>
                <div node_ref=content_ref class="reveal" class:revealed=move || revealed.get()>
                    <h2 class="section-title text-4xl font-bold">"About Me"</h2>
                    <div class="bio text-secondary text-lg leading-relaxed">
                        <p>
                            "I'm a " <strong>"passionate Backend Engineer"</strong>
                            " with a deep love for building scalable and efficient systems. With expertise in "
                            <strong>"distributed systems"</strong> " and "
                            <strong>"cloud architecture"</strong>
                            ", I specialize in creating robust backend solutions that power modern applications."
                        </p>
                        <p class="mt-6">
                            "My approach combines " <strong>"technical excellence"</strong>
                            " with practical problem-solving, ensuring that every solution I build is not just functional, but also maintainable and future-proof."
                        </p>
                    </div>
                    <h3 class="text-xl font-semibold mt-8 mb-4">"Technologies I Work With"</h3>
                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-3">
                        {ABOUT_TECHNOLOGIES
                            .iter()
                            .enumerate()
                            .map(|(i, tech)| {
                                view! {
                                    <div class="skill-card reveal" style=stagger_delay(i, 100)>
                                        {*tech}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

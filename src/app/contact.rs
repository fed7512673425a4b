use leptos::{either::Either, html, prelude::*};

use super::hero::SocialLinks;
use super::motion::use_reveal_once;
use crate::contact::{ContactForm, Field};
use crate::content::SOCIAL_LINKS;

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Idle,
    Sent,
    Rejected(String),
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input =
        move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let input_type = if field == Field::Email { "email" } else { "text" };

    view! {
        <div class="form-group flex flex-col gap-2">
            <label for=field.id() class="font-medium">
                {field.label()}
            </label>
            {match field {
                Field::Message => {
                    Either::Left(
                        view! {
                            <textarea
                                id=field.id()
                                name=field.id()
                                class="form-input min-h-[150px] resize-y"
                                required
                                prop:value=value
                                on:input=on_input
                            ></textarea>
                        },
                    )
                }
                _ => {
                    Either::Right(
                        view! {
                            <input
                                type=input_type
                                id=field.id()
                                name=field.id()
                                class="form-input"
                                required
                                prop:value=value
                                on:input=on_input
                            />
                        },
                    )
                }
            }}
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (status, set_status) = signal(Status::Idle);
    let container_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal_once(container_ref);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // nothing is sent anywhere; the message only reaches the console
        match form.try_update(ContactForm::submit) {
            Some(Ok(sent)) => {
                log::info!("contact form submitted: {}", sent.to_json());
                set_status.set(Status::Sent);
            }
            Some(Err(e)) => {
                log::debug!("contact form rejected: {e}");
                set_status.set(Status::Rejected(e.to_string()));
            }
            None => {}
        }
    };

    view! {
        <section id="contact">
            <div
                node_ref=container_ref
                class="container max-w-2xl"
                class:revealed=move || revealed.get()
            >
                <h2 class="section-title text-4xl font-bold text-center">"Get in Touch"</h2>
                <form class="contact-form reveal flex flex-col gap-6" on:submit=on_submit>
                    {Field::ALL
                        .into_iter()
                        .map(|field| view! { <FormField field=field form=form /> })
                        .collect_view()}
                    <button type="submit" class="submit-button self-start">
                        "Send Message"
                    </button>
                    {move || match status.get() {
                        Status::Idle => None,
                        Status::Sent => {
                            Some(
                                view! { <p class="form-status success">"Thanks! Message noted."</p> }
                                    .into_any(),
                            )
                        }
                        Status::Rejected(msg) => {
                            Some(view! { <p class="form-status error">{msg}</p> }.into_any())
                        }
                    }}
                </form>
                <SocialLinks links=SOCIAL_LINKS extra_class="justify-center mt-12" />
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_form_waits_for_reveal() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Contact /> }.to_html());
        assert_eq!(html.matches("form-group").count(), Field::ALL.len());
        assert!(html.contains("contact-form reveal"));
        // nothing has been seen during server render
        assert!(!html.contains("revealed"));
    }
}

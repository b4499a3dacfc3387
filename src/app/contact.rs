use leptos::{prelude::*, task::spawn_local};
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::contact::{
    ContactFields, ContactForm, Field, Submission, Ticket, BANNER_TIMEOUT, SUBMISSION_SUCCEEDED,
};

const EMAIL: &str = "muigaipeter61@gmail.com";
const PHONES: [&str; 2] = ["+254703551225", "+254720017232"];
const LOCATION: &str = "Embu, Kenya, 60100";
const WORKING_HOURS: &str = "Mon - Fri: 9:00 AM - 6:00 PM";
const RESPONSE_TIME: &str = "Usually within 24 hours";
const SOCIAL_LINKS: [(&str, &str, &str); 2] = [
    (
        "LinkedIn",
        "devicon-linkedin-plain",
        "https://www.linkedin.com/in/peter-muturi-303089306",
    ),
    ("GitHub", "devicon-github-plain", "https://github.com/honPj"),
];

#[server]
pub async fn send_contact_message(
    from_name: String,
    reply_to: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    let fields = ContactFields {
        from_name,
        reply_to,
        subject,
        message,
    };
    crate::relay::relay_message(&fields).await.map_err(|e| {
        tracing::warn!(error = %e, "couldn't relay contact message");
        ServerFnError::new("Couldn't send message")
    })
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let UseTimeoutFnReturn {
        start: start_banner_timer,
        ..
    } = use_timeout_fn(
        move |ticket: u64| {
            form.try_update(|f| f.expire_banner(Ticket::from(ticket)));
        },
        BANNER_TIMEOUT.as_millis() as f64,
    );

    // a send that resolves after this point must not touch the form
    on_cleanup(move || {
        form.try_update_untracked(|f| f.teardown());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let pending = match form.try_update(|f| f.begin_submit()) {
            Some(Ok(pending)) => pending,
            _ => return,
        };
        let start_banner_timer = start_banner_timer.clone();
        spawn_local(async move {
            let ContactFields {
                from_name,
                reply_to,
                subject,
                message,
            } = pending.fields;
            let outcome = send_contact_message(from_name, reply_to, subject, message).await;
            if let Some(Some(ticket)) = form.try_update(|f| f.finish_submit(pending.ticket, outcome))
            {
                start_banner_timer(ticket.id());
            }
        });
    };

    view! {
        <Title text="Contact" />
        <div class="text-center mb-8">
            <h1 class="font-bold text-3xl lg:text-4xl mb-4 section-content">"Get In Touch"</h1>
            <div class="max-w-2xl mx-auto text-lg font-medium text-muted section-content">
                "Have a project in mind or want to discuss potential collaboration opportunities? I'm always open to interesting conversations about technology and innovation."
            </div>
        </div>
        <div class="w-full max-w-5xl mx-auto grid grid-cols-1 md:grid-cols-2 gap-8">
            <ContactInfo />
            <div class="order-1 md:order-2 bg-brightBlack/20 p-6 rounded-lg border border-muted/30">
                <h3 class="text-xl font-bold mb-6">"Send a Message"</h3>
                <form on:submit=on_submit novalidate=true>
                    <TextField
                        form
                        field=Field::FromName
                        label="Full Name *"
                        kind="text"
                        placeholder="Enter your full name"
                    />
                    <TextField
                        form
                        field=Field::ReplyTo
                        label="Email Address *"
                        kind="email"
                        placeholder="Enter your email address"
                    />
                    <TextField
                        form
                        field=Field::Subject
                        label="Subject"
                        kind="text"
                        placeholder="What is this regarding?"
                    />
                    <div class="mb-4">
                        <label class="block mb-2 font-medium">"Message *"</label>
                        <textarea
                            name=Field::Message.name()
                            rows="6"
                            placeholder="Tell me about your project or inquiry..."
                            class=move || input_class(form.with(|f| f.errors().get(Field::Message).is_some()))
                            prop:value=move || form.with(|f| f.fields().message.clone())
                            on:input=move |ev| {
                                form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                            }
                        ></textarea>
                        <FieldError form field=Field::Message />
                    </div>
                    <button
                        type="submit"
                        class="w-full bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30 disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || !form.with(ContactForm::can_submit)
                        title=move || {
                            if form.with(ContactForm::can_submit) {
                                "Send message"
                            } else {
                                "Please fill in all required fields"
                            }
                        }
                    >
                        {move || {
                            if form.with(|f| f.submission() == Submission::Submitting) {
                                "Sending..."
                            } else {
                                "✉ Send Message"
                            }
                        }}
                    </button>
                    {move || {
                        form.with(ContactForm::shows_success)
                            .then(|| {
                                view! {
                                    <div class="mt-4 p-3 rounded-md bg-green/20 text-green">
                                        "✔ " {SUBMISSION_SUCCEEDED}
                                    </div>
                                }
                            })
                    }}
                    {move || {
                        form
                            .with(|f| {
                                f.last_error().filter(|_| f.shows_error()).map(ToString::to_string)
                            })
                            .map(|msg| {
                                view! {
                                    <div class="mt-4 p-3 rounded-md bg-red/20 text-red">
                                        "⚠ " {msg}
                                    </div>
                                }
                            })
                    }}
                </form>
            </div>
        </div>
    }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error {
        "w-full px-4 py-2 rounded-md border border-red bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-red"
    } else {
        "w-full px-4 py-2 rounded-md border border-muted bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-cyan"
    }
}

#[component]
fn TextField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label class="block mb-2 font-medium">{label}</label>
            <input
                type=kind
                name=field.name()
                placeholder=placeholder
                class=move || input_class(form.with(|f| f.errors().get(field).is_some()))
                prop:value=move || form.with(|f| f.fields().get(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
            <FieldError form field />
        </div>
    }
}

#[component]
fn FieldError(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.errors().get(field).map(|e| e.to_string()))
            .map(|msg| view! { <div class="mt-1 text-sm text-red">"⚠ " {msg}</div> })
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="order-2 md:order-1 bg-brightBlack/20 p-6 rounded-lg border border-muted/30 space-y-6">
            <h3 class="text-xl font-bold">"Contact Information"</h3>
            <div>
                <div class="text-sm text-muted">"Email Address"</div>
                <a href=format!("mailto:{EMAIL}") class="break-words text-cyan">
                    {EMAIL}
                </a>
            </div>
            <div>
                <div class="text-sm text-muted">"Phone Numbers"</div>
                {PHONES
                    .into_iter()
                    .map(|phone| {
                        view! {
                            <div>
                                <a href=format!("tel:{phone}")>{phone}</a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div>
                <div class="text-sm text-muted">"Location"</div>
                <div>{LOCATION}</div>
                <div class="text-sm text-muted mt-2">
                    <div>{WORKING_HOURS}</div>
                    <div>{RESPONSE_TIME}</div>
                </div>
            </div>
            <div>
                <h4 class="font-medium mb-3">"Connect With Me"</h4>
                <div class="flex gap-4">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|(label, icon, url)| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center gap-2 hover:text-cyan"
                                    aria-label=label
                                >
                                    <i class=icon></i>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

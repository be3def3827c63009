use leptos::prelude::*;

use super::{HeroFor, Shell};
use crate::{
    app::pages,
    content::{
        refer::{BENEFITS, BUDGETS, HOW_IT_WORKS, SERVICES},
        site::{CONTACT_EMAIL, CONTACT_PHONE, OFFICE_ADDRESS, WHATSAPP_URL},
    },
    leads::{ContactForm, ReferralForm},
};

/// Outcome shown above a form after a POST.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Error(String),
    Submitted,
}

#[component]
fn StatusBanner(status: FormStatus, success: &'static str) -> impl IntoView {
    match status {
        FormStatus::Idle => ().into_any(),
        FormStatus::Error(message) => view! {
            <div class="form-status form-status-error" role="alert">{message}</div>
        }
        .into_any(),
        FormStatus::Submitted => view! {
            <div class="form-status form-status-success" role="status">{success}</div>
        }
        .into_any(),
    }
}

#[component]
fn TextField(
    label: &'static str,
    name: &'static str,
    value: String,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = true)] required: bool,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    let label = if required { format!("{label} *") } else { label.to_string() };
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type=kind
                name=name
                value=value
                placeholder=placeholder
                required=required
                maxlength="200"
            />
        </label>
    }
}

#[component]
fn TextArea(
    label: &'static str,
    name: &'static str,
    value: String,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field field-wide">
            <span class="field-label">{format!("{label} *")}</span>
            <textarea name=name rows="5" placeholder=placeholder required=true maxlength="5000">
                {value}
            </textarea>
        </label>
    }
}

#[component]
pub fn ReferPage(form: ReferralForm, status: FormStatus) -> impl IntoView {
    let benefits = BENEFITS
        .iter()
        .enumerate()
        .map(|(idx, b)| {
            view! {
                <article class="benefit-card rise-in" style=format!("animation-delay: {}ms", idx * 100)>
                    <div class="benefit-icon">{b.icon}</div>
                    <h3>{b.title}</h3>
                    <p class="muted">{b.description}</p>
                </article>
            }
        })
        .collect_view();
    let steps = HOW_IT_WORKS
        .iter()
        .map(|s| {
            view! {
                <li class="step rise-in">
                    <span class="step-number">{s.step}</span>
                    <div>
                        <h4>{s.title}</h4>
                        <p class="muted">{s.description}</p>
                    </div>
                </li>
            }
        })
        .collect_view();
    let services = SERVICES
        .iter()
        .map(|s| view! { <li class="tag-chip">{*s}</li> })
        .collect_view();
    let selected_budget = form.estimated_budget.clone();
    let budgets = BUDGETS
        .iter()
        .map(|b| {
            view! { <option value=b.value selected={selected_budget == b.value}>{b.label}</option> }
        })
        .collect_view();

    view! {
        <Shell current_path=pages::REFER.path.to_string()>
            <HeroFor page=&pages::REFER />
            <section class="section">
                <div class="section-inner">
                    <h2 class="section-title">"Why Refer Us?"</h2>
                    <div class="card-grid">{benefits}</div>
                </div>
            </section>
            <section class="section section-muted">
                <div class="section-inner">
                    <h2 class="section-title">"How It Works"</h2>
                    <ol class="steps">{steps}</ol>
                    <h3>"Services You Can Refer"</h3>
                    <ul class="tag-row">{services}</ul>
                </div>
            </section>
            <section class="section" id="referral-form">
                <div class="section-inner form-card">
                    <h2 class="section-title">"Submit a Referral"</h2>
                    <StatusBanner
                        status=status
                        success="Referral submitted successfully! We'll be in touch soon."
                    />
                    <form class="lead-form" action="/refer" method="post">
                        <fieldset>
                            <legend>"Your Information"</legend>
                            <TextField label="Your Name" name="yourName" value=form.your_name placeholder="John Doe" />
                            <TextField label="Your Email" name="yourEmail" value=form.your_email kind="email" placeholder="john@example.com" />
                            <TextField label="Your Phone" name="yourPhone" value=form.your_phone kind="tel" />
                        </fieldset>
                        <fieldset>
                            <legend>"Client Information"</legend>
                            <TextField label="Client Name" name="clientName" value=form.client_name />
                            <TextField label="Client Email" name="clientEmail" value=form.client_email kind="email" />
                            <TextField label="Client Phone" name="clientPhone" value=form.client_phone kind="tel" />
                            <TextField label="Client Company" name="clientCompany" value=form.client_company required=false />
                        </fieldset>
                        <fieldset>
                            <legend>"Project Information"</legend>
                            <TextArea
                                label="Project Details"
                                name="projectDetails"
                                value=form.project_details
                                placeholder="Describe the project your client needs..."
                            />
                            <label class="field">
                                <span class="field-label">"Estimated Budget *"</span>
                                <select name="estimatedBudget" required=true>
                                    <option value="" selected=form.estimated_budget.is_empty()>"Select budget range"</option>
                                    {budgets}
                                </select>
                            </label>
                        </fieldset>
                        <button class="button button-primary" type="submit">"Submit Referral"</button>
                    </form>
                </div>
            </section>
        </Shell>
    }
}

#[component]
pub fn ContactPage(form: ContactForm, status: FormStatus) -> impl IntoView {
    view! {
        <Shell current_path=pages::CONTACT.path.to_string()>
            <HeroFor page=&pages::CONTACT />
            <section class="section">
                <div class="section-inner contact-grid">
                    <aside class="contact-info rise-in">
                        <h2>"Contact Information"</h2>
                        <p>
                            <span class="field-label">"Email"</span>
                            <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                        </p>
                        <p>
                            <span class="field-label">"Phone"</span>
                            <a href=format!("tel:{}", CONTACT_PHONE.replace(' ', ""))>{CONTACT_PHONE}</a>
                        </p>
                        <p>
                            <span class="field-label">"Office"</span>
                            {OFFICE_ADDRESS}
                        </p>
                        <a class="button button-outline" href=WHATSAPP_URL target="_blank" rel="noreferrer">
                            "Chat on WhatsApp"
                        </a>
                    </aside>
                    <div class="form-card rise-in delay-1">
                        <h2>"Send Us a Message"</h2>
                        <StatusBanner
                            status=status
                            success="Message sent successfully! We'll get back to you within one business day."
                        />
                        <form class="lead-form" action="/contact" method="post">
                            <TextField label="Name" name="name" value=form.name />
                            <TextField label="Email" name="email" value=form.email kind="email" />
                            <TextField label="Phone" name="phone" value=form.phone kind="tel" required=false />
                            <TextArea label="Message" name="message" value=form.message placeholder="Tell us about your project..." />
                            <button class="button button-primary" type="submit">"Send Message"</button>
                        </form>
                    </div>
                </div>
            </section>
        </Shell>
    }
}

use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::gallery::Gallery;
use crate::components::header::SiteHeader;
use crate::config::{self, CONTACT};
use crate::content::{
    star_fill, BENEFITS, CONTACT_BADGES, FOOTER_LINKS, PACKAGES, PRICING_NOTE, PROCESS_STEPS,
    SERVICES, SOCIAL_LINKS, TESTIMONIALS, TRUST_BADGES,
};
use crate::gallery::{load_batch, BatchSequence, GalleryAction, GalleryStore};
use crate::pages::faq::FaqSection;
use crate::theme::Theme;

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_state(Theme::default);
    let gallery = use_reducer(GalleryStore::new);
    let batches = use_mut_ref(BatchSequence::default);

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set(theme.toggled()))
    };

    let on_upload = {
        let gallery = gallery.clone();
        Callback::from(move |files: Vec<gloo_file::File>| {
            if files.is_empty() {
                return;
            }
            let ticket = batches.borrow_mut().issue();
            log::debug!("Reading {} selected files as batch {:?}", files.len(), ticket);
            let gallery = gallery.clone();
            spawn_local(async move {
                let images = load_batch(files, config::MAX_FILES_PER_UPLOAD).await;
                gallery.dispatch(GalleryAction::Commit { ticket, images });
            });
        })
    };

    let images = gallery.images().cloned().collect::<Vec<_>>();

    html! {
        <div class={classes!("landing-page", theme.class())}>
            <SiteHeader theme={*theme} {on_toggle_theme} />
            { hero() }
            <main class="page-content">
                { services() }
                { packages() }
                <Gallery {images} {on_upload} />
                { testimonials() }
                { process() }
                <FaqSection />
                { contact() }
            </main>
            { footer() }
            <style>{LANDING_CSS}</style>
        </div>
    }
}

fn icon(class: &'static str) -> Html {
    html! { <i class={classes!(class, "accent")}></i> }
}

fn hero() -> Html {
    html! {
        <section id="top" class="hero">
            <div class="hero-glow"></div>
            <div class="hero-grid"></div>
            <div class="hero-content">
                <img src={config::LOGO_PATH} alt={config::BUSINESS_NAME} class="hero-logo" />
                <div class="contact-strip">
                    <p>{icon("fa-solid fa-phone")}
                        <a href={format!("tel:{}", CONTACT.phone_dial)}>{CONTACT.phone_display}</a></p>
                    <p>{icon("fa-solid fa-envelope")}
                        <a href={format!("mailto:{}", CONTACT.email)}>{CONTACT.email}</a></p>
                    <p>{icon("fa-solid fa-location-dot")}{CONTACT.short_address}</p>
                    <p>{icon("fa-solid fa-clock")}{CONTACT.hours}</p>
                </div>
                <h1 class="hero-title">
                    {"Drive Cooler. Look Sharper. "}<span class="accent">{"Tint Smarter."}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Premium ceramic & carbon films • Computer‑cut patterns • Lifetime warranty"}
                </p>
                <div class="hero-cta-group">
                    <a href="#contact" class="primary-button">
                        {"Book Now "}<i class="fa-solid fa-arrow-right"></i>
                    </a>
                    <a href="#pricing" class="outline-button">{"See Packages"}</a>
                </div>
                <div class="badge-row">
                    { for TRUST_BADGES.iter().map(|b| html! {
                        <span class="badge"><i class={b.icon.class()}></i>{" "}{b.label}</span>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn services() -> Html {
    html! {
        <section id="services" class="page-section">
            <h2>{"Services"}</h2>
            <div class="three-column">
                { for SERVICES.iter().map(|s| html! {
                    <div key={s.title} class="card service-card">
                        <div class="card-heading">
                            {icon(s.icon.class())}
                            <h3 class="card-title">{s.title}</h3>
                        </div>
                        <p class="muted">{s.desc}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn packages() -> Html {
    html! {
        <section id="pricing" class="page-section">
            <h2>{"Packages"}</h2>
            <div class="three-column">
                { for PACKAGES.iter().map(|p| html! {
                    <div key={p.name} class={classes!("card", "package-card", p.featured.then_some("featured"))}>
                        if p.featured {
                            <span class="badge popular-badge">{"Popular"}</span>
                        }
                        <h3 class="card-title">{p.name}</h3>
                        <p class="price">{p.price}</p>
                        <ul class="check-list">
                            { for p.features.iter().map(|f| html! {
                                <li key={*f}>{icon("fa-solid fa-circle-check")}{*f}</li>
                            }) }
                        </ul>
                        <a href="#contact" class="primary-button full-width">{"Book This Package"}</a>
                    </div>
                }) }
            </div>
            <p class="fine-print">{PRICING_NOTE}</p>
        </section>
    }
}

fn star_row(stars: u8) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} star rating", stars)}>
            { for star_fill(stars).iter().map(|filled| html! {
                <i class={classes!("fa-solid", "fa-star", (!*filled).then_some("dim"))}></i>
            }) }
        </div>
    }
}

fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="page-section">
            <h2>{"What Drivers Say"}</h2>
            <div class="three-column">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <div key={t.name} class="card">
                        <h3 class="card-title">{t.name}</h3>
                        <p class="fine-print">{t.car}</p>
                        {star_row(t.stars)}
                        <p class="quote">{format!("“{}”", t.quote)}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn process() -> Html {
    html! {
        <section id="why" class="page-section">
            <div class="two-column">
                <div>
                    <h2>{"Our Process"}</h2>
                    <ol class="process-list">
                        { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                            <li><span class="accent">{format!("{:02}", i + 1)}</span>{*step}</li>
                        }) }
                    </ol>
                </div>
                <div class="benefits-panel">
                    <h3>{"Benefits You’ll Feel"}</h3>
                    <ul class="benefits-grid">
                        { for BENEFITS.iter().map(|b| html! {
                            <li>{icon(b.icon.class())}{b.label}</li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

fn contact() -> Html {
    html! {
        <section id="contact" class="page-section">
            <div class="two-column">
                <div>
                    <h2>{"Ready to blackout your ride?"}</h2>
                    <p class="muted">
                        {"Call, message, or swing by the shop. We’ll recommend the perfect shade for your vehicle and budget."}
                    </p>
                    <div class="contact-lines">
                        <p>{icon("fa-solid fa-phone")}
                            <a href={format!("tel:{}", CONTACT.phone_dial)}>{CONTACT.phone_display}</a></p>
                        <p>{icon("fa-solid fa-envelope")}
                            <a href={format!("mailto:{}", CONTACT.email)}>{CONTACT.email}</a></p>
                        <p>{icon("fa-solid fa-location-dot")}{CONTACT.full_address}</p>
                    </div>
                    <div class="badge-row">
                        { for CONTACT_BADGES.iter().map(|b| html! { <span class="badge">{*b}</span> }) }
                    </div>
                    <div class="social-row">
                        { for SOCIAL_LINKS.iter().map(|s| html! {
                            <a href={s.href} aria-label={s.label}><i class={s.icon_class}></i></a>
                        }) }
                    </div>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div class="footer-brand">
                    <img src={config::LOGO_PATH} alt="Blackout Garage Logo" class="footer-logo" />
                    <p>{format!("© {} {}. All rights reserved.", year, config::BUSINESS_NAME)}</p>
                </div>
                <div class="footer-links">
                    { for FOOTER_LINKS.iter().map(|link| html! {
                        <a href={link.href}>{link.label}</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        --bg: #09090b;
        --bg-mid: #000;
        --card: rgba(24, 24, 27, 0.6);
        --text: #fff;
        --muted: #d1d5db;
        --faint: #9ca3af;
        --border: rgba(255, 255, 255, 0.1);
        --accent: #38bdf8;
        --accent-strong: #0284c7;
        min-height: 100vh;
        background: linear-gradient(to bottom, var(--bg), var(--bg-mid), var(--bg));
        color: var(--text);
        font-family: system-ui, -apple-system, sans-serif;
    }
    .landing-page.light {
        --bg: #f4f4f5;
        --bg-mid: #fff;
        --card: rgba(255, 255, 255, 0.85);
        --text: #09090b;
        --muted: #3f3f46;
        --faint: #71717a;
        --border: rgba(0, 0, 0, 0.1);
    }
    .landing-page a {
        color: inherit;
        text-decoration: none;
    }
    .accent {
        color: var(--accent);
    }
    .muted {
        color: var(--muted);
    }
    .fine-print {
        font-size: 0.75rem;
        color: var(--faint);
    }
    .site-header {
        position: sticky;
        top: 0;
        z-index: 50;
        backdrop-filter: blur(24px);
        background: rgba(0, 0, 0, 0.3);
        border-bottom: 1px solid var(--border);
    }
    .site-header-inner, .site-footer-inner, .page-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .site-header-inner {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0.75rem 1rem;
    }
    .brand {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .brand-logo {
        height: 2.5rem;
        filter: drop-shadow(0 6px 20px rgba(0, 173, 239, 0.45));
    }
    .brand-name {
        font-weight: 800;
        font-size: 1.25rem;
        margin: 0;
    }
    .brand-tagline {
        font-size: 0.75rem;
        color: var(--accent);
        margin: 0;
    }
    .site-nav {
        display: flex;
        gap: 1.5rem;
    }
    .nav-link {
        font-size: 0.875rem;
        font-weight: 500;
        color: var(--muted);
        transition: color 0.2s;
    }
    .nav-link:hover {
        color: var(--text);
    }
    .header-actions {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .quote-button, .outline-button {
        border: 1px solid var(--accent);
        color: var(--accent);
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
    }
    .theme-toggle {
        background: none;
        border: none;
        color: var(--text);
        font-size: 1.25rem;
        cursor: pointer;
    }
    .hero {
        position: relative;
        overflow: hidden;
    }
    .hero-glow {
        position: absolute;
        inset: -10rem;
        opacity: 0.4;
        pointer-events: none;
        background: radial-gradient(circle at 30% 10%, rgba(14, 165, 233, 0.4), transparent 40%),
            radial-gradient(circle at 65% 35%, rgba(34, 211, 238, 0.3), transparent 40%);
        animation: pulse 5s ease-in-out infinite;
    }
    .hero-grid {
        position: absolute;
        inset: 0;
        background-image: linear-gradient(to right, rgba(255, 255, 255, 0.04) 1px, transparent 1px),
            linear-gradient(to bottom, rgba(255, 255, 255, 0.04) 1px, transparent 1px);
        background-size: 24px 24px;
    }
    @keyframes pulse {
        50% { opacity: 0.25; }
    }
    .hero-content {
        position: relative;
        max-width: 80rem;
        margin: 0 auto;
        padding: 3.5rem 1rem 6rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
    }
    .hero-logo {
        width: 100%;
        max-width: 48rem;
        filter: drop-shadow(0 15px 60px rgba(0, 173, 239, 0.35));
    }
    .contact-strip {
        margin-top: 1.5rem;
        width: 100%;
        max-width: 48rem;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
        gap: 1rem;
        padding: 1rem;
        font-size: 0.875rem;
        border: 1px solid var(--border);
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.05);
        backdrop-filter: blur(24px);
    }
    .contact-strip p, .contact-lines p, .check-list li, .benefits-grid li {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin: 0;
    }
    .contact-strip p {
        justify-content: center;
    }
    .hero-title {
        margin-top: 2rem;
        font-size: clamp(2.25rem, 6vw, 3.75rem);
        font-weight: 800;
        animation: rise 0.6s ease-out;
    }
    @keyframes rise {
        from { opacity: 0; transform: translateY(12px); }
        to { opacity: 1; transform: none; }
    }
    .hero-subtitle {
        color: var(--muted);
        max-width: 42rem;
    }
    .hero-cta-group, .badge-row, .social-row {
        margin-top: 1.5rem;
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 0.75rem;
    }
    .primary-button {
        display: inline-block;
        background: var(--accent-strong);
        color: #fff !important;
        border: none;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        text-align: center;
        cursor: pointer;
        box-shadow: 0 10px 15px rgba(2, 132, 199, 0.3);
    }
    .primary-button:hover {
        background: #0ea5e9;
    }
    .full-width {
        display: block;
        margin-top: 1.5rem;
    }
    .badge {
        display: inline-flex;
        align-items: center;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.1);
        font-size: 0.75rem;
        font-weight: 600;
    }
    .page-section {
        padding: 4rem 0;
        scroll-margin-top: 6rem;
    }
    .page-section h2 {
        font-size: 1.875rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .three-column, .two-column {
        display: grid;
        gap: 1.5rem;
    }
    .three-column {
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
    }
    .two-column {
        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
        gap: 2rem;
    }
    .card {
        position: relative;
        background: var(--card);
        border: 1px solid var(--border);
        border-radius: 0.75rem;
        padding: 1.5rem;
    }
    .service-card:hover {
        background: linear-gradient(to bottom right, rgba(14, 165, 233, 0.1), var(--card));
    }
    .card-heading {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }
    .card-title {
        font-size: 1.25rem;
        font-weight: 600;
        margin: 0;
    }
    .featured {
        box-shadow: 0 0 0 2px #0ea5e9;
    }
    .popular-badge {
        position: absolute;
        top: -0.5rem;
        right: -0.5rem;
        background: var(--accent-strong);
    }
    .price {
        color: var(--accent);
        font-weight: 600;
    }
    .check-list, .benefits-grid {
        list-style: none;
        padding: 0;
        display: grid;
        gap: 0.5rem;
        font-size: 0.875rem;
        color: var(--muted);
    }
    .gallery-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 1rem;
    }
    .gallery-header h2 {
        margin: 0;
    }
    .upload-label {
        cursor: pointer;
    }
    .hidden-input {
        display: none;
    }
    .upload-button {
        padding: 0.5rem 0.75rem;
        border-radius: 0.75rem;
        border: 1px solid var(--border);
        background: rgba(255, 255, 255, 0.05);
        font-size: 0.875rem;
    }
    .gallery-empty {
        border: 1px dashed var(--border);
        border-radius: 1rem;
        padding: 2.5rem;
        text-align: center;
        color: var(--faint);
    }
    .gallery-empty-icon {
        font-size: 2.5rem;
        color: var(--accent);
        margin-bottom: 0.5rem;
    }
    .gallery-grid {
        columns: 3 14rem;
        column-gap: 0.75rem;
    }
    .gallery-image {
        width: 100%;
        margin-bottom: 0.75rem;
        border-radius: 0.75rem;
        border: 1px solid var(--border);
        break-inside: avoid;
    }
    .stars {
        display: flex;
        gap: 0.125rem;
        color: #facc15;
        font-size: 0.875rem;
    }
    .stars .dim {
        opacity: 0.25;
    }
    .quote {
        margin-top: 0.75rem;
        font-size: 0.875rem;
    }
    .process-list {
        list-style: none;
        padding: 0;
        display: grid;
        gap: 1rem;
        color: var(--muted);
    }
    .process-list li {
        display: flex;
        gap: 0.75rem;
    }
    .benefits-panel {
        border: 1px solid var(--border);
        border-radius: 1.5rem;
        padding: 1.5rem;
        background: radial-gradient(ellipse at top, rgba(2, 132, 199, 0.2), transparent);
    }
    .benefits-grid {
        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
    }
    .faq-grid {
        font-size: 0.875rem;
        color: var(--muted);
    }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        background: none;
        border: none;
        color: var(--text);
        font-size: 1.125rem;
        font-weight: 600;
        text-align: left;
        cursor: pointer;
        padding: 0;
    }
    .faq-answer {
        max-height: 0;
        overflow: hidden;
        transition: max-height 0.3s ease;
    }
    .faq-item.open .faq-answer {
        max-height: 20rem;
    }
    .contact-lines {
        margin-top: 1.5rem;
        display: grid;
        gap: 0.75rem;
        font-size: 0.875rem;
    }
    .contact-lines a:hover, .contact-strip a:hover {
        text-decoration: underline;
    }
    .badge-row, .social-row {
        justify-content: flex-start;
    }
    .hero .badge-row {
        justify-content: center;
    }
    .social-row a {
        opacity: 0.7;
        font-size: 1.25rem;
    }
    .social-row a:hover {
        opacity: 1;
    }
    .contact-form {
        display: grid;
        gap: 0.75rem;
        margin-top: 1rem;
    }
    .contact-form-row {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
        gap: 0.75rem;
    }
    .contact-form input, .contact-form textarea {
        background: rgba(0, 0, 0, 0.3);
        border: 1px solid var(--border);
        border-radius: 0.5rem;
        color: var(--text);
        padding: 0.5rem 0.75rem;
        font: inherit;
    }
    .site-footer {
        margin-top: 2.5rem;
        border-top: 1px solid var(--border);
    }
    .site-footer-inner {
        padding: 2rem 1rem;
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
        font-size: 0.875rem;
        color: var(--faint);
    }
    .footer-brand, .footer-links {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .footer-logo {
        height: 2rem;
        opacity: 0.9;
    }
    .footer-links a:hover {
        color: var(--text);
    }
    @media (max-width: 768px) {
        .site-nav, .brand-text, .quote-button {
            display: none;
        }
    }
"#;

use chrono::Datelike;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::{
    dev_popup::DevPopup, nav::Nav, schedule_form::ScheduleForm, service_modal::ServiceModal,
};
use crate::composer::chat_link;
use crate::config::{self, CREDITS, PRACTICE};
use crate::content::{
    contact_items, IconKind, Section, ServiceDescriptor, ABOUT_CREDENTIALS, ABOUT_STATS,
    AMENITIES, SERVICES,
};
use crate::icons::icon;
use crate::lifecycle::{BrowserScheduler, PageLifecycle};
use crate::navigation::{scroll_to_section, set_document_title};
use crate::overlay::{OverlayAction, OverlayState};
use crate::reveal::FadeIn;

const STAGGER_MS: u32 = 200;

#[function_component(Home)]
pub fn home() -> Html {
    let overlay = use_reducer_eq(OverlayState::default);
    let lifecycle = use_mut_ref(|| None::<PageLifecycle>);

    let dispatch = {
        let dispatcher = overlay.dispatcher();
        Callback::from(move |action: OverlayAction| dispatcher.dispatch(action))
    };

    // Title and popup timer for as long as the page is mounted
    {
        let lifecycle = lifecycle.clone();
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                set_document_title(&config::page_title());
                let mut page = PageLifecycle::new(BrowserScheduler);
                page.arm_popup(dispatch);
                *lifecycle.borrow_mut() = Some(page);
                move || {
                    lifecycle.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_toggle_menu = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(OverlayAction::ToggleMenu))
    };

    let on_navigate = {
        let dispatch = dispatch.clone();
        Callback::from(move |section: Section| {
            dispatch.emit(OverlayAction::NavLinkSelected);
            scroll_to_section(section.anchor());
        })
    };

    let go_to = |section: Section| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    let open_service = |service: ServiceDescriptor| {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Showing details for {}", service.title);
            dispatch.emit(OverlayAction::OpenService(service));
        })
    };

    let on_close_service = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(OverlayAction::CloseService))
    };

    let on_close_popup = {
        let dispatch = dispatch.clone();
        let lifecycle = lifecycle.clone();
        Callback::from(move |_: ()| {
            dispatch.emit(OverlayAction::DismissPopup);
            if let Some(page) = lifecycle.borrow_mut().as_mut() {
                page.schedule_popup_removal(dispatch.clone());
            }
        })
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="site">
            <Nav menu_open={overlay.menu_open} on_toggle={on_toggle_menu} on_navigate={on_navigate.clone()} />

            <section id={Section::Home.anchor()} class="hero">
                <div class="hero-background">
                    <img src={PRACTICE.images.hero} alt="Consultório" />
                    <div class="hero-gradient"></div>
                </div>
                <div class="container hero-content">
                    <FadeIn>
                        <div class="hero-badge">
                            { icon(IconKind::Star, 14) }
                            {"Excelência em Odontologia"}
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={STAGGER_MS}>
                        <h1>
                            {"Seu sorriso merece "}<br />
                            <span class="gradient-text">{"Cuidado Especializado"}</span>
                        </h1>
                    </FadeIn>
                    <FadeIn delay_ms={STAGGER_MS * 2}>
                        <p class="hero-subtitle">
                            {format!(
                                "Atendimento humanizado e tecnologia de ponta em São Paulo do Potengi. Recupere sua autoestima e saúde bucal com o {}.",
                                PRACTICE.name
                            )}
                        </p>
                    </FadeIn>
                    <FadeIn delay_ms={STAGGER_MS * 3} class={classes!("hero-cta-group")}>
                        <a href={Section::Contact.href()} onclick={go_to(Section::Contact)} class="primary-cta">
                            {"Agendar Avaliação"}
                            { icon(IconKind::ArrowRight, 20) }
                        </a>
                        <a href={chat_link(&PRACTICE)} target="_blank" rel="noreferrer" class="secondary-cta">
                            { icon(IconKind::Phone, 20) }
                            {"Conversar no WhatsApp"}
                        </a>
                    </FadeIn>
                </div>
            </section>

            <section id={Section::About.anchor()} class="about">
                <div class="container two-columns">
                    <FadeIn class={classes!("about-portrait")}>
                        <div class="portrait-shadow"></div>
                        <img src={PRACTICE.images.profile} alt={PRACTICE.name} />
                        <div class="university-card">
                            <div class="university-icon">{ icon(IconKind::ShieldCheck, 32) }</div>
                            <div>
                                <p class="university-name">{PRACTICE.university}</p>
                                <p class="university-full">{PRACTICE.university_full}</p>
                            </div>
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={STAGGER_MS}>
                        <h2 class="eyebrow">{"Sobre o Especialista"}</h2>
                        <h3 class="section-title">{PRACTICE.name}</h3>
                        <p class="about-title">{PRACTICE.title}</p>
                        <p class="lead">
                            {format!("Referência em cirurgia oral em São Paulo do Potengi, o {} combina excelência acadêmica com uma abordagem prática e acolhedora.", PRACTICE.name)}
                        </p>
                        <p>
                            {"Graduado por uma das instituições mais respeitadas do país (UFRN), dedica-se a devolver o conforto e a estética do sorriso aos seus pacientes através de procedimentos seguros e minimamente invasivos."}
                        </p>
                        <ul class="check-list">
                            { for ABOUT_CREDENTIALS.iter().map(|item| html! {
                                <li>{ icon(IconKind::CheckCircle, 20) }<span>{*item}</span></li>
                            }) }
                        </ul>
                        <div class="stats">
                            { for ABOUT_STATS.iter().map(|(value, label)| html! {
                                <div class="stat">
                                    <span class="stat-value">{*value}</span>
                                    <span class="stat-label">{*label}</span>
                                </div>
                            }) }
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section id={Section::Services.anchor()} class="services">
                <div class="container">
                    <FadeIn class={classes!("section-heading")}>
                        <h2 class="eyebrow">{"Tratamentos"}</h2>
                        <h3 class="section-title">{"Cuidado Integral para sua Saúde Bucal"}</h3>
                        <p>{"Utilizamos as técnicas mais modernas para garantir resultados eficazes e uma recuperação tranquila."}</p>
                    </FadeIn>
                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(idx, service)| html! {
                            <FadeIn key={service.id} delay_ms={STAGGER_MS * idx as u32} class={classes!("service-card")}>
                                <div class="service-icon">{ icon(service.icon, 32) }</div>
                                <h4>{service.title}</h4>
                                <p>{service.short_desc}</p>
                                <button class="service-details" onclick={open_service(*service)}>
                                    {"Saiba mais"}
                                    { icon(IconKind::ArrowRight, 16) }
                                </button>
                            </FadeIn>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Environment.anchor()} class="environment">
                <div class="container two-columns">
                    <FadeIn>
                        <h2 class="eyebrow">{"Nosso Espaço"}</h2>
                        <h3 class="section-title">{"Conforto e Tecnologia em São Paulo do Potengi"}</h3>
                        <p>{"Nosso consultório foi projetado para eliminar a ansiedade típica de visitas ao dentista. Um ambiente climatizado, moderno e acolhedor espera por você."}</p>
                        <div class="amenities">
                            { for AMENITIES.iter().enumerate().map(|(idx, item)| html! {
                                <FadeIn delay_ms={100 * idx as u32} class={classes!("amenity")}>
                                    <div class="amenity-dot"></div>
                                    <span>{*item}</span>
                                </FadeIn>
                            }) }
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={STAGGER_MS} class={classes!("environment-photo")}>
                        <img src={PRACTICE.images.environment} alt="Consultório" />
                        <div class="environment-caption">
                            { icon(IconKind::MapPin, 20) }
                            {"Localização privilegiada"}
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section id={Section::Contact.anchor()} class="contact">
                <div class="container two-columns">
                    <FadeIn>
                        <h2 class="eyebrow light">{"Fale Conosco"}</h2>
                        <h3 class="section-title light">{"Pronto para transformar seu sorriso?"}</h3>
                        <p class="contact-lead">
                            {"Preencha o formulário ao lado e você será redirecionado automaticamente para o nosso WhatsApp já com a mensagem pronta. Simples e rápido."}
                        </p>
                        <div class="contact-items">
                            { for contact_items(&PRACTICE).into_iter().enumerate().map(|(idx, item)| html! {
                                <FadeIn delay_ms={STAGGER_MS * idx as u32} class={classes!("contact-item")}>
                                    <div class="contact-icon">{ icon(item.icon, 24) }</div>
                                    <div>
                                        <h4>{item.title.clone()}</h4>
                                        {
                                            match (item.link, item.link_text) {
                                                (Some(link), Some(link_text)) => html! {
                                                    <>
                                                        <p>{item.text}</p>
                                                        <a href={link} target="_blank" rel="noreferrer" class="contact-map">{link_text}</a>
                                                    </>
                                                },
                                                (Some(link), None) => html! {
                                                    <a href={link} target="_blank" rel="noreferrer" class="contact-link">{item.text}</a>
                                                },
                                                _ => html! { <p>{item.text}</p> },
                                            }
                                        }
                                    </div>
                                </FadeIn>
                            }) }
                        </div>
                    </FadeIn>
                    <FadeIn delay_ms={STAGGER_MS}>
                        <ScheduleForm />
                    </FadeIn>
                </div>
            </section>

            <footer class="site-footer">
                <div class="container footer-content">
                    <div>
                        <h2>{PRACTICE.name}</h2>
                        <p>{"Cirurgião Dentista - "}<span class="footer-cro">{PRACTICE.cro}</span></p>
                        <p>{format!("© {} Todos os direitos reservados.", year)}</p>
                    </div>
                    <div class="footer-credit">
                        <a href={CREDITS.site_url} target="_blank" rel="noreferrer">
                            <span>{"Desenvolvido por "}<strong>{CREDITS.name}</strong></span>
                            <div class="pulse-dot"></div>
                        </a>
                        <p>{"Alta Performance Web"}</p>
                    </div>
                </div>
            </footer>

            if let Some(service) = overlay.active_service {
                <ServiceModal service={service} on_close={on_close_service} />
            }

            <DevPopup phase={overlay.popup} on_close={on_close_popup} />

            <style>
                {r#"
                    .site {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #1e293b;
                        background: white;
                        overflow-x: hidden;
                    }
                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        position: relative;
                        z-index: 1;
                    }
                    .two-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .reveal {
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }
                    .reveal-hidden {
                        opacity: 0;
                        transform: translateY(5rem);
                    }
                    .reveal-visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .eyebrow {
                        color: #0d9488;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.025em;
                        font-size: 0.875rem;
                        margin-bottom: 0.5rem;
                    }
                    .eyebrow.light {
                        color: #2dd4bf;
                    }
                    .section-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #0f172a;
                        margin: 0 0 1.5rem;
                    }
                    .section-title.light {
                        color: white;
                    }

                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding-top: 5rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: brightness(0.9);
                        animation: heroZoom 1.5s ease-out;
                    }
                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, white, rgba(255, 255, 255, 0.7), transparent);
                    }
                    .hero-content {
                        width: 100%;
                    }
                    .hero-content > .reveal {
                        max-width: 42rem;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: #ccfbf1;
                        color: #115e59;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 {
                        font-size: 4.5rem;
                        line-height: 1.1;
                        color: #0f172a;
                        margin: 0 0 1.5rem;
                    }
                    .gradient-text {
                        background: linear-gradient(to right, #0d9488, #06b6d4);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #475569;
                        line-height: 1.7;
                        max-width: 32rem;
                        margin-bottom: 2rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .primary-cta, .secondary-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 0.75rem;
                        font-size: 1.125rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: transform 0.2s;
                    }
                    .primary-cta:hover, .secondary-cta:hover {
                        transform: scale(1.05);
                    }
                    .primary-cta {
                        background: #0d9488;
                        color: white;
                        box-shadow: 0 20px 25px rgba(13, 148, 136, 0.3);
                    }
                    .secondary-cta {
                        border: 2px solid #e2e8f0;
                        color: #334155;
                        background: rgba(255, 255, 255, 0.5);
                    }

                    .about, .services, .environment, .contact {
                        padding: 6rem 0;
                    }
                    .about-portrait {
                        position: relative;
                    }
                    .portrait-shadow {
                        position: absolute;
                        inset: 0;
                        background: #0d9488;
                        border-radius: 1rem;
                        transform: translate(1rem, 1rem);
                    }
                    .about-portrait img {
                        position: relative;
                        width: 100%;
                        height: 500px;
                        object-fit: cover;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .university-card {
                        position: absolute;
                        bottom: -1.5rem;
                        left: -1.5rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        background: white;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        max-width: 20rem;
                    }
                    .university-icon {
                        display: flex;
                        background: #ccfbf1;
                        color: #0d9488;
                        padding: 0.75rem;
                        border-radius: 9999px;
                    }
                    .university-name {
                        font-weight: 700;
                        color: #0f172a;
                        margin: 0;
                    }
                    .university-full {
                        font-size: 0.75rem;
                        color: #64748b;
                        margin: 0;
                    }
                    .about-title {
                        color: #0f766e;
                        font-weight: 600;
                        margin: -1rem 0 1.5rem;
                    }
                    .lead {
                        font-size: 1.125rem;
                        color: #475569;
                        line-height: 1.7;
                    }
                    .check-list {
                        list-style: none;
                        padding: 0;
                        margin: 2rem 0;
                    }
                    .check-list li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                        font-weight: 500;
                        color: #334155;
                    }
                    .check-list .icon {
                        color: #14b8a6;
                        flex-shrink: 0;
                    }
                    .stats {
                        display: flex;
                        gap: 1.5rem;
                        padding-top: 1rem;
                        border-top: 1px solid #f1f5f9;
                    }
                    .stat {
                        display: flex;
                        flex-direction: column;
                    }
                    .stat-value {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .stat-label {
                        font-size: 0.875rem;
                        color: #64748b;
                    }

                    .services {
                        background: #f8fafc;
                    }
                    .section-heading {
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto 4rem;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .service-card {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        background: white;
                        border-radius: 1rem;
                        padding: 2rem;
                        border: 1px solid #f1f5f9;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                    }
                    .service-card:hover {
                        transform: translateY(-10px);
                    }
                    .service-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                        margin-bottom: 1.5rem;
                        border-radius: 0.75rem;
                        background: #0d9488;
                        color: white;
                    }
                    .service-card h4 {
                        font-size: 1.25rem;
                        color: #0f172a;
                        margin: 0 0 0.75rem;
                    }
                    .service-card p {
                        flex-grow: 1;
                        color: #475569;
                        line-height: 1.7;
                    }
                    .service-details {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                        background: none;
                        border: none;
                        padding: 0;
                        color: #0d9488;
                        font-weight: 700;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        cursor: pointer;
                    }

                    .amenities {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .amenity {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #f8fafc;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .amenity-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #14b8a6;
                    }
                    .environment-photo {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .environment-photo img {
                        width: 100%;
                        height: 400px;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .environment-photo:hover img {
                        transform: scale(1.1);
                    }
                    .environment-caption {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: flex-end;
                        gap: 0.5rem;
                        padding: 2rem;
                        color: white;
                        font-size: 1.125rem;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                    }

                    .contact {
                        background: #134e4a;
                    }
                    .contact-lead {
                        color: #ccfbf1;
                        font-size: 1.125rem;
                        margin-bottom: 2rem;
                    }
                    .contact-item {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        color: white;
                        margin-bottom: 1.5rem;
                    }
                    .contact-item h4 {
                        margin: 0;
                        font-size: 1.125rem;
                    }
                    .contact-item p {
                        margin: 0;
                        color: #ccfbf1;
                    }
                    .contact-icon {
                        display: flex;
                        background: #115e59;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                    }
                    .contact-map {
                        display: block;
                        margin-top: 0.25rem;
                        color: #2dd4bf;
                        font-size: 0.875rem;
                    }
                    .contact-link {
                        color: #ccfbf1;
                        font-size: 1.125rem;
                        text-decoration: none;
                    }
                    .schedule-form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        background: white;
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .schedule-form h4 {
                        font-size: 1.5rem;
                        color: #0f172a;
                        margin: 0 0 1rem;
                    }
                    .schedule-form label {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #334155;
                        margin-top: 0.75rem;
                    }
                    .schedule-form input, .schedule-form select {
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid #cbd5e1;
                        background: white;
                        font-size: 1rem;
                    }
                    .schedule-form input:focus, .schedule-form select:focus {
                        outline: none;
                        border-color: #14b8a6;
                        box-shadow: 0 0 0 2px #99f6e4;
                    }
                    .schedule-submit {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                        padding: 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #0d9488;
                        color: white;
                        font-weight: 700;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .schedule-note {
                        text-align: center;
                        font-size: 0.75rem;
                        color: #94a3b8;
                    }

                    .site-footer {
                        background: #0f172a;
                        color: #94a3b8;
                        padding: 3rem 0;
                        border-top: 1px solid #1e293b;
                    }
                    .footer-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                        flex-wrap: wrap;
                    }
                    .footer-content h2 {
                        color: white;
                        margin: 0 0 0.5rem;
                    }
                    .footer-content p {
                        font-size: 0.875rem;
                        margin: 0.25rem 0;
                    }
                    .footer-cro {
                        color: #2dd4bf;
                        font-weight: 600;
                    }
                    .footer-credit {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                        gap: 0.5rem;
                    }
                    .footer-credit a {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #1e293b;
                        color: #94a3b8;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        text-decoration: none;
                    }
                    .pulse-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #22c55e;
                        animation: pulse 2s infinite;
                    }
                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }
                    @keyframes heroZoom {
                        from { transform: scale(1.1); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    @media (max-width: 1024px) {
                        .two-columns {
                            grid-template-columns: 1fr;
                        }
                        .university-card {
                            display: none;
                        }
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 3rem;
                        }
                        .services-grid {
                            grid-template-columns: 1fr;
                        }
                        .footer-content {
                            flex-direction: column;
                            text-align: center;
                        }
                        .footer-credit {
                            align-items: center;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

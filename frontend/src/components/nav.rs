use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config::PRACTICE;
use crate::content::{IconKind, Section};
use crate::icons::icon;
use crate::navigation::is_scrolled;
use crate::subscription::WindowListener;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_toggle, on_navigate } = props;
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |_| {
            let read_scroll = move || {
                if let Some(window) = web_sys::window() {
                    scrolled.set(is_scrolled(window.scroll_y().unwrap_or(0.0)));
                }
            };
            read_scroll();
            let listener = WindowListener::new("scroll", move |_| read_scroll());
            move || drop(listener)
        }, ());
    }

    let link_to = |section: Section| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    let toggle_menu = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={Section::Home.href()} onclick={link_to(Section::Home)} class="nav-logo">
                    <img src={PRACTICE.images.logo} width="48" height="24" alt="Logo" />
                    <div>
                        <span class="nav-name">{PRACTICE.name}</span>
                        <span class="nav-tagline">{PRACTICE.tagline}</span>
                    </div>
                </a>

                <div class="nav-links">
                    { for Section::ALL.iter().map(|section| html! {
                        <a key={section.anchor()} href={section.href()} onclick={link_to(*section)} class="nav-link">
                            {section.label()}
                        </a>
                    }) }
                    <a href={Section::Contact.href()} onclick={link_to(Section::Contact)} class="nav-cta">
                        {"Agendar"}
                    </a>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    { icon(if *menu_open { IconKind::Close } else { IconKind::Menu }, 28) }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { for Section::ALL.iter().map(|section| html! {
                        <a key={section.anchor()} href={section.href()} onclick={link_to(*section)} class="mobile-link">
                            {section.label()}
                        </a>
                    }) }
                </div>
            }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        border-bottom: 1px solid transparent;
                        transition: all 0.5s ease-in-out;
                    }
                    .top-nav.scrolled {
                        padding: 0.5rem 0;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                        border-bottom-color: #f1f5f9;
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                        transform-origin: left;
                        transition: transform 0.5s;
                    }
                    .top-nav.scrolled .nav-logo {
                        transform: scale(0.9);
                    }
                    .nav-name {
                        display: block;
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .nav-tagline {
                        font-size: 0.75rem;
                        font-weight: 600;
                        letter-spacing: 0.05em;
                        color: #0d9488;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                        align-items: center;
                    }
                    .nav-link {
                        color: #475569;
                        text-decoration: none;
                        text-transform: uppercase;
                        font-size: 0.875rem;
                        font-weight: 500;
                        letter-spacing: 0.025em;
                    }
                    .nav-link:hover {
                        color: #0d9488;
                    }
                    .nav-cta {
                        background: #0d9488;
                        color: white;
                        padding: 0.6rem 1.5rem;
                        border-radius: 9999px;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(13, 148, 136, 0.2);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #475569;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        background: white;
                        border-top: 1px solid #e2e8f0;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        padding: 0.5rem 1rem 1.5rem;
                        animation: menuOpen 0.3s ease-out;
                    }
                    .mobile-link {
                        display: block;
                        padding: 1rem 0.75rem;
                        color: #334155;
                        text-decoration: none;
                        border-bottom: 1px solid #f8fafc;
                    }
                    @keyframes menuOpen {
                        from { opacity: 0; transform: translateY(-8px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

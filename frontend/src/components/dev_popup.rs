use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::CREDITS;
use crate::content::IconKind;
use crate::icons::icon;
use crate::overlay::PopupPhase;

#[derive(Properties, PartialEq)]
pub struct DevPopupProps {
    pub phase: PopupPhase,
    pub on_close: Callback<()>,
}

#[function_component(DevPopup)]
pub fn dev_popup(props: &DevPopupProps) -> Html {
    if !props.phase.is_mounted() {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={classes!("dev-popup", props.phase.is_dismissed().then(|| "leaving"))}>
            <div class="dev-popup-card">
                <div class="dev-popup-glow"></div>
                <button class="dev-popup-close" onclick={close} aria-label="Fechar">
                    { icon(IconKind::Close, 14) }
                </button>
                <div class="dev-popup-body">
                    <div class="dev-popup-badge">{ icon(IconKind::Code, 24) }</div>
                    <div>
                        <div class="dev-popup-heading">
                            <h5>{CREDITS.name}</h5>
                            <span class="dev-popup-pro">{"PRO"}</span>
                        </div>
                        <p>{"Gostou deste site? Vamos criar uma presença digital profissional para o seu negócio."}</p>
                        <div class="dev-popup-links">
                            <a href={CREDITS.whatsapp_url} target="_blank" rel="noreferrer">
                                {"WhatsApp "}{ icon(IconKind::ExternalLink, 10) }
                            </a>
                            <a href={CREDITS.instagram_url} target="_blank" rel="noreferrer">
                                {"Instagram "}{ icon(IconKind::ExternalLink, 10) }
                            </a>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .dev-popup {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        animation: popupIn 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                        transition: all 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .dev-popup.leaving {
                        opacity: 0;
                        transform: translateY(3rem) scale(0.95);
                    }
                    .dev-popup-card {
                        position: relative;
                        overflow: hidden;
                        max-width: 24rem;
                        padding: 1.25rem;
                        border-radius: 1rem;
                        background: rgba(15, 23, 42, 0.95);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(51, 65, 85, 0.5);
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .dev-popup-glow {
                        position: absolute;
                        top: -3rem;
                        right: -3rem;
                        width: 8rem;
                        height: 8rem;
                        border-radius: 9999px;
                        background: rgba(59, 130, 246, 0.2);
                        filter: blur(40px);
                    }
                    .dev-popup-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        color: #64748b;
                        padding: 0.375rem;
                        border-radius: 9999px;
                        cursor: pointer;
                        z-index: 10;
                    }
                    .dev-popup-close:hover {
                        color: white;
                        background: #1e293b;
                    }
                    .dev-popup-body {
                        position: relative;
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        padding-right: 1rem;
                    }
                    .dev-popup-badge {
                        display: flex;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        color: white;
                        background: linear-gradient(135deg, #2563eb, #4f46e5);
                    }
                    .dev-popup-heading {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .dev-popup-heading h5 {
                        margin: 0;
                        color: white;
                        font-size: 0.875rem;
                    }
                    .dev-popup-pro {
                        font-size: 10px;
                        font-family: monospace;
                        color: #60a5fa;
                        border: 1px solid rgba(59, 130, 246, 0.2);
                        padding: 0.1rem 0.375rem;
                        border-radius: 0.25rem;
                    }
                    .dev-popup-body p {
                        color: #94a3b8;
                        font-size: 0.75rem;
                        line-height: 1.6;
                    }
                    .dev-popup-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .dev-popup-links a {
                        display: flex;
                        align-items: center;
                        gap: 0.375rem;
                        color: #cbd5e1;
                        font-size: 0.75rem;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .dev-popup-links a:hover {
                        color: white;
                        text-decoration: underline;
                    }
                    @keyframes popupIn {
                        from { opacity: 0; transform: translateY(3rem) scale(0.95); }
                        to { opacity: 1; transform: translateY(0) scale(1); }
                    }
                "#}
            </style>
        </div>
    }
}

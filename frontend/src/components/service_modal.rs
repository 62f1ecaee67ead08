use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::composer::{deep_link, open_deep_link, service_message};
use crate::config::PRACTICE;
use crate::content::{IconKind, ServiceDescriptor};
use crate::icons::icon;
use crate::subscription::{is_cancel_key, WindowListener};

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub service: ServiceDescriptor,
    pub on_close: Callback<()>,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let service = props.service;

    // Escape closes the modal while it is mounted
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::new("keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        if is_cancel_key(&event.key()) {
                            on_close.emit(());
                        }
                    }
                });
                move || drop(listener)
            },
            service.id,
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let schedule = Callback::from(move |_: MouseEvent| {
        open_deep_link(&deep_link(&PRACTICE, &service_message(&PRACTICE, service.title)));
    });

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-surface" onclick={keep_open}>
                <div class="modal-header">
                    <button class="modal-close" onclick={close.clone()} aria-label="Fechar">
                        { icon(IconKind::Close, 20) }
                    </button>
                    <div class="modal-title">
                        <div class="modal-icon">{ icon(service.icon, 28) }</div>
                        <h3>{service.title}</h3>
                    </div>
                </div>
                <div class="modal-body">
                    <p class="modal-description">{service.full_desc}</p>
                    <h4 class="modal-benefits-title">
                        { icon(IconKind::Activity, 18) }
                        {"Principais Benefícios"}
                    </h4>
                    <ul class="modal-benefits">
                        { for service.benefits.iter().map(|benefit| html! {
                            <li>
                                { icon(IconKind::CheckCircle, 18) }
                                {*benefit}
                            </li>
                        }) }
                    </ul>
                    <div class="modal-actions">
                        <button class="modal-schedule" onclick={schedule}>
                            {"Agendar este tratamento"}
                            { icon(IconKind::ArrowRight, 18) }
                        </button>
                        <button class="modal-back" onclick={close}>
                            {"Voltar"}
                        </button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(15, 23, 42, 0.6);
                        backdrop-filter: blur(4px);
                        animation: modalFade 0.2s ease-out;
                    }
                    .modal-surface {
                        background: white;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        max-width: 32rem;
                        width: 100%;
                        overflow: hidden;
                        animation: modalPop 0.25s ease-out;
                    }
                    .modal-header {
                        position: relative;
                        background: #0d9488;
                        color: white;
                        padding: 1.5rem;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #ccfbf1;
                        border-radius: 9999px;
                        padding: 0.25rem;
                        cursor: pointer;
                    }
                    .modal-title {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .modal-title h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin: 0;
                    }
                    .modal-icon {
                        background: rgba(255, 255, 255, 0.2);
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        display: flex;
                    }
                    .modal-body {
                        padding: 2rem;
                    }
                    .modal-description {
                        color: #475569;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .modal-benefits-title {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #0f766e;
                        font-weight: 700;
                    }
                    .modal-benefits {
                        list-style: none;
                        padding: 0;
                        margin: 1rem 0 2rem;
                    }
                    .modal-benefits li {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        color: #334155;
                        margin-bottom: 0.75rem;
                    }
                    .modal-benefits li .icon {
                        color: #14b8a6;
                        flex-shrink: 0;
                    }
                    .modal-actions {
                        display: flex;
                        gap: 0.75rem;
                        flex-wrap: wrap;
                    }
                    .modal-schedule, .modal-back {
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .modal-schedule {
                        background: #0d9488;
                        color: white;
                        border: none;
                    }
                    .modal-back {
                        background: white;
                        color: #475569;
                        border: 1px solid #e2e8f0;
                    }
                    @keyframes modalFade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @keyframes modalPop {
                        from { opacity: 0; transform: translateY(20px) scale(0.9); }
                        to { opacity: 1; transform: translateY(0) scale(1); }
                    }
                "#}
            </style>
        </div>
    }
}

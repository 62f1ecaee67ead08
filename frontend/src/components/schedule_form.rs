use log::{debug, info};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::composer::{deep_link, open_deep_link, schedule_message, ScheduleRequest};
use crate::config::PRACTICE;
use crate::content::{service_options, IconKind, GENERAL_EVALUATION};
use crate::icons::icon;

#[function_component(ScheduleForm)]
pub fn schedule_form() -> Html {
    let name = use_state(String::new);
    let service = use_state(|| GENERAL_EVALUATION.to_string());
    let date = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_service = {
        let service = service.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            service.set(select.value());
        })
    };
    let on_date = {
        let date = date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let service = service.clone();
        let date = date.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match ScheduleRequest::from_form(&name, &service, &date) {
                Some(request) => {
                    info!("Sending schedule request for {}", request.service);
                    open_deep_link(&deep_link(&PRACTICE, &schedule_message(&PRACTICE, &request)));
                }
                None => debug!("Schedule form submitted without a name"),
            }
        })
    };

    html! {
        <form class="schedule-form" onsubmit={onsubmit}>
            <h4>{"Agendamento Online"}</h4>

            <label for="schedule-name">{"Nome Completo"}</label>
            <input
                id="schedule-name"
                type="text"
                name="name"
                required=true
                placeholder="Ex: Maria Silva"
                value={(*name).clone()}
                oninput={on_name}
            />

            <label for="schedule-service">{"Serviço de Interesse"}</label>
            <select id="schedule-service" name="service" onchange={on_service}>
                { for service_options().into_iter().map(|option| html! {
                    <option value={option} selected={*service == option}>{option}</option>
                }) }
            </select>

            <label for="schedule-date">{"Data de Preferência (Opcional)"}</label>
            <input
                id="schedule-date"
                type="date"
                name="date"
                value={(*date).clone()}
                oninput={on_date}
            />

            <button type="submit" class="schedule-submit">
                {"Agendar via WhatsApp"}
                { icon(IconKind::ArrowRight, 20) }
            </button>
            <p class="schedule-note">
                {"Seus dados serão enviados diretamente para o WhatsApp do consultório."}
            </p>
        </form>
    }
}

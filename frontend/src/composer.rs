use log::{debug, warn};
use web_sys::window;

use crate::config::Practice;
use crate::content::GENERAL_EVALUATION;

pub const DATE_FALLBACK: &str = "A combinar";

/// Values read from the scheduling form for a single submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleRequest {
    pub name: String,
    pub service: String,
    pub date: Option<String>,
}

impl ScheduleRequest {
    /// Returns `None` for a blank name, matching the form's required field.
    pub fn from_form(name: &str, service: &str, date: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let service = match service.trim() {
            "" => GENERAL_EVALUATION,
            s => s,
        };
        let date = Some(date.trim()).filter(|d| !d.is_empty());

        Some(Self {
            name: name.to_string(),
            service: service.to_string(),
            date: date.map(str::to_string),
        })
    }
}

pub fn schedule_message(practice: &Practice, request: &ScheduleRequest) -> String {
    format!(
        "*Olá, {}!*\n\nMeu nome é *{}*.\nGostaria de agendar/saber mais sobre: *{}*.\nPreferência de horário: {}\n\n_Enviado pelo site_",
        practice.greeting,
        request.name,
        request.service,
        request.date.as_deref().unwrap_or(DATE_FALLBACK),
    )
}

pub fn service_message(practice: &Practice, service_title: &str) -> String {
    format!(
        "*Olá, {}!*\n\nEstou no site e vi os detalhes sobre *{}*.\nGostaria de agendar uma avaliação para este tratamento.",
        practice.greeting, service_title,
    )
}

pub fn chat_link(practice: &Practice) -> String {
    format!("https://{}/{}", practice.messaging_host, practice.whatsapp)
}

pub fn deep_link(practice: &Practice, message: &str) -> String {
    format!("{}?text={}", chat_link(practice), urlencoding::encode(message))
}

/// Opens `url` in a new browsing context. A blocked window is not reported.
pub fn open_deep_link(url: &str) {
    let Some(window) = window() else {
        warn!("No window available to open deep link");
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => debug!("Opened deep link {}", url),
        Ok(None) => warn!("Deep link window was blocked"),
        Err(_) => warn!("Failed to open deep link"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PRACTICE;

    fn decoded_text(url: &str) -> String {
        let (_, text) = url.split_once("?text=").expect("link carries a text parameter");
        urlencoding::decode(text).expect("valid percent encoding").into_owned()
    }

    #[test]
    fn schedule_link_round_trips_all_fields() {
        let request = ScheduleRequest::from_form("Maria Silva", "Cirurgia de Siso", "2024-06-10").unwrap();
        let url = deep_link(&PRACTICE, &schedule_message(&PRACTICE, &request));

        assert!(url.starts_with("https://wa.me/5584991627325?text="));
        let text = decoded_text(&url);
        assert!(text.contains("Olá, Dr. Pedro!"));
        assert!(text.contains("Meu nome é *Maria Silva*."));
        assert!(text.contains("Gostaria de agendar/saber mais sobre: *Cirurgia de Siso*."));
        assert!(text.contains("Preferência de horário: 2024-06-10"));
        assert!(text.contains("Enviado pelo site"));
        assert!(text.contains("\n\n"));
    }

    #[test]
    fn empty_date_falls_back_to_literal() {
        let request = ScheduleRequest::from_form("Maria Silva", "Cirurgia de Siso", "  ").unwrap();
        assert_eq!(request.date, None);

        let text = decoded_text(&deep_link(&PRACTICE, &schedule_message(&PRACTICE, &request)));
        assert!(text.contains("Preferência de horário: A combinar"));
    }

    #[test]
    fn encoded_link_is_free_of_raw_reserved_characters() {
        let request = ScheduleRequest::from_form("João & Ana", "Outros", "").unwrap();
        let url = deep_link(&PRACTICE, &schedule_message(&PRACTICE, &request));
        let (_, query) = url.split_once("?text=").unwrap();

        assert!(!query.contains(' '));
        assert!(!query.contains('&'));
        assert!(!query.contains('\n'));
        assert!(decoded_text(&url).contains("*João & Ana*"));
    }

    #[test]
    fn composition_is_deterministic() {
        let request = ScheduleRequest::from_form("Maria Silva", "Estética Dental", "2024-06-10").unwrap();
        let first = deep_link(&PRACTICE, &schedule_message(&PRACTICE, &request));
        let second = deep_link(&PRACTICE, &schedule_message(&PRACTICE, &request.clone()));
        assert_eq!(first, second);
    }

    #[test]
    fn blank_name_is_rejected_and_service_defaults() {
        assert!(ScheduleRequest::from_form("   ", "Estética Dental", "").is_none());

        let request = ScheduleRequest::from_form(" Maria ", "", "").unwrap();
        assert_eq!(request.name, "Maria");
        assert_eq!(request.service, GENERAL_EVALUATION);
    }

    #[test]
    fn service_link_mentions_only_the_service() {
        let text = decoded_text(&deep_link(&PRACTICE, &service_message(&PRACTICE, "Estética Dental")));
        assert!(text.contains("vi os detalhes sobre *Estética Dental*"));
        assert!(!text.contains("Meu nome"));
        assert!(!text.contains(DATE_FALLBACK));
    }

    #[test]
    fn chat_link_has_no_text() {
        assert_eq!(chat_link(&PRACTICE), "https://wa.me/5584991627325");
    }
}

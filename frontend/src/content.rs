use serde::Serialize;

use crate::config::Practice;

/// Icon identifiers. The rendering layer resolves them in `icons`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Menu,
    Close,
    Calendar,
    MapPin,
    Phone,
    Instagram,
    CheckCircle,
    ArrowRight,
    Smile,
    User,
    Star,
    ShieldCheck,
    Code,
    ExternalLink,
    Activity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    pub id: u32,
    pub title: &'static str,
    pub short_desc: &'static str,
    pub full_desc: &'static str,
    pub benefits: &'static [&'static str],
    pub icon: IconKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LocationDescriptor {
    pub city: &'static str,
    pub address: &'static str,
    pub map_link: &'static str,
}

pub const SERVICES: [ServiceDescriptor; 3] = [
    ServiceDescriptor {
        id: 1,
        title: "Cirurgia Oral Menor",
        short_desc: "Extração de sisos e dentes inclusos com técnicas minimamente traumáticas.",
        full_desc: "Realizamos procedimentos cirúrgicos de pequeno porte com alto rigor técnico e biossegurança. Nossa abordagem foca no conforto do paciente, utilizando técnicas minimamente invasivas para a extração de sisos, dentes inclusos e pequenas correções ósseas, garantindo uma recuperação mais rápida e tranquila.",
        benefits: &[
            "Extração segura de dentes do siso impactados",
            "Recuperação acelerada com protocolos modernos",
            "Prevenção de inflamações, cistos e dores futuras",
            "Sedação consciente (opcional para pacientes ansiosos)",
        ],
        icon: IconKind::User,
    },
    ServiceDescriptor {
        id: 2,
        title: "Profilaxia e Prevenção",
        short_desc: "Limpeza profunda e check-ups regulares para manter seu sorriso saudável.",
        full_desc: "A base de um sorriso bonito é a saúde. Nossas consultas de prevenção vão muito além de uma limpeza simples. Realizamos raspagem detalhada, polimento coronário e aplicação de flúor, além de diagnóstico precoce de cáries e doenças gengivais com equipamentos de alta precisão.",
        benefits: &[
            "Remoção eficiente de tártaro e placa bacteriana",
            "Prevenção eficaz de gengivite e periodontite",
            "Hálito mais fresco e saudável",
            "Economia a longo prazo evitando tratamentos complexos",
        ],
        icon: IconKind::Smile,
    },
    ServiceDescriptor {
        id: 3,
        title: "Estética Dental",
        short_desc: "Clareamento e procedimentos estéticos para renovar sua autoestima.",
        full_desc: "Transforme seu sorriso com tratamentos estéticos personalizados. Trabalhamos com clareamento dental seguro e eficaz, além de facetas que corrigem imperfeições de forma e cor. Nosso objetivo é entregar um resultado natural que harmonize com as características do seu rosto.",
        benefits: &[
            "Sorriso visivelmente mais branco e iluminado",
            "Correção de pequenos diastemas (espaços) e fraturas",
            "Planejamento digital do sorriso para previsibilidade",
            "Aumento imediato da autoestima e confiança",
        ],
        icon: IconKind::Star,
    },
];

/// In-page sections, in navigation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Services,
    Environment,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Environment,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Environment => "environment",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Início",
            Section::About => "Sobre",
            Section::Services => "Serviços",
            Section::Environment => "Ambiente",
            Section::Contact => "Contato",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

pub const GENERAL_EVALUATION: &str = "Avaliação Geral";
pub const OTHER_SERVICE: &str = "Outros";

/// Options of the service select, in display order.
pub fn service_options() -> Vec<&'static str> {
    let mut options = Vec::with_capacity(SERVICES.len() + 2);
    options.push(GENERAL_EVALUATION);
    options.extend(SERVICES.iter().map(|service| service.title));
    options.push(OTHER_SERVICE);
    options
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactItem {
    pub icon: IconKind,
    pub title: String,
    pub text: &'static str,
    pub link: Option<&'static str>,
    pub link_text: Option<&'static str>,
}

pub fn contact_items(practice: &Practice) -> Vec<ContactItem> {
    let mut items: Vec<ContactItem> = practice
        .locations
        .iter()
        .map(|location| ContactItem {
            icon: IconKind::MapPin,
            title: format!("Atendimento em {}", location.city),
            text: location.address,
            link: Some(location.map_link),
            link_text: Some("Ver no mapa"),
        })
        .collect();

    items.push(ContactItem {
        icon: IconKind::Instagram,
        title: "Siga-nos".to_string(),
        text: practice.instagram,
        link: Some(practice.instagram_url),
        link_text: None,
    });
    items.push(ContactItem {
        icon: IconKind::Calendar,
        title: "Horário de Atendimento".to_string(),
        text: practice.office_hours,
        link: None,
        link_text: None,
    });
    items
}

pub const ABOUT_CREDENTIALS: [&str; 4] = [
    "Cirurgião-Dentista formado pela UFRN",
    "Aperfeiçoamento em Cirurgia Oral",
    "Atendimento Humanizado e Personalizado",
    "Protocolos rigorosos de biossegurança",
];

pub const ABOUT_STATS: [(&str, &str); 2] = [("500+", "Pacientes Atendidos"), ("100%", "Dedicação")];

pub const AMENITIES: [&str; 6] = [
    "Ambiente Climatizado",
    "Wi-Fi Gratuito",
    "Estacionamento Fácil",
    "Equipamentos Digitais",
    "Acessibilidade",
    "Sala de Espera Confortável",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PRACTICE;

    #[test]
    fn service_set_is_fixed_with_sequential_ids() {
        assert_eq!(SERVICES.len(), 3);
        for (idx, service) in SERVICES.iter().enumerate() {
            assert_eq!(service.id as usize, idx + 1);
            assert!(!service.benefits.is_empty());
        }
    }

    #[test]
    fn navigation_sections_follow_page_order() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "about", "services", "environment", "contact"]);
        assert_eq!(Section::Services.href(), "#services");
        assert_eq!(Section::Environment.label(), "Ambiente");
    }

    #[test]
    fn service_options_wrap_titles_with_general_and_other() {
        let options = service_options();
        assert_eq!(options.first(), Some(&GENERAL_EVALUATION));
        assert_eq!(options.last(), Some(&OTHER_SERVICE));
        assert_eq!(&options[1..4], &["Cirurgia Oral Menor", "Profilaxia e Prevenção", "Estética Dental"]);
    }

    #[test]
    fn contact_items_list_every_location_then_social_then_hours() {
        let items = contact_items(&PRACTICE);
        assert_eq!(items.len(), PRACTICE.locations.len() + 2);

        assert_eq!(items[0].title, "Atendimento em São Paulo do Potengi");
        assert_eq!(items[0].link_text, Some("Ver no mapa"));
        assert_eq!(items[1].title, "Atendimento em Natal");

        let social = &items[items.len() - 2];
        assert_eq!(social.icon, IconKind::Instagram);
        assert_eq!(social.link, Some(PRACTICE.instagram_url));
        assert!(social.link_text.is_none());

        let hours = items.last().unwrap();
        assert_eq!(hours.icon, IconKind::Calendar);
        assert!(hours.link.is_none());
    }

    #[test]
    fn service_descriptor_serializes_icon_as_tag() {
        let value = serde_json::to_value(SERVICES[0]).unwrap();
        assert_eq!(value["icon"], "user");
        assert_eq!(value["title"], "Cirurgia Oral Menor");
        assert_eq!(value["benefits"].as_array().map(Vec::len), Some(4));

        let value = serde_json::to_value(Section::Contact).unwrap();
        assert_eq!(value, "contact");
        let value = serde_json::to_value(IconKind::ShieldCheck).unwrap();
        assert_eq!(value, "shield-check");
    }
}

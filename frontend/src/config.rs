use log::Level;

use crate::content::LocationDescriptor;

/// Editable practice data. Layout code only reads from here.
#[derive(Debug, PartialEq)]
pub struct Practice {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    /// Short form used in the greeting of outbound messages.
    pub greeting: &'static str,
    pub cro: &'static str,
    pub university: &'static str,
    pub university_full: &'static str,
    pub messaging_host: &'static str,
    /// Country code + area code + number, digits only.
    pub whatsapp: &'static str,
    pub instagram: &'static str,
    pub instagram_url: &'static str,
    pub office_hours: &'static str,
    pub service_area: &'static str,
    pub locations: &'static [LocationDescriptor],
    pub images: Images,
}

#[derive(Debug, PartialEq)]
pub struct Images {
    pub logo: &'static str,
    pub hero: &'static str,
    pub profile: &'static str,
    pub environment: &'static str,
}

/// Developer credit shown in the footer and the promotional popup.
#[derive(Debug, PartialEq)]
pub struct Credits {
    pub name: &'static str,
    pub site_url: &'static str,
    pub whatsapp_url: &'static str,
    pub instagram_url: &'static str,
}

pub const PRACTICE: Practice = Practice {
    name: "Dr. Pedro Elino",
    title: "Cirurgião-Dentista | Especialista em Cirurgia Oral",
    tagline: "CIRURGIÃO DENTISTA",
    greeting: "Dr. Pedro",
    cro: "CRO/RN 7949",
    university: "Formado pela UFRN",
    university_full: "Universidade Federal do Rio Grande do Norte",
    messaging_host: "wa.me",
    whatsapp: "5584991627325",
    instagram: "@pedroelino",
    instagram_url: "https://instagram.com/pedroelino",
    office_hours: "Segunda a Sexta: 08h às 18h",
    service_area: "SP do Potengi e Natal",
    locations: &[
        LocationDescriptor {
            city: "São Paulo do Potengi",
            address: "Rua Bento Urbano, 4026, sala 07 (No shopping de Apriginho)",
            map_link: "https://maps.app.goo.gl/8y1LEiuA2ARohon86",
        },
        LocationDescriptor {
            city: "Natal",
            address: "Rua Presidente José Bento, 721 (Na Clinica Odontomais)- Alecrim, Natal",
            map_link: "https://maps.app.goo.gl/hJbLRhmYt4J9barKA",
        },
    ],
    images: Images {
        logo: "/assets/drpedro2-logo.png",
        hero: "/assets/drpedro2.jpg",
        profile: "/assets/drpedro.jpg",
        environment: "/assets/consul.jpeg",
    },
};

pub const CREDITS: Credits = Credits {
    name: "UiCode.dev",
    site_url: "https://uicode.site",
    whatsapp_url: "https://wa.me/5511916474626",
    instagram_url: "https://instagram.com/uicode.dev",
};

pub fn page_title() -> String {
    format!("{} | Cirurgião Dentista em {}", PRACTICE.name, PRACTICE.service_area)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose overlay and timer traces when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

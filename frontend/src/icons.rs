use yew::prelude::*;

use crate::content::IconKind;

impl IconKind {
    /// Stroke paths on a 24x24 grid.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
            IconKind::Calendar => &[
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M16 2v4",
                "M8 2v4",
                "M3 10h18",
            ],
            IconKind::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            IconKind::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            IconKind::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            IconKind::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::Smile => &[
                "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
                "M8 14s1.5 2 4 2 4-2 4-2",
                "M9 9h.01",
                "M15 9h.01",
            ],
            IconKind::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M8 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
            ],
            IconKind::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            IconKind::ShieldCheck => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10", "m9 12 2 2 4-4"],
            IconKind::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            IconKind::ExternalLink => &[
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
                "M15 3h6v6",
                "M10 14 21 3",
            ],
            IconKind::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        }
    }
}

pub fn icon(kind: IconKind, size: u32) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="icon"
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { for kind.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

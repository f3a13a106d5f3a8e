use yew::prelude::*;

/// Every glyph the page draws. Resolved to inline SVG by [`Glyph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Activity,
    ArrowRight,
    BrainCircuit,
    CalendarRange,
    CheckCircle,
    ChevronDown,
    ClipboardCheck,
    Heart,
    HeartPulse,
    Medal,
    Menu,
    Microscope,
    MoreHorizontal,
    PlayCircle,
    Scan,
    Star,
    Zap,
}

enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
    Rect { x: f32, y: f32, w: f32, h: f32, rx: f32 },
    Polygon(&'static str),
}

use Shape::{Circle, Path, Polygon, Rect};

const HEART_OUTLINE: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z";

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::Activity => &[Path("M22 12h-4l-3 9L9 3l-3 9H2")],
            Icon::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            Icon::BrainCircuit => &[
                Path("M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"),
                Path("M9 13a4.5 4.5 0 0 0 3-4"),
                Path("M12 13h4"),
                Path("M12 18h6a2 2 0 0 1 2 2v1"),
                Path("M12 8h8"),
                Path("M16 8V5a2 2 0 0 1 2-2"),
                Circle(16.0, 13.0, 0.5),
                Circle(18.0, 3.0, 0.5),
                Circle(20.0, 21.0, 0.5),
                Circle(20.0, 8.0, 0.5),
            ],
            Icon::CalendarRange => &[
                Rect { x: 3.0, y: 4.0, w: 18.0, h: 18.0, rx: 2.0 },
                Path("M16 2v4"),
                Path("M3 10h18"),
                Path("M8 2v4"),
                Path("M17 14h-6"),
                Path("M13 18H7"),
                Path("M7 14h.01"),
                Path("M17 18h.01"),
            ],
            Icon::CheckCircle => &[Circle(12.0, 12.0, 10.0), Path("m9 12 2 2 4-4")],
            Icon::ChevronDown => &[Path("m6 9 6 6 6-6")],
            Icon::ClipboardCheck => &[
                Rect { x: 8.0, y: 2.0, w: 8.0, h: 4.0, rx: 1.0 },
                Path("M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"),
                Path("m9 14 2 2 4-4"),
            ],
            Icon::Heart => &[Path(HEART_OUTLINE)],
            Icon::HeartPulse => &[Path(HEART_OUTLINE), Path("M3.22 12H9.5l.5-1 2 4.5 2-7 1.5 3.5h5.27")],
            Icon::Medal => &[
                Path("M7.21 15 2.66 7.14a2 2 0 0 1 .13-2.2L4.4 2.8A2 2 0 0 1 6 2h12a2 2 0 0 1 1.6.8l1.6 2.14a2 2 0 0 1 .14 2.2L16.79 15"),
                Path("M11 12 5.12 2.2"),
                Path("m13 12 5.88-9.8"),
                Path("M8 7h8"),
                Circle(12.0, 17.0, 5.0),
                Path("M12 18v-2h-.5"),
            ],
            Icon::Menu => &[Path("M4 12h16"), Path("M4 6h16"), Path("M4 18h16")],
            Icon::Microscope => &[
                Path("M6 18h8"),
                Path("M3 22h18"),
                Path("M14 22a7 7 0 1 0 0-14h-1"),
                Path("M9 14h2"),
                Path("M9 12a2 2 0 0 1-2-2V6h6v4a2 2 0 0 1-2 2Z"),
                Path("M12 6V3a1 1 0 0 0-1-1H9a1 1 0 0 0-1 1v3"),
            ],
            Icon::MoreHorizontal => &[
                Circle(12.0, 12.0, 1.0),
                Circle(19.0, 12.0, 1.0),
                Circle(5.0, 12.0, 1.0),
            ],
            Icon::PlayCircle => &[Circle(12.0, 12.0, 10.0), Polygon("10 8 16 12 10 16 10 8")],
            Icon::Scan => &[
                Path("M3 7V5a2 2 0 0 1 2-2h2"),
                Path("M17 3h2a2 2 0 0 1 2 2v2"),
                Path("M21 17v2a2 2 0 0 1-2 2h-2"),
                Path("M7 21H5a2 2 0 0 1-2-2v-2"),
            ],
            Icon::Star => &[Polygon(
                "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2",
            )],
            Icon::Zap => &[Polygon("13 2 3 14 12 14 11 22 21 10 12 10 13 2")],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GlyphProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Glyph)]
pub fn glyph(props: &GlyphProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={classes!("glyph", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.shapes().iter().map(|shape| match shape {
                Path(d) => html! { <path d={*d} /> },
                Circle(cx, cy, r) => html! {
                    <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
                },
                Rect { x, y, w, h, rx } => html! {
                    <rect x={x.to_string()} y={y.to_string()} width={w.to_string()} height={h.to_string()} rx={rx.to_string()} />
                },
                Polygon(points) => html! { <polygon points={*points} /> },
            }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_artwork() {
        let all = [
            Icon::Activity,
            Icon::ArrowRight,
            Icon::BrainCircuit,
            Icon::CalendarRange,
            Icon::CheckCircle,
            Icon::ChevronDown,
            Icon::ClipboardCheck,
            Icon::Heart,
            Icon::HeartPulse,
            Icon::Medal,
            Icon::Menu,
            Icon::Microscope,
            Icon::MoreHorizontal,
            Icon::PlayCircle,
            Icon::Scan,
            Icon::Star,
            Icon::Zap,
        ];
        for icon in all {
            assert!(!icon.shapes().is_empty(), "{icon:?} draws nothing");
        }
    }

    #[test]
    fn heart_pulse_extends_the_heart_outline() {
        let heart = Icon::Heart.shapes();
        let pulse = Icon::HeartPulse.shapes();
        assert_eq!(pulse.len(), heart.len() + 1);
        assert!(matches!(pulse[0], Path(d) if d == HEART_OUTLINE));
    }
}

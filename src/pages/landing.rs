use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::journey::TileLayout;
use crate::components::status_tile::StatusTile;
use crate::config;

const NAV_LINKS: [&str; 4] = ["Platform", "Solutions", "Resources", "Pricing"];

const DOCTOR_AVATARS: [&str; 3] = [
    "https://lh3.googleusercontent.com/aida-public/AB6AXuD9R0oGV2CUY_R7WEuQ_tYWxg4AwzuKRUqNHFQPtn7dmovlqcftA1OkUoBSqZMHot1YLYbxYODWBqrtT0B-wbyV3F71t5SXaWHaP73LWs2L-mps-5kkHqrsn57Hqt5rYOnSN8OrhioyYyOK3Q9Ob65ubjy0uiiOeG8KrW7XZ9MDXQSvNfg-wIWQ2vwYGIE4J1q8MgqdXm86ruJzenA4UmU3K9RjJcItX1QnKU-pdxL_GbvmMg2CUa46rkCI0kfy_zwO78L8zz4shMgN",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuBXN_BJRl8mx3jxqrB7stvKHs6nFF-DGVXU7hv75ApDeKOWd8bzF6IgaU6Ej2oLibI8ApAeLZWGxN88z5-WTOzBh85aLTTgF6lnrhzzT-T5Z4zxDt_kOcGZbhF7IqG98U6-QEOtuU-IUxrqQVK1kDCouGCbzxjeykQy0Bo8PqE4g3qFDi9e5gv-he7GTJBPfu8T6HGaFlmeAm3yOpPZ0iOvLhHLEhMMVcNjVhWSwuN0q380uyU7AJ5wU6vydC_pG38inXsPauahKFJe",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuCP1w1uE-U69FeSOJa74wngEaQIdFOMJ5DlKvmaKjFGGxKdbZxsui4UgTAa4wGXhd8T5BrzR6daRTyPjjbWAyrRXplGEdu2pEHFdki5o2DqgvS1NjRqjYkXPl1GLvw9nad_3yuV9Bwlz_gFNvFKTonqDgEM5uXmBX_W0J5Un91yzX9tIy6a1pfj5rqBY1J7AodYPAMTV03-RiHr5cNY9eNpKRbPNiINKi2mweWIm19vNTB92SYFpy1SCXjmcJmpoSItAP_mXBGDWmVw",
];

const PARTNERS: [(Icon, &str); 4] = [
    (Icon::Activity, "GeneralHealth"),
    (Icon::Scan, "BioScan"),
    (Icon::BrainCircuit, "MindCare"),
    (Icon::HeartPulse, "VitalSync"),
];

fn page_css() -> String {
    format!(
        r#"
        .landing-page {{
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            overflow-x: hidden;
            background: {page_bg};
            color: {ink};
            font-family: "Manrope", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        }}
        .landing-page a {{ color: inherit; text-decoration: none; }}
        .site-header {{
            position: sticky;
            top: 0;
            z-index: 50;
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 1rem 5rem;
            background: rgba(255, 255, 255, 0.8);
            backdrop-filter: blur(12px);
            border-bottom: 1px solid rgba(0, 164, 230, 0.1);
        }}
        .brand {{ display: flex; align-items: center; gap: 0.75rem; }}
        .brand-mark {{
            width: 32px;
            height: 32px;
            border-radius: 8px;
            background: {primary};
            color: #ffffff;
            display: flex;
            align-items: center;
            justify-content: center;
        }}
        .brand h2 {{ margin: 0; font-size: 1.25rem; font-weight: 800; color: {primary_dark}; letter-spacing: -0.025em; }}
        .site-nav {{ display: flex; flex: 1; justify-content: flex-end; align-items: center; gap: 2rem; }}
        .site-nav nav {{ display: flex; gap: 2rem; }}
        .site-nav nav a {{ font-size: 0.875rem; font-weight: 600; transition: color 0.2s; }}
        .site-nav nav a:hover {{ color: {primary}; }}
        .nav-actions {{ display: flex; gap: 0.75rem; }}
        .btn {{
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 0.5rem;
            cursor: pointer;
            font-weight: 700;
            border: none;
            transition: all 0.2s;
        }}
        .btn-sm {{ min-width: 100px; height: 40px; padding: 0 1.25rem; border-radius: 8px; font-size: 0.875rem; }}
        .btn-lg {{ min-width: 180px; height: 56px; padding: 0 2rem; border-radius: 12px; font-size: 1.125rem; }}
        .btn-primary {{ background: {primary}; color: #ffffff; }}
        .btn-primary:hover {{ background: {primary_dark}; }}
        .btn-soft {{ background: rgba(0, 164, 230, 0.1); color: {primary_dark}; }}
        .btn-soft:hover {{ background: rgba(0, 164, 230, 0.2); }}
        .btn-lg.btn-primary {{ box-shadow: 0 10px 15px -3px rgba(0, 164, 230, 0.25); }}
        .btn-lg.btn-primary:hover {{ background: {primary}; transform: translateY(-2px); box-shadow: 0 10px 15px -3px rgba(0, 164, 230, 0.4); }}
        .btn-lg.btn-primary:hover .glyph {{ transform: translateX(4px); }}
        .btn-lg .glyph {{ transition: transform 0.2s; }}
        .btn-outline {{ background: #ffffff; color: {primary_dark}; border: 2px solid rgba(0, 164, 230, 0.2); }}
        .btn-outline:hover {{ background: rgba(0, 164, 230, 0.05); }}
        .menu-toggle {{ display: none; background: none; border: none; color: {primary_dark}; cursor: pointer; }}

        .hero {{ flex: 1; display: flex; align-items: center; justify-content: center; padding: 3rem 5rem; }}
        .hero-grid {{
            width: 100%;
            max-width: 1280px;
            display: grid;
            grid-template-columns: 7fr 5fr;
            gap: 3rem;
            align-items: center;
        }}
        .hero-copy {{ display: flex; flex-direction: column; gap: 2rem; }}
        .hero-badge {{
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            width: fit-content;
            padding: 0.25rem 0.75rem;
            border-radius: 9999px;
            background: rgba(0, 164, 230, 0.1);
            color: {primary_dark};
            font-size: 0.75rem;
            font-weight: 700;
            letter-spacing: 0.1em;
            text-transform: uppercase;
        }}
        .hero-copy h1 {{ margin: 0; font-size: 4.5rem; font-weight: 800; line-height: 1.1; letter-spacing: -0.025em; color: {primary_dark}; }}
        .hero-copy h1 span {{ color: {primary}; }}
        .hero-lead {{ margin: 1rem 0 0; max-width: 42rem; font-size: 1.25rem; line-height: 1.625; color: #475569; }}
        .hero-actions {{ display: flex; flex-wrap: wrap; gap: 1rem; }}
        .trust {{ display: flex; align-items: center; gap: 1rem; padding-top: 1rem; }}
        .avatars {{ display: flex; }}
        .avatars div {{
            width: 40px;
            height: 40px;
            margin-left: -12px;
            border-radius: 50%;
            border: 2px solid #ffffff;
            overflow: hidden;
            background: #e2e8f0;
        }}
        .avatars div:first-child {{ margin-left: 0; }}
        .avatars img {{ width: 100%; height: 100%; object-fit: cover; }}
        .rating {{ display: flex; align-items: center; gap: 0.25rem; }}
        .rating strong {{ color: {primary_dark}; }}
        .stars {{ display: flex; color: #facc15; }}
        .stars .glyph {{ fill: currentColor; }}
        .trust p {{ margin: 0; font-size: 0.75rem; font-weight: 600; color: #64748b; }}
        .hero-preview {{ position: relative; height: 600px; display: flex; align-items: center; justify-content: center; }}

        .site-footer {{ padding: 2.5rem 0; border-top: 1px solid #f1f5f9; background: #ffffff; }}
        .site-footer .inner {{ max-width: 1280px; margin: 0 auto; padding: 0 5rem; }}
        .site-footer p {{
            margin: 0 0 2rem;
            text-align: center;
            font-size: 0.75rem;
            font-weight: 700;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            color: #94a3b8;
        }}
        .partners {{
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            align-items: center;
            gap: 4rem;
            opacity: 0.4;
            filter: grayscale(1) contrast(1.25);
        }}
        .partner {{ display: flex; align-items: center; gap: 0.5rem; font-size: 1.25rem; font-weight: 700; }}

        @media (max-width: 1024px) {{
            .hero-grid {{ grid-template-columns: 1fr; }}
        }}
        @media (max-width: 768px) {{
            .site-header {{ padding: 1rem 1.5rem; flex-wrap: wrap; }}
            .menu-toggle {{ display: block; }}
            .site-nav {{ display: none; }}
            .site-nav.open {{
                display: flex;
                flex-basis: 100%;
                flex-direction: column;
                align-items: flex-start;
                padding-top: 1rem;
            }}
            .site-nav.open nav {{ flex-direction: column; gap: 1rem; }}
            .hero {{ padding: 3rem 1.5rem; }}
            .hero-copy h1 {{ font-size: 3rem; }}
            .hero-lead {{ font-size: 1.125rem; }}
            .site-footer .inner {{ padding: 0 1.5rem; }}
            .partners {{ gap: 2rem; }}
        }}
        "#,
        page_bg = config::PAGE_BG,
        ink = config::INK,
        primary = config::PRIMARY,
        primary_dark = config::PRIMARY_DARK,
    )
}

#[function_component(SiteHeader)]
fn site_header() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class="site-header">
            <div class="brand">
                <div class="brand-mark">
                    <Glyph icon={Icon::Activity} size={20} />
                </div>
                <h2>{"WellV3"}</h2>
            </div>

            <div class={classes!("site-nav", (*menu_open).then(|| "open"))}>
                <nav>
                    { for NAV_LINKS.iter().map(|item| html! {
                        <a key={*item} href="#" onclick={close_menu.clone()}>{*item}</a>
                    }) }
                </nav>
                <div class="nav-actions">
                    <button class="btn btn-sm btn-primary">{"Get Started"}</button>
                    <button class="btn btn-sm btn-soft">{"Log In"}</button>
                </div>
            </div>

            <button class="menu-toggle" aria-label="Menu" onclick={toggle_menu}>
                <Glyph icon={Icon::Menu} />
            </button>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <main class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">
                        <Glyph icon={Icon::CheckCircle} size={14} />
                        {"Next-Gen Health Tracking"}
                    </div>

                    <div>
                        <h1>{"Optimizing Patient "}<span>{"Wellness"}</span>{" Through Data"}</h1>
                        <p class="hero-lead">
                            {"Empowering healthcare providers and patients with a unified platform for tracking, improving, and celebrating health milestones in real-time."}
                        </p>
                    </div>

                    <div class="hero-actions">
                        <button class="btn btn-lg btn-primary">
                            {"Get Started Today"}
                            <Glyph icon={Icon::ArrowRight} size={20} />
                        </button>
                        <button class="btn btn-lg btn-outline">
                            <Glyph icon={Icon::PlayCircle} size={20} />
                            {"Watch Demo"}
                        </button>
                    </div>

                    <div class="trust">
                        <div class="avatars">
                            { for DOCTOR_AVATARS.iter().map(|src| html! {
                                <div><img src={*src} alt="Doctor profile" /></div>
                            }) }
                        </div>
                        <div>
                            <div class="rating">
                                <strong>{"4.9/5"}</strong>
                                <div class="stars">
                                    { for (0..5).map(|_| html! { <Glyph icon={Icon::Star} size={14} /> }) }
                                </div>
                            </div>
                            <p>{"Trusted by 500+ clinics worldwide"}</p>
                        </div>
                    </div>
                </div>

                <div class="hero-preview">
                    <StatusTile layout={TileLayout::Focused} />
                </div>
            </div>
        </main>
    }
}

#[function_component(SiteFooter)]
fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="inner">
                <p>{"Trusted by medical leaders around the globe"}</p>
                <div class="partners">
                    { for PARTNERS.iter().map(|(icon, name)| html! {
                        <div key={*name} class="partner">
                            <Glyph icon={*icon} size={32} />
                            <span>{*name}</span>
                        </div>
                    }) }
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <style>{page_css()}</style>
            <SiteHeader />
            <Hero />
            <SiteFooter />
        </div>
    }
}

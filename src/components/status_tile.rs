use log::{debug, info, trace};
use yew::prelude::*;

use crate::components::clock::VitalsClock;
use crate::components::icons::{Glyph, Icon};
use crate::components::journey::{
    ring_offset, scan_ring_offset, Journey, Step, StepId, StepStatus, TileLayout, HEART_RING_DASH,
    HEART_RING_FILL, SCAN_RING_DASH,
};
use crate::config;

const TILE_CSS: &str = r#"
    .status-tile {
        position: relative;
        width: 100%;
        max-width: 600px;
        aspect-ratio: 1 / 1;
        background: #ffffff;
        border-radius: 32px;
        border: 1px solid #e2e8f0;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        display: flex;
        flex-direction: column;
        overflow: hidden;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .tile-header,
    .tile-footer {
        height: 15%;
        padding: 0 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
        background: #f8fafc;
        z-index: 30;
    }
    .tile-header { border-bottom: 1px solid #f1f5f9; }
    .tile-footer { border-top: 1px solid #f1f5f9; }
    .tile-badge-icon {
        width: 40px;
        height: 40px;
        border-radius: 12px;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #00a4e6;
        background: linear-gradient(to bottom right, #eff6ff, #dbeafe);
        border: 1px solid #bfdbfe;
    }
    .tile-title { display: flex; align-items: center; gap: 1rem; }
    .tile-title h3 { margin: 0; font-size: 1rem; font-weight: 700; color: #1e293b; }
    .tile-live {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-top: 2px;
        font-size: 10px;
        font-weight: 700;
        letter-spacing: 0.05em;
        text-transform: uppercase;
        color: #94a3b8;
    }
    .tile-live-dot { position: relative; width: 8px; height: 8px; }
    .tile-live-dot span {
        position: absolute;
        inset: 0;
        border-radius: 50%;
        background: #10b981;
    }
    .tile-live-dot span.ping { opacity: 0.75; animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite; }
    .tile-more {
        width: 40px;
        height: 40px;
        border-radius: 50%;
        border: 1px solid #e2e8f0;
        background: #ffffff;
        color: #94a3b8;
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        transition: all 0.3s;
    }
    .tile-more:hover { color: #00a4e6; border-color: #00a4e6; }
    .tile-more:hover .glyph { transform: rotate(90deg); }
    .tile-more .glyph { transition: transform 0.3s; }

    .tile-body {
        flex: 1;
        position: relative;
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 1.5rem 0;
        overflow: hidden;
        background: radial-gradient(ellipse at top, rgba(239, 246, 255, 0.5), #ffffff 70%);
    }
    .tile-grid {
        position: absolute;
        inset: 0;
        display: grid;
        grid-template-columns: repeat(20, minmax(0, 1fr));
        opacity: 0.03;
        pointer-events: none;
    }
    .tile-grid div { border: 0.5px solid #00a4e6; }

    .tile-hero { position: relative; z-index: 10; display: flex; flex-direction: column; align-items: center; margin-bottom: 1.5rem; }
    .tile-dial { position: relative; width: 160px; height: 160px; display: flex; align-items: center; justify-content: center; }
    .tile-dial .orbit {
        position: absolute;
        inset: 0;
        border-radius: 50%;
        border: 2px dashed rgba(0, 164, 230, 0.2);
        animation: spin 20s linear infinite;
    }
    .tile-dial .halo {
        position: absolute;
        inset: 8px;
        border-radius: 50%;
        border: 1px solid rgba(0, 164, 230, 0.1);
        animation: breathe 3s ease-in-out infinite;
    }
    .tile-dial svg.ring { position: absolute; inset: 0; width: 100%; height: 100%; transform: rotate(-90deg); }
    .ring-track { color: #f1f5f9; }
    .ring-progress { color: #00a4e6; }
    .tile-core {
        position: relative;
        z-index: 20;
        width: 96px;
        height: 96px;
        border-radius: 50%;
        background: #ffffff;
        border: 4px solid #f8fafc;
        box-shadow: 0 20px 25px -5px #dbeafe;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #00a4e6;
    }
    .tile-scan-badge {
        position: absolute;
        bottom: -8px;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        border: 2px solid #ffffff;
        background: #00a4e6;
        color: #ffffff;
        font-size: 10px;
        font-weight: 700;
        font-variant-numeric: tabular-nums;
        animation: bob 2s ease-in-out infinite;
    }
    .tile-caption { text-align: center; margin-top: 1rem; }
    .tile-caption h2 { margin: 0; font-size: 1.5rem; font-weight: 800; color: #1e293b; }
    .tile-caption p { margin: 0; font-size: 0.875rem; font-weight: 500; color: #64748b; }

    .tile-steps {
        width: 100%;
        max-width: 320px;
        flex: 1;
        display: flex;
        flex-direction: column;
        justify-content: center;
        gap: 0.75rem;
        padding: 0 1rem;
        z-index: 10;
        box-sizing: border-box;
    }
    .step-row {
        display: flex;
        align-items: center;
        justify-content: space-between;
        width: 100%;
        padding: 0.75rem;
        border-radius: 12px;
        border: 1px solid #e2e8f0;
        background: #ffffff;
        text-align: left;
        cursor: pointer;
        transition: transform 0.15s, border-color 0.15s;
    }
    .step-row:hover { transform: translateX(4px) scale(1.02); }
    .step-row:active { transform: scale(0.98); }
    .step-row.pending { box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
    .step-row.pending:hover { border-color: #bfdbfe; }
    .step-row.completed { background: #f8fafc; opacity: 0.6; }
    .step-row.active { border-color: #00a4e6; background: rgba(0, 164, 230, 0.05); }
    .step-main { display: flex; align-items: center; gap: 0.75rem; }
    .step-icon {
        width: 32px;
        height: 32px;
        border-radius: 8px;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #eff6ff;
        color: #00a4e6;
    }
    .step-row.completed .step-icon { background: #e2e8f0; color: #64748b; }
    .step-row.active .step-icon { background: #00a4e6; color: #ffffff; }
    .step-text { display: flex; flex-direction: column; }
    .step-text .name { font-size: 0.75rem; font-weight: 700; color: #334155; }
    .step-row.completed .name { color: #64748b; text-decoration: line-through; }
    .step-text .state { font-size: 10px; font-weight: 500; color: #94a3b8; }
    .step-chevron { color: #cbd5e1; transform: rotate(-90deg); }
    .step-meta { font-size: 10px; font-weight: 700; color: #00a4e6; text-transform: uppercase; }

    .vital { display: flex; align-items: center; gap: 1rem; }
    .vital-heart { cursor: pointer; }
    .vital-dial { position: relative; width: 48px; height: 48px; display: flex; align-items: center; justify-content: center; }
    .vital-dial svg.ring { position: absolute; inset: 0; width: 100%; height: 100%; transform: rotate(-90deg); }
    .vital-dial .glyph { position: relative; color: #f43f5e; fill: #f43f5e; animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }
    .vital-label { margin: 0; font-size: 10px; font-weight: 700; color: #94a3b8; text-transform: uppercase; letter-spacing: 0.1em; }
    .vital-value { display: flex; align-items: baseline; gap: 0.25rem; }
    .vital-value .reading { font-size: 1.25rem; font-weight: 900; color: #1e293b; font-variant-numeric: tabular-nums; }
    .vital-value .unit { font-size: 0.75rem; font-weight: 600; color: #64748b; }
    .vital-divider { width: 1px; height: 32px; background: #e2e8f0; }
    .vital-readiness-icon {
        width: 48px;
        height: 48px;
        border-radius: 16px;
        border: 1px solid #e2e8f0;
        background: #ffffff;
        display: flex;
        align-items: center;
        justify-content: center;
        color: #6366f1;
    }
    .vital-readiness-icon .glyph { fill: #e0e7ff; }
    .vital-delta {
        font-size: 10px;
        font-weight: 700;
        color: #10b981;
        background: #ecfdf5;
        padding: 0.125rem 0.375rem;
        border-radius: 9999px;
    }

    .pop-in { animation: popIn 0.35s cubic-bezier(0.34, 1.56, 0.64, 1); }
    .rise-in { animation: riseIn 0.3s ease-out; }
    .fade-in { animation: fadeIn 0.3s ease-out; }

    @keyframes spin { to { transform: rotate(360deg); } }
    @keyframes breathe { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.05); } }
    @keyframes bob { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-4px); } }
    @keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }
    @keyframes pulse { 50% { opacity: 0.5; } }
    @keyframes popIn { from { transform: scale(0.5); opacity: 0; } to { transform: scale(1); opacity: 1; } }
    @keyframes riseIn { from { transform: translateY(10px); opacity: 0; } to { transform: translateY(0); opacity: 1; } }
    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
"#;

pub enum StatusTileMsg {
    Select(StepId),
    HeartbeatTick,
    ScanTick,
}

#[derive(Properties, PartialEq)]
pub struct StatusTileProps {
    #[prop_or_default]
    pub layout: TileLayout,
}

/// Patient status preview. Owns its simulation and the two timers driving it.
pub struct StatusTile {
    journey: Journey,
    clock: Option<VitalsClock>,
}

impl Component for StatusTile {
    type Message = StatusTileMsg;
    type Properties = StatusTileProps;

    fn create(ctx: &Context<Self>) -> Self {
        let heartbeat_link = ctx.link().clone();
        let scan_link = ctx.link().clone();
        let clock: VitalsClock = VitalsClock::start(
            move || heartbeat_link.send_message(StatusTileMsg::HeartbeatTick),
            move || scan_link.send_message(StatusTileMsg::ScanTick),
        );
        info!("Patient status tile mounted ({:?} layout)", ctx.props().layout);

        Self {
            journey: Journey::new(),
            clock: Some(clock),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            StatusTileMsg::Select(id) => {
                let changed = self.journey.select(id);
                if changed {
                    debug!("Previewing step {} ({})", id.get(), self.journey.active_step().title);
                }
                changed
            }
            StatusTileMsg::HeartbeatTick => {
                let before = self.journey.heart_rate();
                let bpm = self.journey.beat(&mut rand::thread_rng());
                trace!("Heart rate {} -> {}", before, bpm);
                bpm != before
            }
            StatusTileMsg::ScanTick => {
                self.journey.advance_scan();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="status-tile">
                <TileStyle />
                <TileHeader />
                <div class="tile-body">
                    <TileGrid />
                    { self.view_hero() }
                    <div class="tile-steps">
                        { for self.journey.rows(ctx.props().layout).map(|(step, status)| self.view_row(ctx, step, status)) }
                    </div>
                </div>
                <VitalsFooter heart_rate={self.journey.heart_rate()} />
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the clock clears both intervals on the browser side.
        drop(self.clock.take());
        info!("Patient status tile unmounted, timers cleared");
    }
}

// Static parts of the tile live in their own components so scan ticks skip them.

#[function_component(TileStyle)]
fn tile_style() -> Html {
    html! { <style>{TILE_CSS}</style> }
}

#[function_component(TileGrid)]
fn tile_grid() -> Html {
    html! {
        <div class="tile-grid">
            { for (0..400).map(|_| html! { <div></div> }) }
        </div>
    }
}

#[function_component(TileHeader)]
fn tile_header() -> Html {
    html! {
        <div class="tile-header">
            <div class="tile-title">
                <div class="tile-badge-icon">
                    <Glyph icon={Icon::Activity} size={20} />
                </div>
                <div>
                    <h3>{"Patient Status"}</h3>
                    <div class="tile-live">
                        <span class="tile-live-dot">
                            <span class="ping"></span>
                            <span></span>
                        </span>
                        {"Live Monitoring"}
                    </div>
                </div>
            </div>
            <button class="tile-more" aria-label="More">
                <Glyph icon={Icon::MoreHorizontal} size={18} />
            </button>
        </div>
    }
}

impl StatusTile {
    fn view_hero(&self) -> Html {
        let step = self.journey.active_step();
        let id = step.id.get();
        let scan = self.journey.scan_percent();

        html! {
            <div class="tile-hero">
                <div class="tile-dial">
                    <div class="orbit"></div>
                    <div class="halo"></div>
                    <svg class="ring" viewBox="0 0 160 160">
                        <circle class="ring-track" cx="80" cy="80" r="76" stroke="currentColor" stroke-width="2" fill="transparent" />
                        <circle
                            class="ring-progress"
                            cx="80"
                            cy="80"
                            r="76"
                            stroke="currentColor"
                            stroke-width="3"
                            fill="transparent"
                            stroke-dasharray={SCAN_RING_DASH.to_string()}
                            stroke-dashoffset={format!("{:.2}", scan_ring_offset(scan))}
                            stroke-linecap="round"
                        />
                    </svg>
                    <div class="tile-core">
                        <div key={format!("icon-{}", id)} class="pop-in">
                            <Glyph icon={step.icon} size={40} />
                        </div>
                    </div>
                    <div class="tile-scan-badge">{format!("{}%", scan)}</div>
                </div>
                <div class="tile-caption">
                    <h2 key={format!("title-{}", id)} class="rise-in">{step.title}</h2>
                    <p key={format!("sub-{}", id)} class="fade-in">{step.subtitle}</p>
                </div>
            </div>
        }
    }

    fn view_row(&self, ctx: &Context<Self>, step: &'static Step, status: StepStatus) -> Html {
        let id = step.id;
        let onclick = ctx.link().callback(move |_: MouseEvent| StatusTileMsg::Select(id));

        let (row_class, icon, state_label) = match status {
            StepStatus::Completed => ("completed", Icon::CheckCircle, "Completed"),
            StepStatus::Active => ("active", step.icon, "In Progress"),
            StepStatus::Pending => ("pending", step.icon, "Pending"),
        };

        html! {
            <button key={id.get().to_string()} class={classes!("step-row", row_class)} onclick={onclick}>
                <div class="step-main">
                    <div class="step-icon">
                        <Glyph icon={icon} size={16} />
                    </div>
                    <div class="step-text">
                        <span class="name">{step.title}</span>
                        <span class="state">{state_label}</span>
                    </div>
                </div>
                {
                    match status {
                        StepStatus::Pending => html! {
                            <span class="step-chevron"><Glyph icon={Icon::ChevronDown} size={14} /></span>
                        },
                        StepStatus::Active => html! { <span class="step-meta">{step.meta}</span> },
                        StepStatus::Completed => html! {},
                    }
                }
            </button>
        }
    }
}

#[derive(Properties, PartialEq)]
struct VitalsFooterProps {
    heart_rate: u32,
}

#[function_component(VitalsFooter)]
fn vitals_footer(props: &VitalsFooterProps) -> Html {
    html! {
        <div class="tile-footer">
            <div class="vital vital-heart">
                <div class="vital-dial">
                    <svg class="ring" viewBox="0 0 48 48">
                        <circle cx="24" cy="24" r="22" stroke="#e2e8f0" stroke-width="2" fill="none" />
                        <circle
                            cx="24"
                            cy="24"
                            r="22"
                            stroke="#f43f5e"
                            stroke-width="2"
                            fill="none"
                            stroke-dasharray={HEART_RING_DASH.to_string()}
                            stroke-dashoffset={ring_offset(HEART_RING_DASH, HEART_RING_FILL).to_string()}
                            stroke-linecap="round"
                        />
                    </svg>
                    <Glyph icon={Icon::Heart} size={16} />
                </div>
                <div>
                    <p class="vital-label">{"Heart Rate"}</p>
                    <div class="vital-value">
                        <span class="reading">{props.heart_rate.to_string()}</span>
                        <span class="unit">{"BPM"}</span>
                    </div>
                </div>
            </div>

            <div class="vital-divider"></div>

            <div class="vital">
                <div class="vital-readiness-icon">
                    <Glyph icon={Icon::Zap} size={20} />
                </div>
                <div>
                    <p class="vital-label">{"Readiness"}</p>
                    <div class="vital-value">
                        <span class="reading">{format!("{}%", config::READINESS_PERCENT)}</span>
                        <span class="vital-delta">{config::READINESS_DELTA}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

use crate::hud::HudView;
use crate::i18n::{Locale, STRINGS};
use crate::model::RunnerState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudOverlayProps {
    pub run_state: UseReducerHandle<RunnerState>,
    pub locale: Locale,
}

#[function_component(HudOverlay)]
pub fn hud_overlay(props: &HudOverlayProps) -> Html {
    let locale = props.locale;
    let hud = HudView::from_state(&props.run_state);

    let hearts = hud.hearts.iter().enumerate().map(|(i, filled)| {
        let color = if *filled { "#ec4899" } else { "#1f2937" };
        html! {
            <span key={i} style={format!("font-size:28px; color:{}; text-shadow:0 0 5px #ff0054;", color)}>{"❤"}</span>
        }
    });

    let letters = hud.letters.iter().enumerate().map(|(i, tile)| {
        let style = if tile.collected {
            format!("border-color:{c}; color:rgba(0,0,0,0.8); background:{c}; box-shadow:0 0 20px {c};", c = tile.color)
        } else {
            "border-color:#374151; color:#374151; background:rgba(0,0,0,0.9);".to_string()
        };
        html! {
            <div key={i} style={format!("width:40px; height:48px; display:flex; align-items:center; justify-content:center; border:2px solid; border-radius:8px; font-size:20px; font-weight:900; transition:all 0.3s; {}", style)}>
                { tile.letter.to_string() }
            </div>
        }
    });

    html! {
        <div dir={locale.dir()} style="position:absolute; inset:0; pointer-events:none; display:flex; flex-direction:column; justify-content:space-between; padding:24px; z-index:50;">
            <div style="display:flex; justify-content:space-between; align-items:flex-start; width:100%;">
                <div style="display:flex; gap:6px;">{ for hearts }</div>
                <div dir="ltr" style="font-size:40px; font-weight:700; color:#22d3ee; text-shadow:0 0 10px #00ffff;">{ hud.score.clone() }</div>
            </div>

            <div style="position:absolute; top:20px; left:50%; transform:translateX(-50%); padding:4px 16px; border-radius:999px; font-weight:700; color:#d8b4fe; background:rgba(0,0,0,0.5); border:1px solid rgba(168,85,247,0.3);">
                { format!("{} {} ", STRINGS.level.get(locale), hud.level) }
                <span style="color:#6b7280; font-size:13px;">{ format!("/ {}", hud.max_level) }</span>
            </div>

            if hud.immortality_active {
                <div style="position:absolute; top:96px; left:50%; transform:translateX(-50%); color:#facc15; font-size:22px; font-weight:700; text-shadow:0 0 10px gold;">
                    { format!("🛡 {}", STRINGS.immortality_active.get(locale)) }
                </div>
            }

            <div dir="ltr" style="position:absolute; top:64px; left:50%; transform:translateX(-50%); display:flex; gap:10px;">
                { for letters }
            </div>

            <div style="width:100%; display:flex; justify-content:flex-end; align-items:flex-end;">
                <div style="display:flex; align-items:center; gap:8px; color:#06b6d4; opacity:0.7; font-size:18px; font-weight:700;">
                    <span>{"⚡"}</span>
                    <span>{ format!("{} {}%", STRINGS.speed.get(locale), hud.speed_percent) }</span>
                </div>
            </div>
        </div>
    }
}

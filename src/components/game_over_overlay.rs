use crate::audio::AudioHandle;
use crate::hud::RunSummary;
use crate::i18n::{Locale, STRINGS};
use crate::model::RunnerState;
use crate::store::restart_with_audio;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub run_state: UseReducerHandle<RunnerState>,
    pub audio: AudioHandle,
    pub locale: Locale,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    let locale = props.locale;
    let summary = RunSummary::from_state(&props.run_state);
    let restart_btn = {
        let run_state = props.run_state.clone();
        let audio = props.audio.clone();
        Callback::from(move |_| restart_with_audio(&*audio.0, &run_state))
    };
    let row_style = "background:rgba(17,24,39,0.8); padding:18px; border-radius:12px; border:1px solid #374151; display:flex; align-items:center; justify-content:space-between;";
    let label_style = "font-size:17px; font-weight:700;";
    let value_style = "font-size:22px; font-weight:700;";
    html! {
        <div dir={locale.dir()} style="position:absolute; inset:0; z-index:100; overflow-y:auto; color:#fff; background:rgba(0,0,0,0.9); backdrop-filter:blur(4px);">
            <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:100%; padding:32px 16px; box-sizing:border-box;">
                <h1 style="margin:0 0 24px 0; font-size:56px; font-weight:900; text-shadow:0 0 15px rgba(255,0,0,0.8);">{ STRINGS.game_over.get(locale) }</h1>
                <div style="display:grid; gap:14px; width:100%; max-width:28rem; margin-bottom:32px; text-align:center;">
                    <div style={row_style}>
                        <span style={format!("{} color:#facc15;", label_style)}>{ format!("🏆 {}", STRINGS.level.get(locale)) }</span>
                        <span style={value_style}>{ format!("{} / {}", summary.level, summary.max_level) }</span>
                    </div>
                    <div style={row_style}>
                        <span style={format!("{} color:#22d3ee;", label_style)}>{ format!("◆ {}", STRINGS.gems_collected.get(locale)) }</span>
                        <span style={value_style}>{ summary.gems }</span>
                    </div>
                    <div style={row_style}>
                        <span style={format!("{} color:#c084fc;", label_style)}>{ format!("⌖ {}", STRINGS.distance_travelled.get(locale)) }</span>
                        <span style={value_style}>{ format!("{} {}", summary.distance, STRINGS.light_years.get(locale)) }</span>
                    </div>
                    <div style="background:rgba(31,41,55,0.5); padding:18px; border-radius:12px; border:1px solid rgba(255,255,255,0.1); display:flex; align-items:center; justify-content:space-between; margin-top:8px;">
                        <span style={label_style}>{ STRINGS.final_score.get(locale) }</span>
                        <span dir="ltr" style="font-size:34px; font-weight:900; color:#fb923c;">{ summary.score.clone() }</span>
                    </div>
                </div>
                <button onclick={restart_btn} style="padding:14px 44px; font-size:22px; font-weight:900; color:#fff; border:none; border-radius:12px; cursor:pointer; background:linear-gradient(to right, #06b6d4, #2563eb); box-shadow:0 0 20px rgba(0,255,255,0.4);">
                    { STRINGS.try_again.get(locale) }
                </button>
            </div>
        </div>
    }
}

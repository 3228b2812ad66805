use crate::audio::AudioHandle;
use crate::hud::RunSummary;
use crate::i18n::{Locale, STRINGS};
use crate::model::RunnerState;
use crate::store::restart_with_audio;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VictoryOverlayProps {
    pub run_state: UseReducerHandle<RunnerState>,
    pub audio: AudioHandle,
    pub locale: Locale,
}

#[function_component(VictoryOverlay)]
pub fn victory_overlay(props: &VictoryOverlayProps) -> Html {
    let locale = props.locale;
    let summary = RunSummary::from_state(&props.run_state);
    let restart_btn = {
        let run_state = props.run_state.clone();
        let audio = props.audio.clone();
        Callback::from(move |_| restart_with_audio(&*audio.0, &run_state))
    };
    let tile_style = "background:rgba(0,0,0,0.6); padding:16px; border-radius:12px; border:1px solid rgba(255,255,255,0.1);";
    html! {
        <div dir={locale.dir()} style="position:absolute; inset:0; z-index:100; overflow-y:auto; color:#fff; background:linear-gradient(to bottom, rgba(88,28,135,0.9), rgba(0,0,0,0.95)); backdrop-filter:blur(12px);">
            <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:100%; padding:32px 16px; box-sizing:border-box;">
                <div style="font-size:72px; margin-bottom:16px; filter:drop-shadow(0 0 15px rgba(255,215,0,0.6));">{"🚀"}</div>
                <h1 style="margin:0 0 8px 0; font-size:56px; font-weight:900; text-align:center; background:linear-gradient(to right, #fde047, #f97316, #ec4899); -webkit-background-clip:text; color:transparent;">
                    { STRINGS.mission_complete.get(locale) }
                </h1>
                <p style="margin:0 0 32px 0; font-size:20px; color:#67e8f9; opacity:0.8; text-align:center;">{ STRINGS.victory_subtitle.get(locale) }</p>
                <div style="display:grid; gap:16px; width:100%; max-width:28rem; margin-bottom:32px; text-align:center;">
                    <div style="background:rgba(0,0,0,0.6); padding:24px; border-radius:12px; border:1px solid rgba(234,179,8,0.3);">
                        <div style="font-size:15px; color:#9ca3af; margin-bottom:8px;">{ STRINGS.final_score.get(locale) }</div>
                        <div dir="ltr" style="font-size:44px; font-weight:700; color:#facc15;">{ summary.score.clone() }</div>
                    </div>
                    <div style="display:grid; grid-template-columns:1fr 1fr; gap:16px;">
                        <div style={tile_style}>
                            <div style="font-size:12px; color:#9ca3af; margin-bottom:4px;">{ STRINGS.gems.get(locale) }</div>
                            <div style="font-size:28px; font-weight:700; color:#22d3ee;">{ summary.gems }</div>
                        </div>
                        <div style={tile_style}>
                            <div style="font-size:12px; color:#9ca3af; margin-bottom:4px;">{ STRINGS.distance.get(locale) }</div>
                            <div dir="ltr" style="font-size:28px; font-weight:700; color:#c084fc;">{ format!("{} LY", summary.distance) }</div>
                        </div>
                    </div>
                </div>
                <button onclick={restart_btn} style="padding:18px 56px; font-size:20px; font-weight:900; color:#000; background:#fff; border:none; border-radius:12px; cursor:pointer; box-shadow:0 0 40px rgba(255,255,255,0.3);">
                    { STRINGS.play_again.get(locale) }
                </button>
            </div>
        </div>
    }
}

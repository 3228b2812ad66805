use crate::audio::AudioHandle;
use crate::i18n::{Locale, STRINGS};
use crate::model::RunnerState;
use crate::store::start_with_audio;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuOverlayProps {
    pub run_state: UseReducerHandle<RunnerState>,
    pub audio: AudioHandle,
    pub locale: Locale,
    pub on_toggle_locale: Callback<()>,
}

#[function_component(MenuOverlay)]
pub fn menu_overlay(props: &MenuOverlayProps) -> Html {
    let locale = props.locale;
    let start_btn = {
        let run_state = props.run_state.clone();
        let audio = props.audio.clone();
        Callback::from(move |_| start_with_audio(&*audio.0, &run_state))
    };
    let locale_btn = {
        let cb = props.on_toggle_locale.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div dir={locale.dir()} style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; z-index:100; background:rgba(0,0,0,0.8); backdrop-filter:blur(4px); padding:16px;">
            <div style="position:relative; width:100%; max-width:28rem; border-radius:24px; overflow:hidden; border:1px solid rgba(255,255,255,0.1); box-shadow:0 0 50px rgba(0,255,255,0.2); background:#050011;">
                <div style="display:flex; flex-direction:column; align-items:center; padding:48px 24px 32px; text-align:center; background:linear-gradient(to top, #050011, rgba(0,0,0,0.5), transparent);">
                    <h1 style="margin:0 0 24px 0; font-size:40px; font-weight:900; background:linear-gradient(to right, #22d3ee, #c084fc); -webkit-background-clip:text; color:transparent;">
                        { STRINGS.title.get(locale) }
                    </h1>
                    <button onclick={start_btn} style="width:100%; padding:16px 24px; font-size:20px; font-weight:900; color:#fff; background:rgba(255,255,255,0.1); border:1px solid rgba(255,255,255,0.2); border-radius:12px; cursor:pointer; box-shadow:0 0 20px rgba(0,255,255,0.2);">
                        { format!("{} ▶", STRINGS.start.get(locale)) }
                    </button>
                    <p style="margin:16px 0 0 0; font-size:14px; color:rgba(34,211,238,0.7); background:rgba(0,0,0,0.4); padding:4px 16px; border-radius:999px;">
                        { STRINGS.controls_hint.get(locale) }
                    </p>
                    <button onclick={locale_btn} style="margin-top:12px; padding:4px 12px; font-size:12px; background:transparent; color:#9ca3af; border:1px solid #374151; border-radius:8px; cursor:pointer;">
                        { STRINGS.language.get(locale) }
                    </button>
                </div>
            </div>
        </div>
    }
}

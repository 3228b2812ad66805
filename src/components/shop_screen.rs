use crate::i18n::{Locale, STRINGS};
use crate::model::RunnerState;
use crate::shop::{ShopItem, can_afford};
use crate::store::StoreActions;
use crate::util::format_score;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopScreenProps {
    pub run_state: UseReducerHandle<RunnerState>,
    /// Offer for this visit; drawn by the app when the shop opened.
    pub items: Vec<ShopItem>,
    pub locale: Locale,
}

fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "arrow-up-circle" => "⇑",
        "activity" => "♥",
        "plus-circle" => "✚",
        "shield" => "🛡",
        _ => "◆",
    }
}

#[function_component(ShopScreen)]
pub fn shop_screen(props: &ShopScreenProps) -> Html {
    let locale = props.locale;
    let score = props.run_state.score;
    let close_btn = {
        let run_state = props.run_state.clone();
        Callback::from(move |_| run_state.close_shop())
    };

    let cards = props.items.iter().map(|item| {
        let affordable = can_afford(score, item.cost);
        let buy_btn = {
            let run_state = props.run_state.clone();
            let (id, cost) = (item.id, item.cost);
            Callback::from(move |_| run_state.buy_item(id, cost))
        };
        let btn_style = if affordable {
            "background:linear-gradient(to right, #0891b2, #2563eb); cursor:pointer; box-shadow:0 4px 12px rgba(0,0,0,0.4);"
        } else {
            "background:#374151; cursor:not-allowed; opacity:0.5;"
        };
        html! {
            <div key={format!("{:?}", item.id)} style="background:rgba(17,24,39,0.8); border:1px solid #374151; padding:20px; border-radius:12px; display:flex; flex-direction:column; align-items:center; text-align:center;">
                <div style="background:#1f2937; padding:14px; border-radius:999px; margin-bottom:12px; font-size:28px; color:#22d3ee; width:32px; height:32px; line-height:32px;">
                    { icon_glyph(item.icon) }
                </div>
                <h3 style="margin:0 0 8px 0; font-size:20px; font-weight:700; color:#fff;">{ item.name.get(locale) }</h3>
                <p style="margin:0 0 16px 0; min-height:44px; font-size:13px; line-height:1.6; color:#9ca3af; display:flex; align-items:center;">{ item.description.get(locale) }</p>
                <button
                    onclick={buy_btn}
                    disabled={!affordable}
                    style={format!("width:100%; padding:12px 20px; border:none; border-radius:8px; color:#fff; font-weight:700; display:flex; gap:8px; justify-content:center; {}", btn_style)}
                >
                    <span>{ item.cost }</span>
                    <span>{ STRINGS.currency.get(locale) }</span>
                </button>
            </div>
        }
    });

    html! {
        <div dir={locale.dir()} style="position:absolute; inset:0; z-index:100; overflow-y:auto; color:#fff; background:rgba(0,0,0,0.9); backdrop-filter:blur(12px);">
            <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:100%; padding:32px 16px; box-sizing:border-box;">
                <h2 style="margin:0 0 16px 0; font-size:40px; font-weight:900; color:#22d3ee; text-shadow:0 0 15px rgba(0,255,255,0.5);">{ STRINGS.shop_title.get(locale) }</h2>
                <div style="display:flex; align-items:center; gap:8px; margin-bottom:28px; padding:8px 24px; color:#facc15; background:rgba(17,24,39,0.5); border:1px solid rgba(234,179,8,0.3); border-radius:999px;">
                    <span style="font-weight:700;">{ STRINGS.balance.get(locale) }</span>
                    <span dir="ltr" style="font-size:22px; font-weight:700;">{ format_score(score) }</span>
                </div>
                <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(220px, 1fr)); gap:20px; max-width:56rem; width:100%; margin-bottom:32px;">
                    { for cards }
                </div>
                <button onclick={close_btn} style="padding:14px 44px; font-size:20px; font-weight:700; color:#fff; border:none; border-radius:12px; cursor:pointer; background:linear-gradient(to right, #9333ea, #db2777); box-shadow:0 0 20px rgba(255,0,255,0.4);">
                    { format!("▶ {}", STRINGS.continue_mission.get(locale)) }
                </button>
            </div>
        </div>
    }
}

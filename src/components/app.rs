use super::{
    game_over_overlay::GameOverOverlay, hud_overlay::HudOverlay, menu_overlay::MenuOverlay,
    shop_screen::ShopScreen, victory_overlay::VictoryOverlay,
};
use crate::audio::{AudioHandle, WebAudio};
use crate::model::RunnerState;
use crate::rng::GameRng;
use crate::screen::{Screen, select_screen};
use crate::settings::Settings;
use crate::shop::{OwnedUpgrades, SHOP_ITEMS, ShopItem};
use crate::state::ShopSession;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let run_state = use_reducer(RunnerState::default);
    let settings = use_state(Settings::load);
    let audio = use_state(|| AudioHandle::new(WebAudio::default()));
    let rng = use_mut_ref(GameRng::from_browser);
    let shop_session = use_mut_ref(ShopSession::default);

    // Persist settings changes
    {
        use_effect_with(*settings, move |s| {
            s.save();
            || ()
        });
    }

    let toggle_locale = {
        let settings = settings.clone();
        Callback::from(move |_| {
            settings.set(Settings { locale: settings.locale.toggled() });
        })
    };

    let status = run_state.status;
    let locale = settings.locale;
    let offer: Vec<ShopItem> = {
        let mut rng = rng.borrow_mut();
        shop_session
            .borrow_mut()
            .observe(status, &SHOP_ITEMS, OwnedUpgrades::from(&*run_state), &mut *rng)
            .to_vec()
    };

    match select_screen(status) {
        Screen::Menu => html! { <MenuOverlay
            run_state={run_state.clone()}
            audio={(*audio).clone()}
            {locale}
            on_toggle_locale={toggle_locale}
        /> },
        Screen::Shop => html! { <ShopScreen run_state={run_state.clone()} items={offer} {locale} /> },
        Screen::GameOver => html! { <GameOverOverlay
            run_state={run_state.clone()}
            audio={(*audio).clone()}
            {locale}
        /> },
        Screen::Victory => html! { <VictoryOverlay
            run_state={run_state.clone()}
            audio={(*audio).clone()}
            {locale}
        /> },
        Screen::Hud => html! { <HudOverlay run_state={run_state.clone()} {locale} /> },
    }
}

use std::rc::Rc;
use yew::prelude::*;

use super::slide_deck::SlideDeck;
use crate::model::DeckConfig;

#[function_component(App)]
pub fn app() -> Html {
    let deck = use_state(|| match DeckConfig::bundled() {
        Ok(deck) => Some(Rc::new(deck)),
        Err(e) => {
            log::error!("deck config rejected: {e}");
            None
        }
    });

    {
        let title = (*deck).as_ref().map(|d| d.title.clone());
        use_effect_with(title, move |title| {
            if let (Some(title), Some(doc)) = (title, web_sys::window().and_then(|w| w.document())) {
                doc.set_title(title);
            }
            || ()
        });
    }

    match (*deck).clone() {
        Some(deck) => html! { <SlideDeck {deck} /> },
        // a broken deck shows nothing rather than an error screen
        None => html! { <div class="slide-deck slide-deck-empty"></div> },
    }
}

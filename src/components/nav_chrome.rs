use yew::prelude::*;

use crate::deck::{Chrome, InputEvent};
use crate::util::pct;

#[derive(Properties, PartialEq, Clone)]
pub struct NavChromeProps {
    pub chrome: Chrome,
    pub total: usize,
    pub on_input: Callback<InputEvent>,
}

/// Progress bar, counter, arrows and dots.
#[function_component]
pub fn NavChrome(props: &NavChromeProps) -> Html {
    let prev_cb = {
        let cb = props.on_input.clone();
        Callback::from(move |_| cb.emit(InputEvent::PrevButton))
    };
    let next_cb = {
        let cb = props.on_input.clone();
        Callback::from(move |_| cb.emit(InputEvent::NextButton))
    };
    let chrome = &props.chrome;
    let dots = (0..props.total).map(|i| {
        let cb = props.on_input.clone();
        let onclick = Callback::from(move |_| cb.emit(InputEvent::Dot(i)));
        let class = if i == chrome.active_dot { "slide-nav-dot active" } else { "slide-nav-dot" };
        html! { <button class={class} aria-label={format!("Slide {}", i + 1)} {onclick}></button> }
    });
    html! {<>
        <div class="progress-track" style="position:absolute; top:0; left:0; right:0; height:3px;">
            <div id="progress-bar" style={format!("height:100%; width:{}; transition:width 0.5s ease;", pct(chrome.progress_pct))}></div>
        </div>
        <div class="slide-controls" style="position:absolute; bottom:24px; left:50%; transform:translateX(-50%); display:flex; align-items:center; gap:16px;">
            <button id="arrow-prev" onclick={prev_cb} disabled={chrome.prev_disabled}>{"‹"}</button>
            <div class="slide-nav" style="display:flex; gap:8px;">{ for dots }</div>
            <button id="arrow-next" onclick={next_cb} disabled={chrome.next_disabled}>{"›"}</button>
            <span id="slide-counter" style="font-variant-numeric:tabular-nums;">{ chrome.counter.clone() }</span>
        </div>
    </>}
}

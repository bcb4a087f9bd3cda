use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, KeyboardEvent, TouchEvent, WheelEvent};
use yew::prelude::*;

use crate::chart::{CanvasSurface, ChartSpec, RadarStyle, draw_radar};
use crate::deck::{InputEvent, Presenter, intent_for_key};
use crate::model::DeckConfig;
use crate::util::now_ms;

use super::{nav_chrome::NavChrome, slide_view::SlideView};

#[derive(Properties, PartialEq, Clone)]
pub struct SlideDeckProps {
    pub deck: Rc<DeckConfig>,
}

#[function_component(SlideDeck)]
pub fn slide_deck(props: &SlideDeckProps) -> Html {
    let presenter = {
        let deck = props.deck.clone();
        use_mut_ref(move || match Presenter::new(&deck, now_ms()) {
            Ok(p) => Some(p),
            Err(e) => {
                log::error!("presenter unavailable: {e}");
                None
            }
        })
    };
    let force_update = use_force_update();
    let chart_canvas = use_node_ref();
    let chart_slide = props.deck.evaluation_slide();

    // Every input source funnels through here
    let on_input: Callback<InputEvent> = {
        let presenter = presenter.clone();
        let force_update = force_update.clone();
        Callback::from(move |event: InputEvent| {
            let moved = presenter
                .borrow_mut()
                .as_mut()
                .is_some_and(|p| p.handle_input(&event, now_ms()));
            if moved {
                force_update.force_update();
            }
        })
    };

    // Main mount effect (listeners, frame loop)
    {
        let presenter = presenter.clone();
        let force_update = force_update.clone();
        let chart_canvas = chart_canvas.clone();
        let on_input = on_input.clone();
        let deck = props.deck.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();

            // Chart painter; a deck without an evaluation canvas just skips painting
            let chart_spec: Option<ChartSpec> = chart_slide
                .and_then(|i| deck.slides[i].evaluation.as_ref())
                .and_then(|e| match e.chart.spec() {
                    Ok(spec) => Some(spec),
                    Err(err) => {
                        log::warn!("evaluation chart disabled: {err}");
                        None
                    }
                });
            let canvas = chart_canvas.cast::<HtmlCanvasElement>();
            if chart_spec.is_some() && canvas.is_none() {
                log::warn!("evaluation slide has no canvas; chart disabled");
            }
            let paint: Rc<dyn Fn(f64)> = {
                let style = RadarStyle::evaluation();
                Rc::new(move |progress: f64| {
                    let (Some(canvas), Some(spec)) = (canvas.as_ref(), chart_spec.as_ref()) else {
                        return;
                    };
                    if !canvas.is_connected() {
                        return;
                    }
                    match CanvasSurface::from_canvas(canvas) {
                        Ok(mut surface) => draw_radar(&mut surface, spec, &style, progress),
                        Err(e) => log::warn!("chart paint skipped: {e}"),
                    }
                })
            };

            // Frame loop
            let raf_id = Rc::new(RefCell::new(None::<i32>));
            let frame_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_loop = raf_id.clone();
                let frame_cell_loop = frame_cell.clone();
                let presenter = presenter.clone();
                let force_update = force_update.clone();
                let paint = paint.clone();
                *frame_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
                    let update = presenter.borrow_mut().as_mut().map(|p| p.tick(ts));
                    if let Some(update) = update {
                        if let Some(progress) = update.chart_progress {
                            paint(progress);
                        }
                        if update.rerender {
                            force_update.force_update();
                        }
                    }
                    let Some(win) = web_sys::window() else {
                        return;
                    };
                    if let Some(cb) = frame_cell_loop.borrow().as_ref() {
                        if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_loop.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut(f64)>));
            }
            if let (Some(win), Some(cb)) = (window.as_ref(), frame_cell.borrow().as_ref()) {
                if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }

            // Keyboard: only navigation keys lose their default action
            let keydown_cb = {
                let on_input = on_input.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    let key = e.key();
                    if intent_for_key(&key).is_none() {
                        return;
                    }
                    e.prevent_default();
                    on_input.emit(InputEvent::Key(key));
                }) as Box<dyn FnMut(_)>)
            };
            let wheel_cb = {
                let on_input = on_input.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    on_input.emit(InputEvent::Wheel { delta_y: e.delta_y() });
                }) as Box<dyn FnMut(_)>)
            };
            let touch_start_cb = {
                let on_input = on_input.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.touches().item(0) {
                        on_input.emit(InputEvent::TouchStart {
                            x: t0.client_x() as f64,
                            y: t0.client_y() as f64,
                        });
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let touch_end_cb = {
                let on_input = on_input.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    if let Some(t0) = e.changed_touches().item(0) {
                        on_input.emit(InputEvent::TouchEnd {
                            x: t0.client_x() as f64,
                            y: t0.client_y() as f64,
                        });
                    }
                }) as Box<dyn FnMut(_)>)
            };

            if let Some(win) = window.as_ref() {
                win.add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .ok();
                let passive = AddEventListenerOptions::new();
                passive.set_passive(true);
                for (name, cb) in [
                    ("wheel", wheel_cb.as_ref()),
                    ("touchstart", touch_start_cb.as_ref()),
                    ("touchend", touch_end_cb.as_ref()),
                ] {
                    win.add_event_listener_with_callback_and_add_event_listener_options(
                        name,
                        cb.unchecked_ref(),
                        &passive,
                    )
                    .ok();
                }
            } else {
                log::warn!("no window; input listeners not installed");
            }
            log::info!("deck ready with {} slides", deck.slides.len());

            // Cleanup
            move || {
                if let Some(win) = window.as_ref() {
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "wheel",
                        wheel_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "touchstart",
                        touch_start_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "touchend",
                        touch_end_cb.as_ref().unchecked_ref(),
                    );
                    if let Some(id) = raf_id.borrow_mut().take() {
                        let _ = win.cancel_animation_frame(id);
                    }
                }
                // breaks the frame closure's reference to itself
                frame_cell.borrow_mut().take();
                let _keep_alive = (&keydown_cb, &wheel_cb, &touch_start_cb, &touch_end_cb);
            }
        });
    }

    let state = presenter.borrow();
    let Some(p) = state.as_ref() else {
        return html! { <div class="slide-deck slide-deck-empty"></div> };
    };
    let nav = p.navigator();
    let timing = *p.timing();
    let slides = props.deck.slides.iter().enumerate().map(|(i, slide)| {
        let chart_ref = (chart_slide == Some(i)).then(|| chart_canvas.clone());
        html! {
            <SlideView
                key={slide.id.clone()}
                slide={slide.clone()}
                status={nav.status(i)}
                reveal={p.reveal(i).cloned().unwrap_or_default()}
                timing={timing}
                chart_ref={chart_ref}
            />
        }
    });

    html! {<div class="slide-deck" style="position:relative; width:100vw; height:100vh; overflow:hidden;">
        { for slides }
        <NavChrome chrome={nav.chrome()} total={nav.total()} on_input={on_input.clone()} />
    </div>}
}

use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::chart::{CanvasSurface, RadarStyle, draw_radar};
use crate::model::ChartData;

#[derive(Properties, PartialEq, Clone)]
pub struct PhoneRadarProps {
    pub chart: ChartData,
}

/// Static mini radar inside the phone mock-up, painted once per chart.
#[function_component]
pub fn PhoneRadar(props: &PhoneRadarProps) -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.chart.clone(), move |chart| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let painted = chart.spec().and_then(|spec| {
                let mut surface = CanvasSurface::from_canvas(&canvas)?;
                draw_radar(&mut surface, &spec, &RadarStyle::compact(), 1.0);
                Ok(())
            });
            if let Err(e) = painted {
                log::warn!("phone radar skipped: {e}");
            }
        });
    }
    html! { <canvas ref={canvas_ref} id="phone-radar" width="180" height="180"></canvas> }
}

use yew::prelude::*;

use crate::config::Timing;
use crate::model::ScoreBar;
use crate::util::pct;

#[derive(Properties, PartialEq, Clone)]
pub struct ScoreBarsProps {
    pub bars: Vec<ScoreBar>,
    pub revealed: Vec<bool>,
    pub timing: Timing,
}

#[function_component]
pub fn ScoreBars(props: &ScoreBarsProps) -> Html {
    let secs = props.timing.score_bars.duration_ms / 1000.0;
    let track_style = "flex:1; height:8px; border-radius:4px; background:rgba(74,124,255,0.1); overflow:hidden;";
    html! {
        <div class="eval-axes" style="display:flex; flex-direction:column; gap:14px; min-width:260px;">
            { for props.bars.iter().enumerate().map(|(i, bar)| {
                // collapsed bars snap back without animating
                let fill_style = if props.revealed.get(i).copied().unwrap_or(false) {
                    format!("height:100%; background:linear-gradient(90deg,#4A7CFF,#2EC4B6); width:{}; transition:width {secs}s ease;", pct(bar.width_pct))
                } else {
                    "height:100%; width:0; transition:none;".to_string()
                };
                html! {
                    <div class="eval-axis" style="display:flex; align-items:center; gap:10px;">
                        <span class="eval-axis-label" style="min-width:140px;">{ bar.label.clone() }</span>
                        <div class="eval-axis-track" style={track_style}>
                            <div class="eval-axis-fill" style={fill_style}></div>
                        </div>
                        <span class="eval-axis-score" style="font-variant-numeric:tabular-nums; font-weight:600;">{ bar.score.clone() }</span>
                    </div>
                }
            }) }
        </div>
    }
}

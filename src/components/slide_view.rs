use yew::prelude::*;

use crate::config::Timing;
use crate::deck::SlideStatus;
use crate::deck::activation::{RevealGroup, SlideReveal};
use crate::model::{SlideSpec, Step};

use super::{phone_radar::PhoneRadar, score_bars::ScoreBars};

#[derive(Properties, PartialEq, Clone)]
pub struct SlideViewProps {
    pub slide: SlideSpec,
    pub status: SlideStatus,
    pub reveal: SlideReveal,
    pub timing: Timing,
    /// Set only on the slide that hosts the animated evaluation chart.
    #[prop_or_default]
    pub chart_ref: Option<NodeRef>,
}

fn step_item(step: &Step, class: &'static str, style: String) -> Html {
    html! {
        <div class={class} style={style}>
            <span class="step-label">{ step.label.clone() }</span>
            <h3>{ step.title.clone() }</h3>
            if !step.text.is_empty() { <p>{ step.text.clone() }</p> }
        </div>
    }
}

#[function_component(SlideView)]
pub fn slide_view(props: &SlideViewProps) -> Html {
    let slide = &props.slide;
    let reveal = &props.reveal;
    let timing = &props.timing;
    let style_for = |group: RevealGroup, i: usize| group.style(reveal.is_revealed(group, i), timing);

    let cards = slide.cards.iter().enumerate().map(|(i, card)| {
        html! {
            <div class="glass-card" style={style_for(RevealGroup::Cards, i)}>
                <h3>{ card.title.clone() }</h3>
                if !card.text.is_empty() { <p>{ card.text.clone() }</p> }
            </div>
        }
    });
    let step_cards = slide
        .step_cards
        .iter()
        .enumerate()
        .map(|(i, s)| step_item(s, "step-card", style_for(RevealGroup::StepCards, i)));
    let deploy_steps = slide
        .deploy_steps
        .iter()
        .enumerate()
        .map(|(i, s)| step_item(s, "deploy-step", style_for(RevealGroup::DeploySteps, i)));
    let bullets = slide.bullets.iter().enumerate().map(|(i, text)| {
        html! { <li style={style_for(RevealGroup::Bullets, i)}>{ text.clone() }</li> }
    });

    let evaluation = slide.evaluation.as_ref().map(|eval| {
        let revealed: Vec<bool> = (0..eval.bars.len())
            .map(|i| reveal.is_revealed(RevealGroup::ScoreBars, i))
            .collect();
        html! {
            <div class="eval-layout" style="display:flex; gap:32px; align-items:center;">
                if let Some(chart_ref) = props.chart_ref.clone() {
                    <canvas ref={chart_ref} id="radar-chart" width="500" height="400"></canvas>
                }
                <ScoreBars bars={eval.bars.clone()} revealed={revealed} timing={*timing} />
            </div>
        }
    });

    html! {
        <section
            id={slide.id.clone()}
            class={props.status.class()}
            aria-hidden={(props.status != SlideStatus::Active).to_string()}
        >
            <div class="slide-inner">
                if let Some(kicker) = &slide.kicker { <p class="slide-kicker">{ kicker.clone() }</p> }
                <h2 class="slide-heading">{ slide.heading.clone() }</h2>
                if let Some(lead) = &slide.lead { <p class="slide-lead">{ lead.clone() }</p> }
                if !slide.cards.is_empty() { <div class="card-grid">{ for cards }</div> }
                if !slide.step_cards.is_empty() { <div class="step-cards">{ for step_cards }</div> }
                if !slide.deploy_steps.is_empty() { <div class="deploy-steps">{ for deploy_steps }</div> }
                if !slide.bullets.is_empty() { <ul class="bullet-list">{ for bullets }</ul> }
                { evaluation.unwrap_or_default() }
                if let Some(mini) = &slide.phone_radar {
                    <div class="phone-mock"><PhoneRadar chart={mini.clone()} /></div>
                }
            </div>
        </section>
    }
}

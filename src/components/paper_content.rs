use yew::prelude::*;

use crate::model::{Line, PaperSpec};

#[derive(Properties, PartialEq, Clone)]
pub struct PaperContentProps {
    pub spec: PaperSpec,
}

fn line_html(line: &Line) -> Html {
    let accent = match &line.accent {
        Some(a) => html! { <span class="accent">{ a.clone() }</span> },
        None => html! {},
    };
    html! { <p class={classes!(line.style.clone())}>{ line.text.clone() }{ accent }</p> }
}

#[function_component(PaperContent)]
pub fn paper_content(props: &PaperContentProps) -> Html {
    let spec = &props.spec;
    html! {
        <>
            { for spec.lines.iter().map(line_html) }
            {
                match &spec.image {
                    Some(img) => html! { <img src={img.src.clone()} alt={img.alt.clone()} draggable="false" /> },
                    None => html! {},
                }
            }
        </>
    }
}

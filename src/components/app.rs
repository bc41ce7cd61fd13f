use super::{paper::DraggablePaper, paper_content::PaperContent};
use crate::model::Board;
use crate::state::ZOrder;
use crate::util::cwarn;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // One stacking counter for the whole board, shared by every paper.
    let z_order = use_state(ZOrder::new);
    let board = use_state(|| match Board::load() {
        Ok(board) => board,
        Err(err) => {
            cwarn(&format!("board: failed to parse embedded board: {err}"));
            Board::default()
        }
    });

    html! {
        <div class="app-container">
            { for board.papers.iter().enumerate().map(|(i, spec)| html! {
                <DraggablePaper
                    key={i}
                    z_order={(*z_order).clone()}
                    class={classes!(spec.skin.class())}
                >
                    <PaperContent spec={spec.clone()} />
                </DraggablePaper>
            }) }
        </div>
    }
}

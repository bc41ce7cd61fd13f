use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::state::{Grab, PaperState, Vec2, ZOrder};
use crate::util::{clog, random_tilt};

#[derive(Properties, PartialEq, Clone)]
pub struct DraggablePaperProps {
    pub z_order: ZOrder,
    /// Skin class added next to `paper`.
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

fn apply_style(node: &NodeRef, state: &PaperState) {
    let Some(el) = node.cast::<HtmlElement>() else {
        return;
    };
    let style = el.style();
    let _ = style.set_property("transform", &state.transform());
    let _ = style.set_property("z-index", &state.z_index.to_string());
}

fn first_touch(e: &TouchEvent) -> Option<Vec2> {
    let t = e.touches().item(0)?;
    Some(Vec2::new(t.client_x() as f64, t.client_y() as f64))
}

fn mouse_point(e: &MouseEvent) -> Vec2 {
    Vec2::new(e.client_x() as f64, e.client_y() as f64)
}

#[function_component(DraggablePaper)]
pub fn draggable_paper(props: &DraggablePaperProps) -> Html {
    let node = use_node_ref();
    let state = use_mut_ref(|| PaperState::new(random_tilt()));

    // Global move/release listeners live exactly as long as the paper is mounted.
    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            apply_style(&node, &state.borrow());

            let mut listeners: Vec<EventListener> = Vec::new();
            if let Some(window) = web_sys::window() {
                let on_move = {
                    let node = node.clone();
                    let state = state.clone();
                    move |e: &Event| {
                        let Some(e) = e.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let mut s = state.borrow_mut();
                        if s.pointer_move(mouse_point(e)) {
                            apply_style(&node, &s);
                        }
                    }
                };
                let on_release = {
                    let state = state.clone();
                    move |_e: &Event| {
                        if state.borrow_mut().release() {
                            clog("paper: released");
                        }
                    }
                };
                let on_touch_move = {
                    let node = node.clone();
                    let state = state.clone();
                    move |e: &Event| {
                        // keep the page from scrolling or zooming under the finger
                        e.prevent_default();
                        let Some(at) = e.dyn_ref::<TouchEvent>().and_then(first_touch) else {
                            return;
                        };
                        let mut s = state.borrow_mut();
                        if s.pointer_move(at) {
                            apply_style(&node, &s);
                        }
                    }
                };

                if let Some(document) = window.document() {
                    listeners.push(EventListener::new(&document, "mousemove", on_move));
                }
                listeners.push(EventListener::new(&window, "mouseup", on_release.clone()));
                listeners.push(EventListener::new(&window, "touchend", on_release.clone()));
                listeners.push(EventListener::new(&window, "touchcancel", on_release));
                if let Some(el) = node.cast::<HtmlElement>() {
                    let options = EventListenerOptions {
                        phase: EventListenerPhase::Bubble,
                        passive: false,
                    };
                    listeners.push(EventListener::new_with_options(
                        &el,
                        "touchmove",
                        options,
                        on_touch_move,
                    ));
                }
            }
            move || drop(listeners)
        });
    }

    let onmousedown = {
        let node = node.clone();
        let state = state.clone();
        let z_order = props.z_order.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(grab) = Grab::from_mouse_button(e.button()) else {
                return;
            };
            let mut s = state.borrow_mut();
            if s.pick_up(grab, mouse_point(&e), &z_order) {
                clog(&format!("paper: {:?} z={}", s.gesture(), s.z_index));
                apply_style(&node, &s);
            }
        })
    };
    let ontouchstart = {
        let node = node.clone();
        let state = state.clone();
        let z_order = props.z_order.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(at) = first_touch(&e) else {
                return;
            };
            let mut s = state.borrow_mut();
            if s.pick_up(Grab::Primary, at, &z_order) {
                clog(&format!("paper: {:?} (touch) z={}", s.gesture(), s.z_index));
                apply_style(&node, &s);
            }
        })
    };
    // right button is the rotate gesture, not a menu
    let oncontextmenu = Callback::from(|e: MouseEvent| e.prevent_default());

    html! {
        <div
            ref={node}
            class={classes!("paper", props.class.clone())}
            {onmousedown}
            {ontouchstart}
            {oncontextmenu}
        >
            { props.children.clone() }
        </div>
    }
}

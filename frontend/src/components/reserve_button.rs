use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InlineReserveButtonProps {
    #[prop_or_default]
    pub node_ref: NodeRef,
    pub onclick: Callback<MouseEvent>,
}

/// The call to action under the hero. While it is on screen the floating
/// copy stays hidden.
#[function_component(InlineReserveButton)]
pub fn inline_reserve_button(props: &InlineReserveButtonProps) -> Html {
    html! {
        <button
            ref={props.node_ref.clone()}
            type="button"
            class="reserve-cta inline"
            onclick={props.onclick.clone()}
        >
            {"사전 예약하기"}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingReserveButtonProps {
    pub visible: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(FloatingReserveButton)]
pub fn floating_reserve_button(props: &FloatingReserveButtonProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <button type="button" class="reserve-cta floating" onclick={props.onclick.clone()}>
            {"사전 예약하기"}
        </button>
    }
}

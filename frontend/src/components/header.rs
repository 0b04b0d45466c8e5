use yew::prelude::*;

use crate::components::reserve_button::InlineReserveButton;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub inline_ref: NodeRef,
    pub on_reserve: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="hero-header">
            <img src="/assets/img-frame.svg" class="hero-frame" alt="" />
            <img src="/assets/img-logo.svg" class="hero-logo" alt="다소니" />
            <div class="hero-title">
                {"순우리말로 사랑하는 사람을 뜻하는 다소니는"}
                <br />
                {"사랑하는 사람을 추모하는 "}<b>{"온라인 추모 공간"}</b>{"입니다"}
            </div>
            <img src="/assets/img-house.svg" class="hero-house" alt="" />
            <InlineReserveButton node_ref={props.inline_ref.clone()} onclick={props.on_reserve.clone()} />
        </header>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReserveConfirmModalProps {
    pub on_close: Callback<()>,
}

#[function_component(ReserveConfirmModal)]
pub fn reserve_confirm_modal(props: &ReserveConfirmModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the box must not reach the overlay.
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="confirm-box" onclick={stop}>
                <div class="confirm-text">
                    {"안녕하세요,"}
                    <br />
                    <b>{"온라인 추모 서비스 다소니입니다."}</b>
                    <br />
                    <br />
                    <b>{"먼저, 다소니의 사전 예약 신청을 해주셔서 감사합니다."}</b>
                    <br />
                    {"다소니는 공유 앨범, AI 음성 편지, AI 이미지 생성을 통해"}
                    <br />
                    {"사용자의 애도 과정을 돕는 온라인 추모공간입니다."}
                    <br />
                    <br />
                    {"현재 정식 출시 이전 단계이지만,"}
                    <br />
                    <b>{"사전 예약 신청을 해주신 분들께 먼저 보여드리면서 베타 테스트를 진행하려 합니다."}</b>
                    <br />
                    <br />
                    {"신청해주셔서 감사드리며, 앞으로 잘 부탁드립니다 😊"}
                </div>
                <button type="button" class="confirm-button" onclick={close}>{"확인"}</button>
            </div>
        </div>
    }
}

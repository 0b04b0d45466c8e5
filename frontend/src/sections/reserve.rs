use chrono::NaiveDate;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::components::confirm_modal::ReserveConfirmModal;
use crate::components::date_picker_modal::DatePickerModal;
use crate::components::fade_in::FadeIn;
use crate::date_picker::format_birth_date;
use crate::observers::use_reveal_once;
use crate::reservation::{Gender, ReservationClient, ReservationDraft, ReserveError};
use crate::sections::common::SectionProps;

fn alert(error: &ReserveError) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(error.user_message());
    }
}

#[function_component(ReserveSection)]
pub fn reserve_section(props: &SectionProps) -> Html {
    let visible = use_reveal_once(props.node_ref.clone(), 0.3);
    let draft = use_state(ReservationDraft::default);
    let submitting = use_state(|| false);
    let picker_open = use_state(|| false);
    let confirm_open = use_state(|| false);

    let set_gender = |gender: Gender| {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            draft.set(ReservationDraft {
                gender,
                ..(*draft).clone()
            });
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(ReservationDraft {
                email: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_pick_date = {
        let draft = draft.clone();
        Callback::from(move |date: NaiveDate| {
            draft.set(ReservationDraft {
                birth_date: format_birth_date(date),
                ..(*draft).clone()
            });
        })
    };

    let open_picker = {
        let picker_open = picker_open.clone();
        Callback::from(move |_: MouseEvent| picker_open.set(true))
    };
    let close_picker = {
        let picker_open = picker_open.clone();
        Callback::from(move |_: ()| picker_open.set(false))
    };
    let close_confirm = {
        let confirm_open = confirm_open.clone();
        Callback::from(move |_: ()| confirm_open.set(false))
    };

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let confirm_open = confirm_open.clone();
        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            let reservation = match draft.validate() {
                Ok(reservation) => reservation,
                Err(e) => {
                    alert(&e);
                    return;
                }
            };

            submitting.set(true);
            let draft = draft.clone();
            let submitting = submitting.clone();
            let confirm_open = confirm_open.clone();
            spawn_local(async move {
                match ReservationClient::from_config().insert(&reservation).await {
                    Ok(()) => {
                        info!("Reservation saved");
                        confirm_open.set(true);
                        draft.set(ReservationDraft::default());
                    }
                    Err(e) => {
                        error!("Reservation insert failed: {}", e);
                        alert(&e);
                    }
                }
                submitting.set(false);
            });
        })
    };

    let gender = draft.gender;

    html! {
        <>
            <section ref={props.node_ref.clone()} data-tab-id="reserve" class="section reserve">
                <FadeIn {visible}>
                    <div class="reserve-info">{"사전예약 후 다소니를 가장 먼저 만나보세요"}</div>
                </FadeIn>
                <FadeIn {visible} delay={0.1}>
                    <div class="reserve-label">{"사전예약 기한"}</div>
                </FadeIn>
                <FadeIn {visible} delay={0.15}>
                    <div class="reserve-content">{"2025. 12. 10. ~ 25. 12. 20. (목)"}</div>
                </FadeIn>
                <FadeIn {visible} delay={0.25}>
                    <div class="reserve-label">{"사전예약 혜택"}</div>
                </FadeIn>
                <FadeIn {visible} delay={0.3}>
                    <div class="reserve-content">{"AI 음성 편지 생성, AI 이미지 생성 무료 이용"}</div>
                </FadeIn>
                <FadeIn {visible} delay={0.4}>
                    <div class="reserve-guide">{"사전 예약 신청을 위해 아래 폼을 입력해주세요"}</div>
                </FadeIn>
                <FadeIn {visible} delay={0.5}>
                    <div class="reserve-form">
                        <div class="form-row">
                            <div class="form-column">
                                <div class="form-label">{"성별"}</div>
                                <div class="form-label">{"생년월일"}</div>
                                <div class="form-label">{"이메일 주소"}</div>
                            </div>
                            <div class="form-column">
                                <div class="gender-toggle">
                                    {
                                        [Gender::Male, Gender::Female].into_iter().map(|option| html! {
                                            <button
                                                type="button"
                                                class={classes!("gender-button", (option == gender).then(|| "active"))}
                                                onclick={set_gender(option)}
                                            >
                                                { option.label() }
                                            </button>
                                        }).collect::<Html>()
                                    }
                                </div>
                                <input
                                    class="form-input"
                                    placeholder="2000/12/12"
                                    readonly=true
                                    value={draft.birth_date.clone()}
                                    onclick={open_picker}
                                />
                                <input
                                    class="form-input"
                                    type="email"
                                    placeholder="예) dasoni@naver.com"
                                    value={draft.email.clone()}
                                    oninput={on_email}
                                />
                            </div>
                        </div>
                        <button
                            type="button"
                            class={classes!("reserve-submit", (*submitting).then(|| "busy"))}
                            disabled={*submitting}
                            onclick={on_submit}
                        >
                            {"사전 예약 제출하기"}
                        </button>
                    </div>
                </FadeIn>
            </section>

            if *picker_open {
                <DatePickerModal
                    selected={draft.birth_date.clone()}
                    on_select={on_pick_date}
                    on_close={close_picker}
                />
            }
            if *confirm_open {
                <ReserveConfirmModal on_close={close_confirm} />
            }
        </>
    }
}

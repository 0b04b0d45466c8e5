use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::observers::use_reveal_once;
use crate::sections::common::SectionProps;

#[function_component(MyHallSection)]
pub fn my_hall_section(props: &SectionProps) -> Html {
    let visible = use_reveal_once(props.node_ref.clone(), 0.5);

    html! {
        <section ref={props.node_ref.clone()} data-tab-id="myHall" class="section my-hall">
            <FadeIn {visible}>
                <div class="section-icon">
                    <img src="/assets/img-blue-house.svg" alt="my hall icon" />
                    <div class="section-label">{"나의 추모관"}</div>
                </div>
            </FadeIn>
            <FadeIn {visible} delay={0.1}>
                <h2 class="section-title">{"훗날, 남겨질 소중한 사람에게 전하고 싶은 진심이 있나요?"}</h2>
            </FadeIn>
            <FadeIn {visible} delay={0.2}>
                <p class="section-subtitle">
                    {"나의 추모관을 개설해 보세요"}
                    <br />
                    {"기억하고 싶은 내 삶의 순간들을 기록하고"}
                    <br />
                    {"사랑하는 사람들에게 하고 싶은 말을 편지로 남길 수 있어요"}
                </p>
            </FadeIn>
            <FadeIn {visible} delay={0.3}>
                <img src="/assets/img-my-hall.svg" class="my-hall-mockup" alt="my hall mockup" />
            </FadeIn>
        </section>
    }
}

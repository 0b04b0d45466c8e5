use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::observers::use_reveal_once;
use crate::sections::common::SectionProps;

struct PhotoMemory {
    author: &'static str,
    date: &'static str,
    text: &'static str,
    tint: &'static str,
}

const MEMORIES: &[PhotoMemory] = &[
    PhotoMemory {
        author: "박철형",
        date: "2008년 겨울",
        text: "솜사탕 하나를 사주니 세상을 다 가진 듯 웃던 네 얼굴. 작은 손으로 솜사탕을 쥐고 아빠를 보며 웃던 모습이 아직도 눈에 선하구나.",
        tint: "warm",
    },
    PhotoMemory {
        author: "이수정",
        date: "2015년 여름",
        text: "우리 가족의 바다가 된 날. 파도소리에 묻힌 웃음소리가 아직도 귓가에 머물러 있어요.",
        tint: "blue",
    },
];

#[function_component(MemorialSection)]
pub fn memorial_section(props: &SectionProps) -> Html {
    let visible = use_reveal_once(props.node_ref.clone(), 0.3);

    html! {
        <section ref={props.node_ref.clone()} data-tab-id="memorial" class="section memorial">
            <FadeIn {visible}>
                <div class="section-icon">
                    <img src="/assets/img-house.svg" alt="memorial icon" />
                    <div class="section-label">{"추모관"}</div>
                </div>
            </FadeIn>
            <FadeIn {visible} delay={0.1}>
                <h2 class="section-title">{"고인과 함께한 사진을 담아둘 수 있어요"}</h2>
            </FadeIn>
            <FadeIn {visible} delay={0.2}>
                <p class="section-subtitle">
                    {"가족, 지인과 함께 추모관을 방문하고"}
                    <br />
                    {"사진과 추억을 나눌 수 있어요."}
                </p>
            </FadeIn>
            <FadeIn {visible} delay={0.3}>
                <div class="card-scroll">
                    {
                        MEMORIES.iter().enumerate().map(|(i, memory)| html! {
                            <article class={classes!("photo-card", (i > 0).then(|| "dimmed"))}>
                                <div class="card-header">
                                    <div class="avatar"></div>
                                    <div class="card-name">{ memory.author }</div>
                                </div>
                                <div class={classes!("card-image", memory.tint)}></div>
                                <div class="card-body">
                                    <div class="card-date">{ memory.date }</div>
                                    <p class="card-text">{ memory.text }</p>
                                </div>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </FadeIn>
        </section>
    }
}

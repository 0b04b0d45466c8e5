use yew::prelude::*;

use crate::components::audio_player::AudioPlayer;
use crate::components::card_stack::CardStack;
use crate::components::fade_in::FadeIn;
use crate::observers::use_reveal_once;
use crate::sections::common::SectionProps;

const LETTER_IMAGES: [&str; 3] = [
    "/assets/img-letter-1.svg",
    "/assets/img-letter-2.svg",
    "/assets/img-letter-3.svg",
];

const SAMPLE_VOICE: &str = "/assets/sample-voice.mp3";

#[function_component(LettersSection)]
pub fn letters_section(props: &SectionProps) -> Html {
    let voice_ref = use_node_ref();
    let section_visible = use_reveal_once(props.node_ref.clone(), 0.3);
    // The voice block sits far below the stack, so it animates on its own.
    let voice_visible = use_reveal_once(voice_ref.clone(), 0.9);

    let images: Vec<AttrValue> = LETTER_IMAGES.iter().map(|src| AttrValue::from(*src)).collect();

    html! {
        <section ref={props.node_ref.clone()} data-tab-id="letters" class="section letters">
            <FadeIn visible={section_visible}>
                <div class="section-icon">
                    <img src="/assets/img-postbox.svg" alt="postbox" />
                    <div class="section-label">{"편지함"}</div>
                </div>
            </FadeIn>
            <FadeIn visible={section_visible} delay={0.1}>
                <div class="letter-title">{"보고픈 마음을 담아 고인께 편지를 남겨보세요"}</div>
            </FadeIn>
            <FadeIn visible={section_visible} delay={0.2}>
                <CardStack {images} />
            </FadeIn>

            <div class="voice-section" ref={voice_ref}>
                <FadeIn visible={voice_visible}>
                    <h2 class="section-title voice-title">
                        {"고인의 목소리로 재현한"}
                        <br />
                        {"AI 음성 편지를 받을 수 있어요"}
                    </h2>
                </FadeIn>
                <FadeIn visible={voice_visible} delay={0.1}>
                    <p class="section-subtitle voice-subtitle">
                        {"나를 부르던 다정한 애칭, 우리가 나눴던 추억을"}
                        <br />
                        {"목소리로 다시 만날 수 있어요"}
                    </p>
                </FadeIn>
                <FadeIn visible={voice_visible} delay={0.2}>
                    <img src="/assets/img-tape.svg" class="tape-image" alt="" />
                </FadeIn>
                <FadeIn visible={voice_visible} delay={0.3}>
                    <AudioPlayer src={SAMPLE_VOICE} />
                </FadeIn>
                <FadeIn visible={voice_visible} delay={0.4}>
                    <div class="voice-text">{"실제 ㅇㅇㅇ씨의 음성으로 재현한 테스트 편지입니다."}</div>
                </FadeIn>
            </div>
        </section>
    }
}

use log::warn;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlAudioElement};
use yew::prelude::*;

use crate::audio::{format_clock, progress_percent, seek_fraction, seek_time};

#[derive(Properties, PartialEq)]
pub struct AudioPlayerProps {
    pub src: AttrValue,
}

#[function_component(AudioPlayer)]
pub fn audio_player(props: &AudioPlayerProps) -> Html {
    let audio_ref = use_node_ref();
    let bar_ref = use_node_ref();
    let playing = use_state_eq(|| false);
    let elapsed = use_state_eq(|| 0.0_f64);
    let duration = use_state_eq(|| 0.0_f64);

    let toggle = {
        let audio_ref = audio_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
                return;
            };
            if !audio.paused() {
                if let Err(e) = audio.pause() {
                    warn!("pause failed: {:?}", e);
                }
                return;
            }
            match audio.play() {
                Ok(promise) => {
                    spawn_local(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            warn!("playback refused: {:?}", e);
                        }
                    });
                }
                Err(e) => warn!("play failed: {:?}", e),
            }
        })
    };

    let seek = {
        let audio_ref = audio_ref.clone();
        let bar_ref = bar_ref.clone();
        let elapsed = elapsed.clone();
        Callback::from(move |e: MouseEvent| {
            let (Some(audio), Some(bar)) = (audio_ref.cast::<HtmlAudioElement>(), bar_ref.cast::<Element>()) else {
                return;
            };
            let rect = bar.get_bounding_client_rect();
            let fraction = seek_fraction(e.client_x() as f64, rect.left(), rect.width());
            let target = seek_time(fraction, audio.duration());
            audio.set_current_time(target);
            elapsed.set(target);
        })
    };

    let on_play = {
        let playing = playing.clone();
        Callback::from(move |_: Event| playing.set(true))
    };
    let on_pause = {
        let playing = playing.clone();
        Callback::from(move |_: Event| playing.set(false))
    };
    let on_ended = {
        let playing = playing.clone();
        let elapsed = elapsed.clone();
        Callback::from(move |_: Event| {
            playing.set(false);
            elapsed.set(0.0);
        })
    };
    let on_time = {
        let audio_ref = audio_ref.clone();
        let elapsed = elapsed.clone();
        Callback::from(move |_: Event| {
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                elapsed.set(audio.current_time());
            }
        })
    };
    let on_metadata = {
        let audio_ref = audio_ref.clone();
        let duration = duration.clone();
        Callback::from(move |_: Event| {
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                duration.set(audio.duration());
            }
        })
    };

    let fill = format!("width: {}%;", progress_percent(*elapsed, *duration));

    html! {
        <div class="voice-player">
            <audio
                ref={audio_ref}
                src={props.src.clone()}
                preload="metadata"
                onplay={on_play}
                onpause={on_pause}
                onended={on_ended}
                ontimeupdate={on_time}
                onloadedmetadata={on_metadata}
            />
            <button
                type="button"
                class={classes!("voice-toggle", (*playing).then(|| "playing"))}
                onclick={toggle}
                aria-label={if *playing { "일시정지" } else { "재생" }}
            >
                { if *playing { "❚❚" } else { "▶" } }
            </button>
            <div class="voice-track">
                <div class="voice-bar" ref={bar_ref} onclick={seek}>
                    <div class="voice-bar-fill" style={fill}></div>
                </div>
                <div class="voice-time">
                    <span>{ format_clock(*elapsed) }</span>
                    <span>{ format_clock(*duration) }</span>
                </div>
            </div>
        </div>
    }
}

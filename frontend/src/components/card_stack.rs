use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::carousel::{Carousel, CarouselAction, Point, EXIT_DURATION_MS};

#[derive(Properties, PartialEq)]
pub struct CardStackProps {
    pub images: Vec<AttrValue>,
}

fn touch_point(e: &TouchEvent) -> Option<Point> {
    e.touches()
        .get(0)
        .map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64))
}

fn mouse_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

/// Stack of letter cards. The front card can be dragged sideways; a long
/// enough swipe sends it to the back of the stack.
#[function_component(CardStack)]
pub fn card_stack(props: &CardStackProps) -> Html {
    let len = props.images.len();
    let carousel = use_reducer_eq(move || Carousel::new(len));

    // The pending timeout is dropped, and so cancelled, as soon as the exit
    // it belongs to is no longer the one in flight.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |pending| {
                let timeout = pending.map(|token| {
                    Timeout::new(EXIT_DURATION_MS, move || {
                        dispatcher.dispatch(CarouselAction::FinishExit(token));
                    })
                });
                move || drop(timeout)
            },
            carousel.pending_exit(),
        );
    }

    let on_mouse_down = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| carousel.dispatch(CarouselAction::Press(mouse_point(&e))))
    };
    let on_mouse_move = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| carousel.dispatch(CarouselAction::Move(mouse_point(&e))))
    };
    let on_mouse_up = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Release))
    };
    let on_touch_start = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(point) = touch_point(&e) {
                carousel.dispatch(CarouselAction::Press(point));
            }
        })
    };
    let on_touch_move = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(point) = touch_point(&e) {
                carousel.dispatch(CarouselAction::Move(point));
            }
        })
    };
    let on_touch_end = {
        let carousel = carousel.clone();
        Callback::from(move |_: TouchEvent| carousel.dispatch(CarouselAction::Release))
    };

    let cards = carousel
        .ring()
        .order()
        .iter()
        .enumerate()
        .filter_map(|(depth, &card)| {
            let image = props.images.get(card)?.clone();
            let style = carousel.transform_for(card).to_style();
            let alt = format!("letter-{}", card + 1);

            Some(if depth == 0 {
                html! {
                    <div
                        key={card}
                        class="swipe-card front"
                        {style}
                        onmousedown={on_mouse_down.clone()}
                        onmousemove={on_mouse_move.clone()}
                        onmouseup={on_mouse_up.clone()}
                        onmouseleave={on_mouse_up.clone()}
                        ontouchstart={on_touch_start.clone()}
                        ontouchmove={on_touch_move.clone()}
                        ontouchend={on_touch_end.clone()}
                    >
                        <img class="letter-image" src={image} {alt} />
                    </div>
                }
            } else {
                html! {
                    <div key={card} class="swipe-card" {style}>
                        <img class="letter-image" src={image} {alt} />
                    </div>
                }
            })
        })
        .collect::<Html>();

    html! {
        <div class="letter-stack-wrapper">
            <div class="letter-card-stack">
                { cards }
            </div>
        </div>
    }
}

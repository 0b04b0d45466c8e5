use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    pub visible: bool,
    /// Seconds to wait before this item starts moving.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let style = format!("transition-delay: {}s;", props.delay);

    html! {
        <div class={classes!("fade-in", props.visible.then(|| "visible"))} style={style}>
            { for props.children.iter() }
        </div>
    }
}

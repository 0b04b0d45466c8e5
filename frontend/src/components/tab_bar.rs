use yew::prelude::*;

use crate::scroll_sync::Section;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Section,
    pub on_select: Callback<Section>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    let TabBarProps { active, on_select } = props;

    html! {
        <nav class="tab-bar">
            <div class="tab-list">
                {
                    Section::ALL.iter().map(|section| {
                        let section = *section;
                        let onclick = {
                            let on_select = on_select.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(section))
                        };
                        html! {
                            <button
                                key={section.id()}
                                type="button"
                                class={classes!("tab-item", (section == *active).then(|| "active"))}
                                {onclick}
                            >
                                { section.label() }
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        </nav>
    }
}

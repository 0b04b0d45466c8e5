use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::reserve_button::FloatingReserveButton;
use crate::components::tab_bar::TabBar;
use crate::config;
use crate::observers::{use_intersecting, WatchOptions};
use crate::scroll_sync::{scroll_to_section, use_active_section, Section, SectionRegistry};
use crate::sections::letters::LettersSection;
use crate::sections::memorial::MemorialSection;
use crate::sections::my_hall::MyHallSection;
use crate::sections::reserve::ReserveSection;

#[function_component(Landing)]
pub fn landing() -> Html {
    let registry = use_memo(|_| SectionRegistry::new(&Section::ALL), ());
    let inline_reserve_ref = use_node_ref();

    // Scroll to top only on initial mount
    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let active = use_active_section((*registry).clone(), config::HEADER_OFFSET);

    // The floating button gets out of the way while either of the other
    // reserve entry points is on screen.
    let watch = WatchOptions::threshold(0.0).with_root_margin("-72px 0px 0px 0px");
    let reserve_on_screen = use_intersecting(registry.node_ref(Section::Reserve), watch.clone());
    let inline_on_screen = use_intersecting(inline_reserve_ref.clone(), watch);

    let go_to = {
        let registry = registry.clone();
        Callback::from(move |section: Section| {
            scroll_to_section(&registry, section, config::HEADER_OFFSET);
        })
    };
    let go_to_reserve = {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(Section::Reserve))
    };

    html! {
        <div class="landing-page">
            <Header inline_ref={inline_reserve_ref} on_reserve={go_to_reserve.clone()} />
            <TabBar {active} on_select={go_to} />
            <MemorialSection node_ref={registry.node_ref(Section::Memorial)} />
            <LettersSection node_ref={registry.node_ref(Section::Letters)} />
            <MyHallSection node_ref={registry.node_ref(Section::MyHall)} />
            <ReserveSection node_ref={registry.node_ref(Section::Reserve)} />
            <Footer />
            <FloatingReserveButton
                visible={!reserve_on_screen && !inline_on_screen}
                onclick={go_to_reserve}
            />
        </div>
    }
}

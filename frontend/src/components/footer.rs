use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <>
            <footer class="footer">
                <img src="/assets/img-footer.svg" alt="다소니" />
            </footer>
            <div class="footer-contacts">
                <div class="footer-row">
                    <span class="footer-label">{"Instagram"}</span>
                    <span class="footer-content">{"@dasoni.official"}</span>
                </div>
                <div class="footer-row">
                    <span class="footer-label">{"Email"}</span>
                    <span class="footer-content">{"dasonimemory@gmail.com"}</span>
                </div>
            </div>
        </>
    }
}

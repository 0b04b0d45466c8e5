use yew::prelude::*;

/// Every scroll-tracked section takes the handle the page registered for it.
#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub node_ref: NodeRef,
}

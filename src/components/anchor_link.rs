use log::debug;
use yew::prelude::*;

use crate::scroll;

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    /// In-page target such as `#features`.
    pub href: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub onclick: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// `<a href="#…">` that scrolls smoothly and leaves room for the fixed navbar.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let notify = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            match scroll::scroll_to_anchor(&href) {
                Ok(true) => e.prevent_default(),
                Ok(false) => {}
                Err(err) => debug!("Anchor scroll to {} failed: {}", href, err),
            }
            notify.emit(());
        })
    };

    html! {
        <a href={props.href.clone()} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub children: Children,
    /// Inline style override, e.g. the weather card background
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

#[function_component(Card)]
pub fn card(props: &Props) -> Html {
    html! {
        <div class="card bg-base-100 shadow" style={props.style.clone()}>
            <div class="card-body">
                <h2 class="card-title">{ &props.title }</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}

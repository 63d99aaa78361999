use super::sketch_view::SketchView;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! { <SketchView /> }
}

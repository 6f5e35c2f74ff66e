//! Single light toggle.

use leptos::prelude::*;
use smarthome_domain::action::Action;

use crate::context::use_smart_home;

pub(crate) const ON_BACKGROUND: &str = "rgb(238, 238, 238)";
pub(crate) const OFF_BACKGROUND: &str = "rgb(68, 68, 68)";

const ON_LABEL: &str = "\u{1F4A1}";
const OFF_LABEL: &str = "\u{26AB}\u{FE0F}";

fn light_style(on: bool) -> String {
    let background = if on { ON_BACKGROUND } else { OFF_BACKGROUND };
    format!("border: 1px solid gray; padding: 2rem; font-size: 3rem; background: {background};")
}

/// A button showing whether light `id` is on. Clicking it toggles the light.
///
/// The on/off value comes from the smart-home context, never from props.
#[component]
pub fn Light(
    /// Index of the light in the shared state.
    id: usize,
) -> impl IntoView {
    let home = use_smart_home();
    let lights = home.lights();
    let is_on = move || lights.with(|lights| lights.is_on(id));

    view! {
        <button
            data-testid=format!("light-{id}")
            id=id.to_string()
            style=move || light_style(is_on())
            on:click=move |_| home.dispatch(Action::Toggle(id))
        >
            {move || if is_on() { ON_LABEL } else { OFF_LABEL }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use leptos::context::Provider;
    use leptos::tachys::view::RenderHtml;
    use smarthome_domain::lights::LightsState;

    use super::*;
    use crate::components::testing::light_flags;
    use crate::context::SmartHomeContext;

    fn render_with(lights: Vec<bool>, id: usize) -> String {
        Owner::new().with(|| {
            let home = SmartHomeContext::stored(LightsState::new(lights));
            view! {
                <Provider value=home>
                    <Light id/>
                </Provider>
            }
            .to_html()
        })
    }

    #[test]
    fn should_build_style_from_background() {
        assert_eq!(
            light_style(true),
            "border: 1px solid gray; padding: 2rem; font-size: 3rem; background: rgb(238, 238, 238);"
        );
        assert_eq!(
            light_style(false),
            "border: 1px solid gray; padding: 2rem; font-size: 3rem; background: rgb(68, 68, 68);"
        );
    }

    #[test]
    fn should_render_on_variant_from_context() {
        let html = render_with(vec![false, true], 1);
        assert!(html.contains(r#"data-testid="light-1""#));
        assert!(html.contains(r#"id="1""#));
        assert!(html.contains("border: 1px solid gray; padding: 2rem; font-size: 3rem;"));
        assert!(html.contains("background: rgb(238, 238, 238)"));
        assert!(html.contains(ON_LABEL));
        assert_eq!(light_flags(&html), vec![true]);
    }

    #[test]
    fn should_render_off_variant_from_context() {
        let html = render_with(vec![false, true], 0);
        assert!(html.contains(r#"data-testid="light-0""#));
        assert!(html.contains("background: rgb(68, 68, 68)"));
        assert!(html.contains(OFF_LABEL));
        assert_eq!(light_flags(&html), vec![false]);
    }

    #[test]
    fn should_render_off_without_provider() {
        let html = Owner::new().with(|| view! { <Light id=0/> }.to_html());
        assert!(html.contains(r#"data-testid="light-0""#));
        assert!(html.contains("background: rgb(68, 68, 68)"));
        assert!(!html.contains(ON_LABEL));
    }

    #[test]
    fn should_follow_the_provided_value() {
        let on = render_with(vec![true], 0);
        let off = render_with(vec![false], 0);
        assert_ne!(on, off);
    }

    #[test]
    fn should_render_off_for_light_missing_from_state() {
        let html = render_with(vec![true], 4);
        assert!(html.contains(r#"data-testid="light-4""#));
        assert_eq!(light_flags(&html), vec![false]);
    }
}

//! Grid of every light in the house.

use leptos::prelude::*;
use smarthome_domain::lights::LightsState;

use super::Light;
use crate::context::use_smart_home;

const GRID_STYLE: &str = "font-size: 5rem; display: grid; grid-template-columns: min-content min-content; gap: 3px; align-items: center; padding-top: 1rem;";

/// One [`Light`] per entry of the shared light state, keyed by index.
#[component]
pub fn SmartHome() -> impl IntoView {
    let lights = use_smart_home().lights();

    view! {
        <section style=GRID_STYLE>
            <For
                each=move || 0..lights.with(LightsState::len)
                key=|id| *id
                children=move |id| view! { <Light id/> }
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use leptos::context::Provider;
    use leptos::tachys::view::RenderHtml;

    use super::*;
    use crate::components::testing::light_flags;
    use crate::context::SmartHomeContext;

    fn render_with(lights: Vec<bool>) -> String {
        Owner::new().with(|| {
            let home = SmartHomeContext::stored(LightsState::new(lights));
            view! {
                <Provider value=home>
                    <SmartHome/>
                </Provider>
            }
            .to_html()
        })
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle} not rendered in {html}"))
    }

    #[test]
    fn should_render_grid_section() {
        let html = render_with(vec![false]);
        assert!(html.contains("<section"));
        assert!(html.contains(GRID_STYLE));
    }

    #[test]
    fn should_render_three_lights_off_without_provider() {
        let html = Owner::new().with(|| view! { <SmartHome/> }.to_html());
        assert_eq!(light_flags(&html), vec![false, false, false]);
    }

    #[test]
    fn should_render_one_light_per_flag_in_order() {
        let html = render_with(vec![false, true, false]);

        assert_eq!(light_flags(&html), vec![false, true, false]);
        assert!(!html.contains(r#"data-testid="light-3""#));

        let first = position(&html, r#"data-testid="light-0""#);
        let second = position(&html, r#"data-testid="light-1""#);
        let third = position(&html, r#"data-testid="light-2""#);
        assert!(first < second && second < third);
    }

    #[test]
    fn should_render_as_many_lights_as_the_state_holds() {
        let html = render_with(vec![true, true, false, true, false]);
        assert_eq!(light_flags(&html), vec![true, true, false, true, false]);
    }

    #[test]
    fn should_follow_the_provided_value() {
        let mixed = render_with(vec![false, true, false]);
        let all_on = render_with(vec![true, true, true]);
        assert_ne!(mixed, all_on);
        assert_eq!(light_flags(&all_on), vec![true, true, true]);
    }
}

//! Leptos ECharts Bridge
//!
//! Mounts an Apache ECharts instance into a `<div>` and keeps it in sync with
//! a reactive option object. The `echarts` global must be loaded by the host
//! page before the component mounts.

use leptos::html::Div;
use leptos::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Chart instance returned by `echarts.init`.
    pub type ChartInstance;

    #[wasm_bindgen(js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &web_sys::HtmlElement, theme: &JsValue, opts: &JsValue) -> ChartInstance;

    #[wasm_bindgen(method, js_name = setOption)]
    fn set_option(this: &ChartInstance, option: &JsValue, not_merge: bool);

    #[wasm_bindgen(method)]
    fn resize(this: &ChartInstance);

    #[wasm_bindgen(method)]
    fn dispose(this: &ChartInstance);
}

/// ECharts rendering backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Renderer {
    #[default]
    Svg,
    Canvas,
}

impl Renderer {
    pub fn as_str(self) -> &'static str {
        match self {
            Renderer::Svg => "svg",
            Renderer::Canvas => "canvas",
        }
    }
}

/// Options object passed as the third argument of `echarts.init`
pub fn init_options(renderer: Renderer) -> Value {
    json!({ "renderer": renderer.as_str() })
}

/// Convert a JSON option into a plain JS object (maps become objects, not `Map`s).
pub fn to_js_object(value: &Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

/// Reactive chart container.
///
/// Every change of `option` replaces the chart option wholesale (`notMerge`),
/// so series removed from the option disappear from the chart. The instance
/// follows window resizes and is disposed when the component unmounts.
#[component]
pub fn EChart(
    #[prop(into)] option: Signal<Value>,
    #[prop(into, default = String::from("height: 260px;"))] style: String,
    #[prop(optional)] renderer: Renderer,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let instance = StoredValue::new_local(None::<ChartInstance>);

    Effect::new(move |_| {
        let current = option.get();
        let Some(el) = container.get() else { return };

        let js_option = match to_js_object(&current) {
            Ok(js) => js,
            Err(e) => {
                log::warn!("[EChart] option conversion failed: {}", e);
                return;
            }
        };
        instance.update_value(|slot| {
            let chart = slot.get_or_insert_with(|| {
                let opts = to_js_object(&init_options(renderer)).unwrap_or(JsValue::UNDEFINED);
                echarts_init(&el, &JsValue::NULL, &opts)
            });
            chart.set_option(&js_option, true);
        });
    });

    let resize_listener = window_event_listener(leptos::ev::resize, move |_| {
        instance.with_value(|slot| {
            if let Some(chart) = slot {
                chart.resize();
            }
        });
    });

    on_cleanup(move || {
        resize_listener.remove();
        let _ = instance.try_update_value(|slot| {
            if let Some(chart) = slot.take() {
                chart.dispose();
            }
        });
    });

    view! { <div class="echart" node_ref=container style=style></div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_renderer_is_svg() {
        assert_eq!(Renderer::default(), Renderer::Svg);
        assert_eq!(init_options(Renderer::default()), json!({ "renderer": "svg" }));
        assert_eq!(init_options(Renderer::Canvas)["renderer"], "canvas");
    }
}

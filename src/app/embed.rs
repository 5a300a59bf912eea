//! The browser side of the scheduling embed: the `Cal` global and its script tag.

use js_sys::{Array, Function, Object, Promise, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;

use crate::portfolio::{
    contact::LocalFuture,
    scheduler::{EmbedBackend, EmbedCall, EmbedError},
};

const GLOBAL: &str = "Cal";

#[derive(Default)]
pub struct DomEmbed {
    script: Option<HtmlScriptElement>,
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

fn cal_handle() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str(GLOBAL))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Body of the queuing `Cal` global the embed script expects to find. Every
/// call lands on `Cal.q`, and `init` also registers a namespaced api function
/// under `Cal.ns` with its own queue. The script takes over both queues when it
/// loads.
const SHIM: &str = r#"
const cal = window.Cal;
const ar = arguments;
if (ar[0] === "init") {
    const api = function () { api.q.push(arguments); };
    const namespace = ar[1];
    api.q = [];
    if (typeof namespace === "string") {
        cal.ns[namespace] = cal.ns[namespace] || api;
        api.q.push(ar);
        cal.q.push(["initNamespace", namespace]);
    } else {
        cal.q.push(ar);
    }
    return;
}
cal.q.push(ar);
"#;

fn install_shim(window: &web_sys::Window) -> Result<(), EmbedError> {
    let shim: JsValue = Function::new_no_args(SHIM).into();
    let set = |target: &JsValue, key: &str, value: &JsValue| {
        Reflect::set(target, &JsValue::from_str(key), value)
            .map(|_| ())
            .map_err(|e| EmbedError::ScriptInjection(js_err(e)))
    };
    set(&shim, "q", &JsValue::from(Array::new()))?;
    set(&shim, "ns", &JsValue::from(Object::new()))?;
    set(&shim, "loaded", &JsValue::TRUE)?;
    set(&JsValue::from(window.clone()), GLOBAL, &shim)
}

fn to_js(call: &EmbedCall) -> Result<JsValue, EmbedError> {
    JSON::parse(&call.payload().to_string()).map_err(|e| EmbedError::Dispatch(js_err(e)))
}

impl EmbedBackend for DomEmbed {
    fn handle_present(&self) -> bool {
        cal_handle().is_some()
    }

    fn inject_script(
        &mut self,
        src: &str,
    ) -> Result<LocalFuture<Result<(), EmbedError>>, EmbedError> {
        let window = web_sys::window().ok_or(EmbedError::NoWindow)?;
        let document = window.document().ok_or(EmbedError::NoWindow)?;
        let head = document
            .head()
            .ok_or_else(|| EmbedError::ScriptInjection("document has no head".to_string()))?;

        if cal_handle().is_none() {
            install_shim(&window)?;
        }

        let script = document
            .create_element("script")
            .map_err(|e| EmbedError::ScriptInjection(js_err(e)))?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|_| EmbedError::ScriptInjection("not a script element".to_string()))?;
        script.set_src(src);
        script.set_async(true);

        let loaded = Promise::new(&mut |resolve, reject| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });

        head.append_child(&script)
            .map_err(|e| EmbedError::ScriptInjection(js_err(e)))?;
        self.script = Some(script);

        Ok(Box::pin(async move {
            JsFuture::from(loaded)
                .await
                .map(|_| ())
                .map_err(|_| EmbedError::ScriptLoad)
        }))
    }

    fn dispatch(&mut self, call: &EmbedCall) -> Result<(), EmbedError> {
        let cal = cal_handle().ok_or(EmbedError::MissingHandle)?;
        let payload = to_js(call)?;
        let namespace = JsValue::from_str(call.namespace());
        let method = JsValue::from_str(call.method());

        let res = match call {
            EmbedCall::Init { .. } => cal.call3(&JsValue::NULL, &method, &namespace, &payload),
            EmbedCall::Inline { .. } | EmbedCall::Ui { .. } => {
                let ns = Reflect::get(&cal, &JsValue::from_str("ns"))
                    .and_then(|ns| Reflect::get(&ns, &namespace))
                    .map_err(|e| EmbedError::Dispatch(js_err(e)))?
                    .dyn_into::<Function>()
                    .map_err(|_| EmbedError::Dispatch(format!("{} not initialised", call.namespace())))?;
                ns.call2(&JsValue::NULL, &method, &payload)
            }
        };
        res.map(|_| ()).map_err(|e| EmbedError::Dispatch(js_err(e)))
    }

    fn discard_handle(&mut self) {
        if let Some(script) = self.script.take() {
            script.remove();
        }
        if let Some(window) = web_sys::window() {
            if let Err(e) = Reflect::delete_property(&window, &JsValue::from_str(GLOBAL)) {
                log::debug!("couldn't remove the embed global: {}", js_err(e));
            }
        }
    }

    fn forget_namespace(&mut self, namespace: &str) {
        let Some(cal) = cal_handle() else {
            return;
        };
        let Ok(ns) = Reflect::get(&cal, &JsValue::from_str("ns")) else {
            return;
        };
        if let Some(ns) = ns.dyn_ref::<Object>() {
            if let Err(e) = Reflect::delete_property(ns, &JsValue::from_str(namespace)) {
                log::debug!("couldn't drop embed namespace {namespace}: {}", js_err(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shim_registers_namespace_on_init() {
        assert!(SHIM.contains(r#"cal.ns[namespace] = cal.ns[namespace] || api;"#));
        assert!(SHIM.contains(r#"cal.q.push(["initNamespace", namespace]);"#));
        // everything else is queued for the script to pick up
        assert!(SHIM.trim_end().ends_with("cal.q.push(ar);"));
    }
}

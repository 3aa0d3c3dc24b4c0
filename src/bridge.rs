//! Host-bridge capability object.
//!
//! The page runs either inside the Telegram mini-app container, where
//! `window.Telegram.WebApp` mediates theming, alerts and data hand-off, or
//! in a plain browser during development. Both cases are hidden behind
//! [`HostBridge`]; pick one with [`init`] at startup and pass the `Rc`
//! around as a single injected dependency.

use std::rc::Rc;

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::models::ThemeParams;

pub trait HostBridge {
    fn expand(&self);
    fn signal_ready(&self);
    fn show_alert(&self, text: &str);
    fn send_data(&self, payload: &str);
    fn theme_params(&self) -> ThemeParams;
    fn open_external(&self, url: &str);
}

/// Select the bridge implementation. Never fails: host setup calls that
/// throw in non-host environments are logged and swallowed.
pub fn init() -> Rc<dyn HostBridge> {
    let bridge: Rc<dyn HostBridge> = match host_webapp() {
        Some(webapp) => {
            web_sys::console::log_1(&"Telegram WebApp bridge detected".into());
            Rc::new(TelegramBridge { webapp })
        }
        None => {
            web_sys::console::warn_1(
                &"Telegram WebApp object not found, using standalone bridge".into(),
            );
            Rc::new(StandaloneBridge)
        }
    };
    bridge.expand();
    bridge.signal_ready();
    bridge
}

fn host_webapp() -> Option<JsValue> {
    let window = web_sys::window()?;
    let telegram = Reflect::get(window.as_ref(), &"Telegram".into()).ok()?;
    if telegram.is_undefined() || telegram.is_null() {
        return None;
    }
    let webapp = Reflect::get(&telegram, &"WebApp".into()).ok()?;
    if webapp.is_undefined() || webapp.is_null() {
        None
    } else {
        Some(webapp)
    }
}

// ---------------------------------------------------------------------------
// Real host integration
// ---------------------------------------------------------------------------

/// Wraps the host-injected `window.Telegram.WebApp` object. All dispatch
/// goes through `Reflect` so a partially-implemented host degrades to
/// console warnings instead of panics.
pub struct TelegramBridge {
    webapp: JsValue,
}

impl TelegramBridge {
    fn call(&self, name: &str, arg: Option<&str>) {
        if let Err(e) = self.try_call(name, arg) {
            web_sys::console::warn_1(
                &format!("WebApp.{} failed: {:?}", name, e).into(),
            );
        }
    }

    fn try_call(&self, name: &str, arg: Option<&str>) -> Result<(), JsValue> {
        let f: Function = Reflect::get(&self.webapp, &JsValue::from_str(name))?.dyn_into()?;
        match arg {
            Some(a) => f.call1(&self.webapp, &JsValue::from_str(a))?,
            None => f.call0(&self.webapp)?,
        };
        Ok(())
    }
}

impl HostBridge for TelegramBridge {
    fn expand(&self) {
        self.call("expand", None);
    }

    fn signal_ready(&self) {
        self.call("ready", None);
    }

    fn show_alert(&self, text: &str) {
        self.call("showAlert", Some(text));
    }

    fn send_data(&self, payload: &str) {
        self.call("sendData", Some(payload));
    }

    fn theme_params(&self) -> ThemeParams {
        Reflect::get(&self.webapp, &"themeParams".into())
            .ok()
            .and_then(|v| serde_wasm_bindgen::from_value(v).ok())
            .unwrap_or_default()
    }

    fn open_external(&self, url: &str) {
        self.call("openLink", Some(url));
    }
}

// ---------------------------------------------------------------------------
// Stand-in for plain-browser development
// ---------------------------------------------------------------------------

pub struct StandaloneBridge;

impl HostBridge for StandaloneBridge {
    fn expand(&self) {}

    fn signal_ready(&self) {}

    fn show_alert(&self, text: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(text);
        }
    }

    fn send_data(&self, payload: &str) {
        web_sys::console::log_1(&format!("[standalone] sendData: {}", payload).into());
    }

    fn theme_params(&self) -> ThemeParams {
        ThemeParams::default()
    }

    fn open_external(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
}

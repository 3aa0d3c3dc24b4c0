//! Authentication triggers.
//!
//! Every `.auth-button` element carries a provider id and an auth-initiation
//! URL in its dataset. A click POSTs to that URL and acts on the decoded
//! `{success, auth_url?, error?}` body: navigate to the provider, or surface
//! the failure through the host bridge. Requests are independent per button;
//! there is no deduplication or cancellation of overlapping clicks.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Headers, HtmlElement, Request, RequestInit, RequestMode, Response};

use crate::bridge::HostBridge;
use crate::constants::{AUTH_BUTTON_CLASS, MSG_AUTH_FAILED, MSG_NO_AUTH_URL};
use crate::dom_utils;
use crate::loading;
use crate::models::AuthResponse;

/// What to do with a decoded auth-initiation response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Navigate the page to the provider's auth URL.
    Redirect(String),
    /// Server said success but gave no URL to follow.
    MissingUrl,
    /// Server-reported failure; the alert text to show.
    Failed(String),
}

pub fn outcome(resp: &AuthResponse) -> AuthOutcome {
    if resp.success {
        match resp.auth_url.as_deref() {
            Some(url) if !url.is_empty() => AuthOutcome::Redirect(url.to_string()),
            _ => AuthOutcome::MissingUrl,
        }
    } else {
        AuthOutcome::Failed(
            resp.error
                .clone()
                .unwrap_or_else(|| MSG_AUTH_FAILED.to_string()),
        )
    }
}

/// Bind click handlers to every auth trigger on the page. Buttons without
/// an auth URL in their dataset are skipped.
pub fn bind(document: &Document, bridge: &Rc<dyn HostBridge>) -> Result<(), JsValue> {
    dom_utils::for_each_selected(
        document,
        &format!(".{}", AUTH_BUTTON_CLASS),
        |el| {
            let button = match el.dyn_into::<HtmlElement>() {
                Ok(b) => b,
                Err(_) => return Ok(()),
            };
            let provider = button
                .dataset()
                .get("provider")
                .unwrap_or_else(|| "unknown".to_string());
            let url = match button.dataset().get("authUrl") {
                Some(u) => u,
                None => return Ok(()),
            };

            let bridge = Rc::clone(bridge);
            let target = button.clone();
            dom_utils::on_click(button.as_ref(), move |_| {
                let bridge = Rc::clone(&bridge);
                let button = target.clone();
                let provider = provider.clone();
                let url = url.clone();
                spawn_local(async move {
                    run_auth_flow(&bridge, &button, &provider, &url).await;
                });
            })
        },
    )
}

async fn run_auth_flow(
    bridge: &Rc<dyn HostBridge>,
    button: &HtmlElement,
    provider: &str,
    url: &str,
) {
    loading::set_loading(button, true);

    match initiate(url).await {
        Ok(resp) => match outcome(&resp) {
            AuthOutcome::Redirect(auth_url) => {
                // The page is about to unload; the button stays in loading
                // state on purpose.
                if let Err(e) = navigate(&auth_url) {
                    loading::set_loading(button, false);
                    web_sys::console::error_1(
                        &format!("navigation to auth URL failed: {:?}", e).into(),
                    );
                    bridge.show_alert(&provider_error_message(provider, &describe(&e)));
                }
            }
            AuthOutcome::MissingUrl => {
                loading::set_loading(button, false);
                bridge.show_alert(MSG_NO_AUTH_URL);
            }
            AuthOutcome::Failed(message) => {
                loading::set_loading(button, false);
                bridge.show_alert(&message);
            }
        },
        Err(e) => {
            loading::set_loading(button, false);
            bridge.show_alert(&provider_error_message(provider, &describe(&e)));
        }
    }
}

/// POST to the auth-initiation endpoint. No body; the JSON content-type is
/// part of the backend contract. The HTTP status is deliberately ignored:
/// error bodies are decodable and take the logical-failure path.
async fn initiate(url: &str) -> Result<AuthResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new()?;
    headers.append("Content-Type", "application/json")?;
    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    let body = text.as_string().unwrap_or_default();
    serde_json::from_str(&body)
        .map_err(|e| JsValue::from_str(&format!("malformed auth response: {}", e)))
}

fn navigate(url: &str) -> Result<(), JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no global window"))?
        .location()
        .set_href(url)
}

/// Alert text for transport-level failures, tagged with the provider so the
/// user can tell which button failed. Used both when the request itself
/// errors and when navigating to the returned auth URL fails.
fn provider_error_message(provider: &str, detail: &str) -> String {
    format!("Ошибка авторизации ({}): {}", provider, detail)
}

/// Human-readable description of a JS error value for the alert text.
fn describe(e: &JsValue) -> String {
    if let Some(err) = e.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(success: bool, auth_url: Option<&str>, error: Option<&str>) -> AuthResponse {
        AuthResponse {
            success,
            auth_url: auth_url.map(str::to_string),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn success_with_url_redirects_exactly() {
        let r = resp(true, Some("https://kc.example/auth?state=abc"), None);
        assert_eq!(
            outcome(&r),
            AuthOutcome::Redirect("https://kc.example/auth?state=abc".into())
        );
    }

    #[test]
    fn success_without_url_is_missing_url() {
        assert_eq!(outcome(&resp(true, None, None)), AuthOutcome::MissingUrl);
        assert_eq!(outcome(&resp(true, Some(""), None)), AuthOutcome::MissingUrl);
    }

    #[test]
    fn failure_uses_server_message() {
        let r = resp(false, None, Some("Keycloak not configured"));
        assert_eq!(
            outcome(&r),
            AuthOutcome::Failed("Keycloak not configured".into())
        );
    }

    #[test]
    fn provider_error_message_names_provider_and_detail() {
        let text = provider_error_message("keycloak", "Failed to fetch");
        assert!(text.contains("keycloak"));
        assert!(text.contains("Failed to fetch"));
        assert!(text.starts_with("Ошибка авторизации"));
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        assert_eq!(
            outcome(&resp(false, None, None)),
            AuthOutcome::Failed(MSG_AUTH_FAILED.into())
        );
        // An auth_url on a failed response is ignored.
        assert_eq!(
            outcome(&resp(false, Some("https://kc.example"), None)),
            AuthOutcome::Failed(MSG_AUTH_FAILED.into())
        );
    }
}

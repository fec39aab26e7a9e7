//! Awaiting the next animation frame from async Dioxus tasks.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Resolve on the browser's next `requestAnimationFrame` callback.
///
/// Resolves immediately when there is no window, so callers polling with a
/// retry budget still terminate.
pub async fn next_animation_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|window| window.request_animation_frame(&resolve).is_ok())
            .unwrap_or(false);
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

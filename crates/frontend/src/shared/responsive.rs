use leptos::prelude::*;

/// Windows narrower than this are laid out for mobile
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Signal tracking whether the window is below the mobile breakpoint.
///
/// The resize listener is removed when the calling owner is cleaned up.
pub fn use_is_mobile() -> ReadSignal<bool> {
    let (is_mobile, set_is_mobile) = signal(window_width().map(is_mobile_width).unwrap_or(false));

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        if let Some(width) = window_width() {
            apply_width(is_mobile, set_is_mobile, width);
        }
    });
    on_cleanup(move || handle.remove());

    is_mobile
}

/// Update the flag if `width` crosses the breakpoint; disposed signals are left alone
fn apply_width(is_mobile: ReadSignal<bool>, set_is_mobile: WriteSignal<bool>, width: f64) {
    let mobile = is_mobile_width(width);
    if is_mobile.try_get_untracked().is_some_and(|current| current != mobile) {
        let _ = set_is_mobile.try_set(mobile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint() {
        assert!(is_mobile_width(375.0));
        assert!(is_mobile_width(767.9));
        assert!(!is_mobile_width(768.0));
        assert!(!is_mobile_width(1440.0));
    }

    #[test]
    fn test_apply_width_follows_breakpoint() {
        let owner = Owner::new();
        owner.with(|| {
            let (is_mobile, set_is_mobile) = signal(false);
            apply_width(is_mobile, set_is_mobile, 375.0);
            assert!(is_mobile.get_untracked());
            apply_width(is_mobile, set_is_mobile, 1024.0);
            assert!(!is_mobile.get_untracked());
        });
    }

    #[test]
    fn test_apply_width_after_cleanup() {
        let owner = Owner::new();
        let (is_mobile, set_is_mobile) = owner.with(|| signal(false));
        owner.cleanup();
        apply_width(is_mobile, set_is_mobile, 375.0);
        assert_eq!(is_mobile.try_get_untracked(), None);
    }
}

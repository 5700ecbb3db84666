use super::*;

#[test]
fn toast_state_default_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "ok");
    let b = state.push(ToastKind::Error, "falhou");
    assert!(b > a);
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
    assert_eq!(state.toasts[1].message, "falhou");
}

#[test]
fn push_drops_oldest_past_capacity() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Success, &format!("m{i}"));
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].message, "m2");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a");
    let b = state.push(ToastKind::Success, "b");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Error, "a");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

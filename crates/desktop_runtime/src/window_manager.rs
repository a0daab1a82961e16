//! Shared window-manager transition helpers used by the registry reducer.

use std::rc::Rc;

use leptos::logging;

use crate::{
    apps,
    model::{AppKind, WindowEntity, WindowId, WindowRegistry},
};

/// Allocates the next process-unique window id. Ids are never reused, even after close.
pub(crate) fn next_window_id(registry: &mut WindowRegistry) -> WindowId {
    let id = WindowId(registry.next_window_id);
    registry.next_window_id = registry.next_window_id.saturating_add(1);
    id
}

/// Creates an entity for `kind` stacked above every open window and appends it.
pub(crate) fn push_new_window(registry: &mut WindowRegistry, kind: AppKind) -> WindowId {
    let id = next_window_id(registry);
    let z_index = next_z_index(registry);
    registry
        .opened_apps
        .push(Rc::new(apps::create_app(kind, id, z_index)));
    id
}

/// Swaps the entity for `window_id` with the value produced by `update`.
///
/// Returns `false` (and leaves every entity untouched) when the id is not open.
pub(crate) fn replace_window(
    registry: &mut WindowRegistry,
    window_id: WindowId,
    update: impl FnOnce(&WindowEntity) -> WindowEntity,
) -> bool {
    let Some(slot) = registry.opened_apps.iter_mut().find(|w| w.id == window_id) else {
        return false;
    };
    let replacement = update(slot.as_ref());
    *slot = Rc::new(replacement);
    true
}

/// Raises `window_id` to `biggest_z_index + 1`, even when it is already on top.
pub(crate) fn raise_window(registry: &mut WindowRegistry, window_id: WindowId) -> bool {
    if registry.window(window_id).is_none() {
        return false;
    }
    let next_z = next_z_index(registry);
    replace_window(registry, window_id, |w| w.with_z_index(next_z))
}

/// Z-index one above every open window.
///
/// Once `u32` is exhausted the stack is renumbered to `1..=n`, keeping its order.
fn next_z_index(registry: &mut WindowRegistry) -> u32 {
    if let Some(next) = registry.biggest_z_index().checked_add(1) {
        return next;
    }
    compact_z_indices(registry);
    registry.biggest_z_index().saturating_add(1)
}

fn compact_z_indices(registry: &mut WindowRegistry) {
    let mut order: Vec<usize> = (0..registry.opened_apps.len()).collect();
    order.sort_by_key(|&index| registry.opened_apps[index].z_index);
    for (rank, index) in order.into_iter().enumerate() {
        let z_index = u32::try_from(rank + 1).unwrap_or(u32::MAX);
        let slot = &mut registry.opened_apps[index];
        if slot.z_index != z_index {
            let replacement = slot.with_z_index(z_index);
            *slot = Rc::new(replacement);
        }
    }
    logging::log!("z-index space exhausted; renumbered {} windows", registry.len());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_ids_are_never_reused() {
        let mut registry = WindowRegistry::new();
        let first = push_new_window(&mut registry, AppKind::Calculator);
        registry.opened_apps.clear();
        let second = push_new_window(&mut registry, AppKind::Calculator);
        assert_eq!(first, WindowId(1));
        assert_eq!(second, WindowId(2));
    }

    #[test]
    fn raise_reassigns_even_when_already_top() {
        let mut registry = WindowRegistry::new();
        let id = push_new_window(&mut registry, AppKind::Tasks);
        assert_eq!(registry.biggest_z_index(), 1);
        assert!(raise_window(&mut registry, id));
        assert_eq!(registry.window(id).map(|w| w.z_index), Some(2));
    }

    fn stack_at_ceiling() -> (WindowRegistry, WindowId, WindowId) {
        let mut registry = WindowRegistry::new();
        let lower = push_new_window(&mut registry, AppKind::Calculator);
        let upper = push_new_window(&mut registry, AppKind::Tasks);
        replace_window(&mut registry, lower, |w| w.with_z_index(u32::MAX - 1));
        replace_window(&mut registry, upper, |w| w.with_z_index(u32::MAX));
        (registry, lower, upper)
    }

    fn z_of(registry: &WindowRegistry, window_id: WindowId) -> Option<u32> {
        registry.window(window_id).map(|w| w.z_index)
    }

    #[test]
    fn raise_at_z_ceiling_renumbers_and_keeps_order() {
        let (mut registry, lower, upper) = stack_at_ceiling();

        assert!(raise_window(&mut registry, lower));
        assert_eq!(z_of(&registry, upper), Some(2));
        assert_eq!(z_of(&registry, lower), Some(3));
        assert_eq!(registry.biggest_z_index(), 3);
    }

    #[test]
    fn push_at_z_ceiling_stacks_new_window_on_top() {
        let (mut registry, lower, upper) = stack_at_ceiling();

        let fresh = push_new_window(&mut registry, AppKind::OtherApp);
        assert_eq!(z_of(&registry, lower), Some(1));
        assert_eq!(z_of(&registry, upper), Some(2));
        assert_eq!(z_of(&registry, fresh), Some(3));
    }

    #[test]
    fn raise_missing_window_at_ceiling_does_not_renumber() {
        let (mut registry, lower, _) = stack_at_ceiling();
        assert!(!raise_window(&mut registry, WindowId(99)));
        assert_eq!(z_of(&registry, lower), Some(u32::MAX - 1));
    }

    #[test]
    fn replace_missing_window_leaves_entities_untouched() {
        let mut registry = WindowRegistry::new();
        push_new_window(&mut registry, AppKind::OtherApp);
        let before = registry.opened_apps.clone();
        assert!(!replace_window(&mut registry, WindowId(99), |w| w.with_minimize(true)));
        assert!(Rc::ptr_eq(&before[0], &registry.opened_apps[0]));
    }
}

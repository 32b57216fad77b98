use sceneview_common::ModelHandle;
use std::collections::BTreeMap;

/// Something the render loop can draw with a shader context.
///
/// `S` is the active shader program as the graphics binding represents it; the
/// registry passes it through untouched.
pub trait Drawable<S: ?Sized> {
    fn draw(&self, shader: &S);
}

/// Registry of drawable models keyed by monotonically allocated handles.
///
/// Uses BTreeMap so draw order follows handle order and is deterministic.
#[derive(Debug, Clone)]
pub struct ModelRegistry<M> {
    models: BTreeMap<ModelHandle, M>,
    next_handle: u64,
}

impl<M> Default for ModelRegistry<M> {
    fn default() -> Self {
        Self {
            models: BTreeMap::new(),
            next_handle: 0,
        }
    }
}

impl<M> ModelRegistry<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a model and return its handle. The first handle is 1.
    pub fn register(&mut self, model: M) -> ModelHandle {
        self.next_handle += 1;
        let handle = ModelHandle(self.next_handle);
        self.models.insert(handle, model);
        tracing::debug!(%handle, live = self.models.len(), "registered model");
        handle
    }

    /// Remove a model. Returns whether anything was removed.
    pub fn deregister(&mut self, handle: ModelHandle) -> bool {
        let removed = self.models.remove(&handle).is_some();
        if removed {
            tracing::debug!(%handle, live = self.models.len(), "deregistered model");
        } else {
            tracing::debug!(%handle, "deregister of unknown handle");
        }
        removed
    }

    /// Draw every registered model once with `shader`. Returns the number of
    /// draw calls issued.
    ///
    /// The registry is borrowed shared for the whole pass, so the set drawn is
    /// exactly the set registered when the call began.
    pub fn draw_all<S: ?Sized>(&self, shader: &S) -> usize
    where
        M: Drawable<S>,
    {
        let _span = tracing::trace_span!("draw_all", models = self.models.len()).entered();
        for model in self.models.values() {
            model.draw(shader);
        }
        self.models.len()
    }

    pub fn get(&self, handle: ModelHandle) -> Option<&M> {
        self.models.get(&handle)
    }

    pub fn get_mut(&mut self, handle: ModelHandle) -> Option<&mut M> {
        self.models.get_mut(&handle)
    }

    pub fn contains(&self, handle: ModelHandle) -> bool {
        self.models.contains_key(&handle)
    }

    /// Live handles in ascending order, copied out of the registry.
    pub fn handles(&self) -> Vec<ModelHandle> {
        self.models.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModelHandle, &M)> {
        self.models.iter().map(|(h, m)| (*h, m))
    }

    /// Counter behind handle allocation: the most recently allocated handle
    /// value, 0 before any registration.
    pub fn next_handle(&self) -> u64 {
        self.next_handle
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type DrawLog = Rc<RefCell<Vec<(&'static str, u32)>>>;

    /// Records every shader context it is drawn with.
    struct Probe {
        name: &'static str,
        log: DrawLog,
    }

    impl Drawable<u32> for Probe {
        fn draw(&self, shader: &u32) {
            self.log.borrow_mut().push((self.name, *shader));
        }
    }

    fn probe(name: &'static str, log: &DrawLog) -> Probe {
        Probe {
            name,
            log: log.clone(),
        }
    }

    #[test]
    fn handles_are_sequential_from_one() {
        let mut reg = ModelRegistry::new();
        let handles: Vec<_> = (0..5).map(|i| reg.register(i)).collect();
        assert_eq!(handles, (1..=5).map(ModelHandle).collect::<Vec<_>>());
        assert_eq!(reg.len(), 5);
    }

    #[test]
    fn handles_are_never_reused() {
        let mut reg = ModelRegistry::new();
        for i in 0..4 {
            reg.register(i);
        }
        assert!(reg.deregister(ModelHandle(2)));
        let next = reg.register(99);
        assert_eq!(next, ModelHandle(5));
        assert!(!reg.contains(ModelHandle(2)));
        assert_eq!(reg.next_handle(), 5);
    }

    #[test]
    fn deregister_missing_returns_false() {
        let mut reg: ModelRegistry<u8> = ModelRegistry::new();
        assert!(!reg.deregister(ModelHandle(1)));
        let h = reg.register(1);
        assert!(reg.deregister(h));
        assert!(!reg.deregister(h));
        assert!(reg.is_empty());
    }

    #[test]
    fn draw_all_empty_draws_nothing() {
        let reg: ModelRegistry<Probe> = ModelRegistry::new();
        assert_eq!(reg.draw_all(&7u32), 0);
    }

    #[test]
    fn draw_all_draws_each_live_model_once() {
        let log: DrawLog = Rc::new(RefCell::new(Vec::new()));
        let mut reg = ModelRegistry::new();
        reg.register(probe("a", &log));
        let b = reg.register(probe("b", &log));
        reg.register(probe("c", &log));
        reg.deregister(b);

        let calls = reg.draw_all(&42u32);
        assert_eq!(calls, 2);
        assert_eq!(*log.borrow(), vec![("a", 42), ("c", 42)]);
    }

    #[test]
    fn handles_snapshot_is_independent() {
        let mut reg = ModelRegistry::new();
        reg.register("x");
        reg.register("y");
        let snapshot = reg.handles();
        reg.register("z");
        assert_eq!(snapshot, vec![ModelHandle(1), ModelHandle(2)]);
        assert_eq!(reg.handles().len(), 3);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut reg = ModelRegistry::new();
        let h = reg.register(String::from("cube"));
        reg.get_mut(h).unwrap().push_str("_lod0");
        assert_eq!(reg.get(h).map(String::as_str), Some("cube_lod0"));
        assert_eq!(reg.iter().count(), 1);
    }
}

//=========================================================================
// Lazy Scene Slot
//=========================================================================
//
// Deferred-construction holder for one registered scene.
//
// State machine (one transition, never reversed):
//   Uninitialized(factory) ──first render/update──> Initialized(scene)
//
// Disposal never forces construction: `dispose_if_initialized` on an
// uninitialized slot is a no-op.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};

//=== Internal Dependencies ===============================================

use super::{EmptyScene, Scene, SceneKey};
use crate::core::graphics::TextureLoader;

//=== SceneFactory ========================================================

/// Deferred scene constructor; receives the image subsystem so scenes can
/// load textures when they are first used.
pub type SceneFactory<K> = Box<dyn FnOnce(&TextureLoader) -> Box<dyn Scene<K>>>;

/// Slot handle shared between the registry and the active scene.
pub type SharedScene<K> = Rc<RefCell<LazyScene<K>>>;

//=== SlotState ===========================================================

/// Construction state of a [`LazyScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Uninitialized,
    Initialized,
}

//=== LazyScene ===========================================================

/// A scene constructed at most once, on first access.
pub struct LazyScene<K: SceneKey> {
    factory: Option<SceneFactory<K>>,
    instance: Option<Box<dyn Scene<K>>>,
}

impl<K: SceneKey> LazyScene<K> {
    //--- Construction -----------------------------------------------------

    /// Wraps `factory` without running it.
    pub fn new<F, T>(factory: F) -> Self
    where
        F: FnOnce(&TextureLoader) -> T + 'static,
        T: Scene<K> + 'static,
    {
        Self {
            factory: Some(Box::new(move |textures: &TextureLoader| {
                Box::new(factory(textures)) as Box<dyn Scene<K>>
            })),
            instance: None,
        }
    }

    /// Wraps an already constructed scene.
    pub fn initialized(scene: Box<dyn Scene<K>>) -> Self {
        Self {
            factory: None,
            instance: Some(scene),
        }
    }

    /// Moves the slot behind a [`SharedScene`] handle.
    pub fn into_shared(self) -> SharedScene<K> {
        Rc::new(RefCell::new(self))
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> SlotState {
        if self.instance.is_some() {
            SlotState::Initialized
        } else {
            SlotState::Uninitialized
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state() == SlotState::Initialized
    }

    //--- Access -----------------------------------------------------------

    /// Returns the scene, constructing it on first call.
    pub fn get_or_init(&mut self, textures: &TextureLoader) -> &mut dyn Scene<K> {
        let factory = &mut self.factory;
        self.instance
            .get_or_insert_with(|| match factory.take() {
                Some(factory) => {
                    debug!(target: "scene", "Constructing scene on first use");
                    factory(textures)
                }
                None => {
                    // Disposed by an outside owner, or an earlier construction panicked
                    error!(target: "scene", "Scene factory already consumed, using empty scene");
                    Box::new(EmptyScene)
                }
            })
            .as_mut()
    }

    /// The constructed scene, or `None` without constructing.
    pub fn get(&mut self) -> Option<&mut dyn Scene<K>> {
        match &mut self.instance {
            Some(scene) => Some(scene.as_mut()),
            None => None,
        }
    }

    /// Consumes the slot, returning the scene only if it was constructed.
    pub fn into_initialized(self) -> Option<Box<dyn Scene<K>>> {
        self.instance
    }

    //--- Disposal ---------------------------------------------------------

    /// Disposes the scene if it was constructed; returns whether it did.
    ///
    /// The instance is dropped after disposal, so a slot is disposed at
    /// most once.
    pub fn dispose_if_initialized(&mut self) -> bool {
        match self.instance.take() {
            Some(mut scene) => {
                scene.dispose();
                true
            }
            None => false,
        }
    }
}

impl<K: SceneKey> std::fmt::Debug for LazyScene<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyScene")
            .field("state", &self.state())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::graphics::Renderer;
    use crate::core::scene::{Disposable, SceneContext};
    use std::cell::Cell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestScene {
        Main,
    }

    impl SceneKey for TestScene {}

    struct CountingScene {
        disposed: Rc<Cell<u32>>,
    }

    impl Disposable for CountingScene {
        fn dispose(&mut self) {
            self.disposed.set(self.disposed.get() + 1);
        }
    }

    impl Scene<TestScene> for CountingScene {
        fn render(&mut self, _renderer: &mut dyn Renderer) {}
        fn update(&mut self, _context: &mut SceneContext<'_, TestScene>) {}
    }

    fn textures() -> TextureLoader {
        TextureLoader::init(None).unwrap()
    }

    fn counting_slot(built: &Rc<Cell<u32>>, disposed: &Rc<Cell<u32>>) -> LazyScene<TestScene> {
        let built = Rc::clone(built);
        let disposed = Rc::clone(disposed);
        LazyScene::new(move |_: &TextureLoader| {
            built.set(built.get() + 1);
            CountingScene { disposed }
        })
    }

    #[test]
    fn new_slot_is_uninitialized() {
        let built = Rc::new(Cell::new(0));
        let disposed = Rc::new(Cell::new(0));
        let slot = counting_slot(&built, &disposed);

        assert_eq!(slot.state(), SlotState::Uninitialized);
        assert_eq!(built.get(), 0);
    }

    #[test]
    fn get_or_init_constructs_once() {
        let built = Rc::new(Cell::new(0));
        let disposed = Rc::new(Cell::new(0));
        let mut slot = counting_slot(&built, &disposed);
        let textures = textures();

        slot.get_or_init(&textures);
        slot.get_or_init(&textures);

        assert_eq!(built.get(), 1);
        assert!(slot.is_initialized());
    }

    #[test]
    fn get_never_constructs() {
        let built = Rc::new(Cell::new(0));
        let disposed = Rc::new(Cell::new(0));
        let mut slot = counting_slot(&built, &disposed);

        assert!(slot.get().is_none());
        assert_eq!(built.get(), 0);
    }

    #[test]
    fn dispose_skips_uninitialized() {
        let built = Rc::new(Cell::new(0));
        let disposed = Rc::new(Cell::new(0));
        let mut slot = counting_slot(&built, &disposed);

        assert!(!slot.dispose_if_initialized());
        assert_eq!(built.get(), 0);
        assert_eq!(disposed.get(), 0);
    }

    #[test]
    fn dispose_runs_exactly_once() {
        let built = Rc::new(Cell::new(0));
        let disposed = Rc::new(Cell::new(0));
        let mut slot = counting_slot(&built, &disposed);

        slot.get_or_init(&textures());

        assert!(slot.dispose_if_initialized());
        assert!(!slot.dispose_if_initialized());
        assert_eq!(disposed.get(), 1);
    }

    #[test]
    fn into_initialized_returns_constructed_scene_only() {
        let built = Rc::new(Cell::new(0));
        let disposed = Rc::new(Cell::new(0));

        let slot = counting_slot(&built, &disposed);
        assert!(slot.into_initialized().is_none());

        let mut slot = counting_slot(&built, &disposed);
        slot.get_or_init(&textures());
        assert!(slot.into_initialized().is_some());
    }
}
